use serde::Deserialize;

// --- API Response Structures ---

/// Raw `/titled/{title}` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitledPlayersResponse {
    #[serde(default)]
    pub players: Vec<String>,
}

/// Raw `/player/{username}` response. Everything but the username is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerProfile {
    pub username: String,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// API reference such as `https://api.chess.com/pub/country/NO`
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub followers: Option<u64>,
    /// Unix timestamp, seconds
    #[serde(default)]
    pub joined: Option<i64>,
    /// Unix timestamp, seconds
    #[serde(default)]
    pub last_online: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub is_streamer: Option<bool>,
    #[serde(default)]
    pub verified: Option<bool>,
}

impl PlayerProfile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Last path segment of the country reference
    pub fn country_code(&self) -> Option<&str> {
        let country = self.country.as_deref()?;
        country
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|code| !code.is_empty())
    }
}
