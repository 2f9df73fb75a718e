use crate::api::source::PlayerSource;
use crate::config::ApiSettings;
use crate::domain::{PlayerProfile, Title, TitledPlayersResponse};
use crate::errors::GlanceError;
use crate::http::RateLimitedClient;
use log::{debug, info, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// chess.com public API client
pub struct ChessComClient {
    client: RateLimitedClient,
    base_url: String,
}

impl ChessComClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, GlanceError> {
        let client = RateLimitedClient::from_settings(settings)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the usernames holding a title
    pub async fn fetch_titled(&self, title: Title) -> Result<Vec<String>, GlanceError> {
        let url = self.build_titled_url(title);
        info!("Fetching {} roster from {}", title, url);

        let response: TitledPlayersResponse = self.get_json(&url, title.abbreviation()).await?;

        info!("Fetched {} {} players", response.players.len(), title);
        Ok(response.players)
    }

    /// Fetch a single player profile
    pub async fn fetch_profile(&self, username: &str) -> Result<PlayerProfile, GlanceError> {
        let url = self.build_player_url(username);
        debug!("Fetching profile {} from {}", username, url);
        self.get_json(&url, username).await
    }

    // --- Helper Methods ---

    async fn get_json<T: DeserializeOwned>(&self, url: &str, subject: &str) -> Result<T, GlanceError> {
        let response = self.client.get(url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GlanceError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            warn!("chess.com API returned {} for {}", status, url);
            return Err(GlanceError::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    fn build_titled_url(&self, title: Title) -> String {
        format!("{}/titled/{}", self.base_url, title.abbreviation())
    }

    fn build_player_url(&self, username: &str) -> String {
        format!("{}/player/{}", self.base_url, urlencoding::encode(username))
    }
}

impl PlayerSource for ChessComClient {
    async fn titled_players(&self, title: Title) -> Result<Vec<String>, GlanceError> {
        self.fetch_titled(title).await
    }

    async fn player_profile(&self, username: &str) -> Result<PlayerProfile, GlanceError> {
        self.fetch_profile(username).await
    }
}
