use chrono::{DateTime, Utc};
use serde::Serialize;

use super::activity::LastSeen;
use super::models::PlayerProfile;

/// Presentation view of a profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub username: String,
    pub display_name: String,
    pub handle: String,
    pub avatar_url: Option<String>,
    pub title: Option<String>,
    pub country_code: Option<String>,
    pub status: Option<String>,
    pub profile_url: Option<String>,
    pub followers: Option<u64>,
    /// `YYYY-MM-DD`, UTC
    pub joined: Option<String>,
    pub last_seen: Option<LastSeen>,
}

impl PlayerCard {
    pub fn from_profile(profile: &PlayerProfile, now: DateTime<Utc>) -> Self {
        Self {
            username: profile.username.clone(),
            display_name: profile.display_name().to_string(),
            handle: format!("@{}", profile.username),
            avatar_url: profile.avatar.clone(),
            title: profile.title.clone(),
            country_code: profile.country_code().map(str::to_string),
            status: profile.status.clone(),
            profile_url: profile.url.clone(),
            followers: profile.followers,
            joined: profile.joined.and_then(format_date),
            last_seen: profile.last_online.map(|ts| LastSeen::at(ts, now)),
        }
    }

    /// Plain text lines for terminal output, last-seen excluded
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match &self.title {
            Some(title) => lines.push(format!("{} {}", title, self.display_name)),
            None => lines.push(self.display_name.clone()),
        }
        lines.push(self.handle.clone());
        if let Some(country) = &self.country_code {
            lines.push(format!("Country: {}", country));
        }
        if let Some(status) = &self.status {
            lines.push(format!("Status: {}", status));
        }
        if let Some(joined) = &self.joined {
            lines.push(format!("On Chess.com since {}", joined));
        }
        lines
    }
}

fn format_date(timestamp: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(|dt| dt.format("%Y-%m-%d").to_string())
}
