use chrono::{DateTime, Utc};
use serde::Serialize;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Render elapsed seconds the way the profile timer does
pub fn format_time_ago(seconds_ago: i64) -> String {
    let seconds = seconds_ago.max(0);
    if seconds < MINUTE {
        format!("{} sec ago", seconds)
    } else if seconds < HOUR {
        format!("{} min ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{} h ago", seconds / HOUR)
    } else {
        format!("{} d ago", seconds / DAY)
    }
}

/// Time elapsed since a player was last online
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSeen {
    pub last_online: i64,
    pub seconds_ago: i64,
    pub text: String,
}

impl LastSeen {
    pub fn at(last_online: i64, now: DateTime<Utc>) -> Self {
        let seconds_ago = (now.timestamp() - last_online).max(0);
        Self {
            last_online,
            seconds_ago,
            text: format_time_ago(seconds_ago),
        }
    }

    pub fn now(last_online: i64) -> Self {
        Self::at(last_online, Utc::now())
    }
}
