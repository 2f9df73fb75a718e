use serde::Serialize;

use crate::cache::RosterStatus;
use crate::domain::Title;
use crate::pagination::PageSlice;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListItem {
    pub rank: usize,
    pub username: String,
    pub profile_path: String,
}

impl PlayerListItem {
    pub fn new(rank: usize, username: String) -> Self {
        let profile_path = format!("/api/player/{}", urlencoding::encode(&username));
        Self {
            rank,
            username,
            profile_path,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListResponse {
    pub title: Title,
    pub query: String,
    #[serde(flatten)]
    pub page: PageSlice<PlayerListItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleItem {
    pub abbreviation: Title,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryResponse {
    pub rosters: Vec<RosterStatus>,
}
