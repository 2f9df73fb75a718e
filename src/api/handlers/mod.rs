use std::sync::Arc;

use serde::Deserialize;

use crate::api::source::PlayerSource;
use crate::cache::PlayerDirectory;
use crate::config::settings::AppConfig;
use crate::domain::UsernamePolicy;
use crate::pagination::PaginationConfig;

pub mod directory;
pub mod extract;
pub mod players;

pub struct AppState<S> {
    pub directory: Arc<PlayerDirectory<S>>,
    pub usernames: UsernamePolicy,
    pub pagination: PaginationConfig,
    pub config: AppConfig,
}

impl<S: PlayerSource> AppState<S> {
    pub fn new(source: Arc<S>, config: AppConfig) -> anyhow::Result<Self> {
        let directory = Arc::new(PlayerDirectory::new(source, config.directory.index_depth));
        Ok(Self {
            directory,
            usernames: UsernamePolicy::new()?,
            pagination: PaginationConfig::from(&config.pagination),
            config,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerParams {
    pub title: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}
