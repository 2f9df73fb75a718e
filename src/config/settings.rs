use crate::domain::Title;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.chess.com/pub".to_string(),
            user_agent: "ChessGlance/0.1".to_string(),
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectorySettings {
    pub default_title: Title,
    /// Load the default roster in the background when the server starts
    pub preload: bool,
    /// Longest prefix stored in the search index
    pub index_depth: usize,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            default_title: Title::GM,
            preload: true,
            index_depth: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginationSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 500,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub directory: DirectorySettings,
    pub pagination: PaginationSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with overrides from `CHESS_API_BASE_URL`, `CHESS_API_USER_AGENT`
    /// and `CHESS_GLANCE_PRELOAD`
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(base_url) = std::env::var("CHESS_API_BASE_URL") {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(user_agent) = std::env::var("CHESS_API_USER_AGENT") {
            config.api.user_agent = user_agent;
        }
        if let Ok(preload) = std::env::var("CHESS_GLANCE_PRELOAD") {
            config.directory.preload = parse_flag(&preload).unwrap_or(config.directory.preload);
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
