use crate::config::ApiSettings;
use crate::rate_limiter::RateLimiter;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Mutex;

/// HTTP client with built-in rate limiting, shareable across requests
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> reqwest::Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = Mutex::new(RateLimiter::new(rate_limit_ms));

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> reqwest::Result<Self> {
        Self::new(
            &settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.rate_limiter.lock().await.wait().await;
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> reqwest::Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
    }

    async fn send_get_request(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
    }
}
