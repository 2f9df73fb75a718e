use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Keeps a minimum spacing between consecutive upstream requests
pub struct RateLimiter {
    spacing: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(spacing_ms: u64) -> Self {
        Self {
            spacing: Duration::from_millis(spacing_ms),
            last_request: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(ready_at) = self.ready_at() {
            sleep_until(ready_at).await;
        }
        self.last_request = Some(Instant::now());
    }

    fn ready_at(&self) -> Option<Instant> {
        self.last_request.map(|last| last + self.spacing)
    }
}
