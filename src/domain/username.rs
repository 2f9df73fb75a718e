use anyhow::{Context, Result};
use regex::Regex;

use crate::errors::GlanceError;

const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_-]{1,50}$";

/// Validates usernames before they are placed in an API path
#[derive(Debug, Clone)]
pub struct UsernamePolicy {
    pattern: Regex,
}

impl UsernamePolicy {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(USERNAME_PATTERN).context("Failed to compile username regex")?;
        Ok(Self { pattern })
    }

    /// Trimmed, lowercased username, or `InvalidUsername`
    pub fn normalize(&self, raw: &str) -> Result<String, GlanceError> {
        normalize_username(&self.pattern, raw)
    }
}

fn normalize_username(pattern: &Regex, raw: &str) -> Result<String, GlanceError> {
    let trimmed = raw.trim().trim_start_matches('@');
    if !pattern.is_match(trimmed) {
        return Err(GlanceError::InvalidUsername(raw.to_string()));
    }
    Ok(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_handle_prefix() {
        let policy = UsernamePolicy::new().unwrap();
        assert_eq!(policy.normalize("MagnusCarlsen").unwrap(), "magnuscarlsen");
        assert_eq!(policy.normalize(" @Hikaru ").unwrap(), "hikaru");
        assert_eq!(policy.normalize("Fabiano_Caruana-1").unwrap(), "fabiano_caruana-1");
    }

    #[test]
    fn rejects_path_breaking_input() {
        let policy = UsernamePolicy::new().unwrap();
        for raw in ["", "../admin", "a b", "name?x=1", "é"] {
            assert!(matches!(
                policy.normalize(raw),
                Err(GlanceError::InvalidUsername(_))
            ));
        }
    }
}
