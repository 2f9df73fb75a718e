use std::future::Future;

use crate::domain::{PlayerProfile, Title};
use crate::errors::GlanceError;

/// Read-only access to titled rosters and player profiles
pub trait PlayerSource: Send + Sync + 'static {
    /// Usernames holding `title`, in the order the source lists them
    fn titled_players(
        &self,
        title: Title,
    ) -> impl Future<Output = Result<Vec<String>, GlanceError>> + Send;

    /// Profile for an already normalised username
    fn player_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<PlayerProfile, GlanceError>> + Send;
}
