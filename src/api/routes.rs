use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    directory::get_directory,
    players::{get_player_profile, get_players, get_titles},
};
use crate::api::source::PlayerSource;

pub fn create_router<S: PlayerSource>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/api/titles", get(get_titles))
        .route("/api/players", get(get_players::<S>))
        .route("/api/player/:username", get(get_player_profile::<S>))
        .route("/api/directory", get(get_directory::<S>))
        .with_state(state)
}
