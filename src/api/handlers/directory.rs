use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::api::models::DirectoryResponse;
use crate::api::source::PlayerSource;

pub async fn get_directory<S: PlayerSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<DirectoryResponse> {
    Json(DirectoryResponse {
        rosters: state.directory.status(),
    })
}
