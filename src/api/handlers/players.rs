use axum::{extract::State, response::Json};
use chrono::Utc;
use std::sync::Arc;

use super::extract::{ApiPath, ApiQuery};
use super::{AppState, PlayerParams};
use crate::api::models::{PlayerListItem, PlayerListResponse, TitleItem};
use crate::api::source::PlayerSource;
use crate::domain::{PlayerCard, Title};
use crate::errors::GlanceError;
use crate::pagination::Selection;
use crate::search::SearchQuery;

pub async fn get_players<S: PlayerSource>(
    State(state): State<Arc<AppState<S>>>,
    ApiQuery(params): ApiQuery<PlayerParams>,
) -> Result<Json<PlayerListResponse>, GlanceError> {
    let title = match params.title.as_deref() {
        Some(raw) => raw.parse::<Title>()?,
        None => state.config.directory.default_title,
    };
    let query = SearchQuery::from(params.q.as_deref());
    let selection = Selection::resolve(
        &state.pagination,
        params.page,
        params.page_size,
        params.offset,
        params.limit,
    );

    let roster = state.directory.roster(title).await?;
    let slice = roster.select(&query, selection);

    let mut rank = slice.offset;
    let page = slice.map(|username| {
        rank += 1;
        PlayerListItem::new(rank, username)
    });

    Ok(Json(PlayerListResponse {
        title,
        query: query.as_str().to_string(),
        page,
    }))
}

pub async fn get_player_profile<S: PlayerSource>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(username): ApiPath<String>,
) -> Result<Json<PlayerCard>, GlanceError> {
    let username = state.usernames.normalize(&username)?;
    let profile = state.directory.source().player_profile(&username).await?;
    Ok(Json(PlayerCard::from_profile(&profile, Utc::now())))
}

pub async fn get_titles() -> Json<Vec<TitleItem>> {
    let titles = Title::ALL
        .into_iter()
        .map(|title| TitleItem {
            abbreviation: title,
            name: title.full_name(),
        })
        .collect();
    Json(titles)
}
