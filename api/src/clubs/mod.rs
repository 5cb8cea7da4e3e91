mod club;
mod repository;

pub use club::*;
pub use repository::*;

use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    error::{AppError, AppResult},
    extract::{AppJson, AppPath},
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::<AppState>::new()
        .route("/clubs", get(get_clubs).post(create_club))
        .route(
            "/clubs/{id}",
            get(get_club_by_id).put(update_club).delete(delete_club),
        )
}

impl FromRef<AppState> for Arc<dyn ClubRepository> {
    fn from_ref(state: &AppState) -> Self {
        state.clubs.clone()
    }
}

#[debug_handler(state = AppState)]
#[tracing::instrument(skip(clubs))]
pub async fn create_club(
    State(clubs): State<Arc<dyn ClubRepository>>,
    AppJson(params): AppJson<ClubParams>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;
    let club = clubs.create(&params).await?;

    Ok((StatusCode::CREATED, Json(club)))
}

#[debug_handler(state = AppState)]
#[tracing::instrument(skip(clubs))]
pub async fn get_clubs(
    State(clubs): State<Arc<dyn ClubRepository>>,
) -> AppResult<Json<Vec<Club>>> {
    Ok(Json(clubs.list().await?))
}

#[debug_handler(state = AppState)]
#[tracing::instrument(skip(clubs))]
pub async fn get_club_by_id(
    State(clubs): State<Arc<dyn ClubRepository>>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Club>> {
    match clubs.find_by_id(id).await? {
        Some(club) => Ok(Json(club)),
        None => Err(AppError::NotFound("Club")),
    }
}

#[debug_handler(state = AppState)]
#[tracing::instrument(skip(clubs))]
pub async fn update_club(
    State(clubs): State<Arc<dyn ClubRepository>>,
    AppPath(id): AppPath<i64>,
    AppJson(params): AppJson<ClubParams>,
) -> AppResult<Json<Club>> {
    params.validate()?;

    match clubs.update(id, &params).await? {
        Some(club) => Ok(Json(club)),
        None => Err(AppError::NotFound("Club")),
    }
}

#[debug_handler(state = AppState)]
#[tracing::instrument(skip(clubs))]
pub async fn delete_club(
    State(clubs): State<Arc<dyn ClubRepository>>,
    AppPath(id): AppPath<i64>,
) -> AppResult<StatusCode> {
    match clubs.delete(id).await? {
        true => Ok(StatusCode::NO_CONTENT),
        false => Err(AppError::NotFound("Club")),
    }
}
