//! User CRUD handlers: create, read, update, delete.

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::model::UserId;
use crate::response;
use crate::schema::{UserCreate, UserUpdate};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

fn parse_id(raw: &str) -> Result<UserId, AppError> {
    UserId::from_path(raw).ok_or(AppError::NotFound)
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserCreate>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.create(body).await?;
    Ok(response::created(user))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user = state.users.get(&id).await?.ok_or(AppError::NotFound)?;
    Ok(response::ok(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UserUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user = state.users.update(&id, body).await?.ok_or(AppError::NotFound)?;
    Ok(response::ok(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    if state.users.delete(&id).await? {
        Ok(response::message("User deleted"))
    } else {
        Err(AppError::NotFound)
    }
}
