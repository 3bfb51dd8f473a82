//! Contact CRUD handlers under `/api/persons`

use crate::middleware::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use phonebook_core::{validation, Contact, NewContact, PhonebookError};
use tracing::debug;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list().await?;
    Ok(Json(contacts))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    match state.store.get(&id).await? {
        Some(contact) => Ok(Json(contact)),
        None => Err(PhonebookError::NotFound.into()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Json(payload) = payload?;
    let fields = validation::validate(payload)?;

    let contact = state.store.create(fields).await?;
    Ok(Json(contact))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Json(payload) = payload?;
    let fields = validation::validate(payload)?;

    match state.store.update(&id, fields).await? {
        Some(contact) => Ok(Json(contact)),
        None => Err(PhonebookError::NotFound.into()),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!("Delete requested for contact {}", id);
    state.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
