//! Handlers for the `/persons` resource.
//!
//! Request bodies are taken as raw bytes and decoded with
//! [`decode_json`] so each endpoint chooses its own malformed-JSON envelope.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use persons_core::error::CoreError;
use persons_core::person::{person_location, PERSON_ENTITY};
use persons_db::models::person::{CreatePerson, UpdatePerson};
use persons_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{decode_json, PersonId};
use crate::state::AppState;

/// GET /api/v1/persons
///
/// List every person. Returns `[]` when the table is empty.
pub async fn list_persons(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let persons = PersonRepo::list(&state.pool).await?;

    Ok(Json(persons))
}

/// POST /api/v1/persons
///
/// Create a person. Responds 201 with a `Location` header and no body.
pub async fn create_person(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input: CreatePerson = decode_json(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected create payload");
        AppError::BadRequest("json decoding error".into())
    })?;
    input.validate()?;

    let id = PersonRepo::create(&state.pool, &input).await?;

    tracing::info!(person_id = id, "Person created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, person_location(id))],
    ))
}

/// GET /api/v1/persons/{id}
pub async fn get_person(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<impl IntoResponse> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: PERSON_ENTITY,
            id,
        }))?;

    Ok(Json(person))
}

/// PATCH /api/v1/persons/{id}
///
/// Merge the supplied fields onto the stored person and return the result.
/// Keys missing from the body keep their stored value.
pub async fn update_person(
    State(state): State<AppState>,
    PersonId(id): PersonId,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input: UpdatePerson = decode_json(&body).map_err(|e| {
        tracing::debug!(person_id = id, error = %e, "Rejected update payload");
        CoreError::field("Invalid json", "body", "invalid json format")
    })?;
    input.validate()?;

    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: PERSON_ENTITY,
            id,
        }))?;

    tracing::info!(person_id = id, "Person updated");

    Ok(Json(person))
}

/// DELETE /api/v1/persons/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<impl IntoResponse> {
    let deleted = PersonRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: PERSON_ENTITY,
            id,
        }));
    }

    tracing::info!(person_id = id, "Person deleted");

    Ok(StatusCode::NO_CONTENT)
}
