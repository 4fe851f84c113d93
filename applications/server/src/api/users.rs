/// User record API routes
use crate::{
    api::multipart::FormParts,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::HeaderMap, Json};
use bytes::Bytes;
use wish_core::{types::UserRecord, validation::SubmissionInput};

/// POST /api/users
/// Create a record from a multipart submission
///
/// Fields: `firstName`, `lastName`, `dateOfBirth`, and files `image_0..image_N`.
/// Every failure, whatever its cause, answers 500 with the same message.
pub async fn create_user(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UserRecord>> {
    match create_from_multipart(&app_state, &headers, body).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            tracing::error!("Error creating user: {}", e);
            Err(ServerError::CreateFailed)
        }
    }
}

async fn create_from_multipart(
    app_state: &AppState,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<UserRecord> {
    let parts = FormParts::parse(headers, body).await?;

    let input = SubmissionInput {
        first_name: parts.text("firstName"),
        last_name: parts.text("lastName"),
        date_of_birth: parts.text("dateOfBirth"),
        images: parts.sequential_files("image_")?,
    };

    Ok(app_state.submissions.create(input).await?)
}

/// GET /api/users
/// List all records, newest first
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    match app_state.submissions.list().await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            tracing::error!("Error fetching users: {}", e);
            Err(ServerError::FetchFailed)
        }
    }
}
