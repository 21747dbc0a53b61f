use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::database::models::NewUser;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /users - idempotent registration keyed by email. A repeated
/// registration returns the existing identifier instead of creating a
/// duplicate.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Value::Object(mut profile) = body else {
        return Err(ApiError::bad_request("User payload must be a JSON object"));
    };

    let email = match profile.remove("email") {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        _ => return Err(ApiError::bad_request("Email required for registration")),
    };

    if let Some(existing) = state.users.find_by_email(&email).await? {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "message": "User already exists",
                "insertedId": existing.id
            })),
        ));
    }

    let id = state.users.insert(NewUser { email, profile }).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered",
            "insertedId": id
        })),
    ))
}
