use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims, JwtError};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /jwt - mint a bearer token for the supplied identity. Stateless: the
/// token itself is the only artifact, nothing is persisted. A missing server
/// secret is a configuration error surfaced here, not at startup.
pub async fn issue(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let email = body
        .get("email")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Email required for JWT generation"))?;

    let secret = state
        .security
        .jwt_secret
        .as_deref()
        .ok_or(JwtError::MissingSecret)?;

    let claims = Claims::new(email, state.security.token_ttl_secs);
    let token = generate_jwt(secret, &claims)?;

    Ok(Json(json!({ "token": token })))
}
