use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller context extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
        }
    }
}

/// Bearer-token middleware for protected routes. Verifies the token and
/// injects [`AuthUser`] into request extensions; any failure short-circuits
/// with 401 before the handler runs.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims = validate_jwt(state.security.jwt_secret.as_deref(), &token)
        .map_err(ApiError::unauthorized)?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Ownership gate, path-parameter form: the verified caller may only touch
/// records filed under their own email.
pub fn require_owner(auth: &AuthUser, owner_email: &str) -> Result<(), ApiError> {
    if auth.email != owner_email {
        return Err(ApiError::forbidden(
            "Forbidden access: You can only access your own records",
        ));
    }
    Ok(())
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Unauthorized access: No token provided".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Validate signature and expiry, returning the embedded claims
fn validate_jwt(secret: Option<&str>, token: &str) -> Result<Claims, String> {
    let secret = match secret {
        Some(s) if !s.is_empty() => s,
        // Nothing to verify against, so nothing can authenticate
        _ => return Err("Unauthorized access: Invalid token".to_string()),
    };

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Unauthorized access: Invalid token ({})", e))?;

    Ok(token_data.claims)
}
