use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use super::parse_timestamp;
use crate::database::models::{Bill, NewBill};
use crate::error::ApiError;
use crate::state::AppState;

/// Recent-catalog page size, fixed by the product
const RECENT_LIMIT: i64 = 6;

#[derive(Debug, Deserialize)]
pub struct BillsQuery {
    pub category: Option<String>,
}

/// GET /bills/recent - newest catalog entries, bounded to 6
pub async fn recent(State(state): State<AppState>) -> Result<Json<Vec<Bill>>, ApiError> {
    let bills = state.bills.list_recent(RECENT_LIMIT).await?;
    Ok(Json(bills))
}

/// GET /bills?category= - full catalog, optional exact category filter
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BillsQuery>,
) -> Result<Json<Vec<Bill>>, ApiError> {
    let bills = state.bills.list(query.category.as_deref()).await?;
    Ok(Json(bills))
}

/// GET /bills/:id - one catalog entry by id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Bill>, ApiError> {
    // A malformed id never reaches the store
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid Bill ID format"))?;

    let bill = state
        .bills
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Bill not found"))?;
    Ok(Json(bill))
}

/// POST /bills - add a catalog entry. The payload is arbitrary; only
/// `category` and `date` are lifted out, and `date` is normalized to a
/// timestamp before storage.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Value::Object(mut payload) = body else {
        return Err(ApiError::bad_request("Bill payload must be a JSON object"));
    };

    let category = match payload.remove("category") {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            payload.insert("category".to_string(), other);
            None
        }
        None => None,
    };

    let date = match payload.remove("date") {
        Some(Value::String(raw)) => Some(parse_timestamp(&raw)?),
        Some(other) => {
            payload.insert("date".to_string(), other);
            None
        }
        None => None,
    };

    let id = state
        .bills
        .create(NewBill {
            category,
            date,
            payload,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "insertedId": id }))))
}
