use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use uuid::Uuid;

use super::parse_timestamp;
use crate::database::models::{NewPaidBill, PaidBill, PaidBillChanges, PaidSummary};
use crate::error::ApiError;
use crate::middleware::{require_owner, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaidBillRequest {
    pub email: Option<String>,
    pub bill_id: Option<String>,
    pub amount: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePaidBillRequest {
    pub amount: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
}

/// POST /my-bills - record a payment. Unauthenticated, but email, billId and
/// amount are mandatory and billId must be a well-formed identifier. No
/// existence check against the catalog is performed.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreatePaidBillRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut field_errors = HashMap::new();
    if body.email.as_deref().map_or(true, |s| s.trim().is_empty()) {
        field_errors.insert("email".to_string(), "This field is required".to_string());
    }
    if body.bill_id.as_deref().map_or(true, |s| s.trim().is_empty()) {
        field_errors.insert("billId".to_string(), "This field is required".to_string());
    }
    if body.amount.is_none() {
        field_errors.insert("amount".to_string(), "This field is required".to_string());
    }
    if !field_errors.is_empty() {
        return Err(ApiError::validation_error(
            "Missing mandatory fields for payment",
            Some(field_errors),
        ));
    }

    // Checked non-empty above
    let email = body.email.unwrap_or_default();
    let amount = body.amount.unwrap_or_default();
    let bill_id = Uuid::parse_str(body.bill_id.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::bad_request("Invalid Bill ID provided"))?;
    let date = body.date.as_deref().map(parse_timestamp).transpose()?;

    let id = state
        .paid_bills
        .create(NewPaidBill {
            email,
            bill_id,
            amount,
            address: body.address,
            phone: body.phone,
            date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "insertedId": id }))))
}

/// GET /my-bills/:email - the caller's own payment records
pub async fn list_for_owner(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Result<Json<Vec<PaidBill>>, ApiError> {
    require_owner(&auth, &email)?;

    let records = state.paid_bills.list_for_owner(&email).await?;
    Ok(Json(records))
}

/// PATCH /my-bills/:id - overwrite the four mutable fields of an owned record
pub async fn record_patch(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePaidBillRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid ID provided"))?;

    // Lookup precedes the ownership check; an absent record reports 404
    // regardless of caller
    let existing = state
        .paid_bills
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Paid bill record not found"))?;
    require_owner(&auth, &existing.email)?;

    let amount = body.amount.ok_or_else(|| {
        let mut field_errors = HashMap::new();
        field_errors.insert("amount".to_string(), "This field is required".to_string());
        ApiError::validation_error("Invalid data provided", Some(field_errors))
    })?;
    let date = body.date.as_deref().map(parse_timestamp).transpose()?;

    let modified = state
        .paid_bills
        .update(
            id,
            PaidBillChanges {
                amount,
                address: body.address,
                phone: body.phone,
                date,
            },
        )
        .await?;

    Ok(Json(json!({
        "message": "Paid bill updated successfully",
        "modifiedCount": modified
    })))
}

/// DELETE /my-bills/:id - remove an owned record
pub async fn record_delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid ID format"))?;

    let existing = state
        .paid_bills
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Paid bill record not found"))?;
    require_owner(&auth, &existing.email)?;

    state.paid_bills.delete(id).await?;

    Ok(Json(json!({
        "message": "Paid bill record deleted successfully"
    })))
}

/// GET /my-bills/summary/:email - count and total over the caller's records
pub async fn summary(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Result<Json<PaidSummary>, ApiError> {
    require_owner(&auth, &email)?;

    let summary = state.paid_bills.summarize_for_owner(&email).await?;
    Ok(Json(summary))
}
