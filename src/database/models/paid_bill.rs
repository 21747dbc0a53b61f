use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's record of having paid a catalog bill. `email` is the owning
/// identity, set at creation and never changed; `bill_id` references a
/// catalog entry by id but is not checked for existence.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PaidBill {
    pub id: Uuid,
    pub email: String,
    pub bill_id: Uuid,
    pub amount: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewPaidBill {
    pub email: String,
    pub bill_id: Uuid,
    pub amount: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// The four mutable fields of a paid-bill record. An update overwrites
/// exactly these, nothing else.
#[derive(Debug, Clone)]
pub struct PaidBillChanges {
    pub amount: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Aggregate over one owner's ledger. Zeroes when the owner has no records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaidSummary {
    pub count_paid: i64,
    pub total_amount_paid: f64,
}
