use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog entry. `category` and `date` are the only fields the API ever
/// inspects; everything else a client supplies (provider, amount due, ...)
/// rides opaquely in `payload` and is flattened back out on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bill {
    pub id: Uuid,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub payload: Json<Map<String, Value>>,
}

/// Catalog entry as accepted for insertion, before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewBill {
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub payload: Map<String, Value>,
}
