use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Identity record for sign-in sync, keyed by unique email. The profile
/// payload is whatever the client sent at registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    #[serde(flatten)]
    pub profile: Json<Map<String, Value>>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub profile: Map<String, Value>,
}
