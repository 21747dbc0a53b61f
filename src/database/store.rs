use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::models::{Bill, NewBill, NewPaidBill, NewUser, PaidBill, PaidBillChanges, PaidSummary, UserRecord};

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Read/write access to the shared bill catalog. Reads are public; entries
/// are immutable once created and never deleted.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Newest entries first, by date descending, bounded to `limit`
    async fn list_recent(&self, limit: i64) -> Result<Vec<Bill>, StoreError>;

    /// All entries, optionally restricted to an exact category match
    async fn list(&self, category: Option<&str>) -> Result<Vec<Bill>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Bill>, StoreError>;

    /// Returns the assigned identifier
    async fn create(&self, bill: NewBill) -> Result<Uuid, StoreError>;

    /// Connectivity probe for the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Per-user payment records. Ownership enforcement happens above this layer;
/// the store answers raw queries only.
#[async_trait]
pub trait PaidBillStore: Send + Sync {
    async fn create(&self, record: NewPaidBill) -> Result<Uuid, StoreError>;

    async fn list_for_owner(&self, email: &str) -> Result<Vec<PaidBill>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<PaidBill>, StoreError>;

    /// Overwrites the four mutable fields. Returns the modified count (0 or 1).
    async fn update(&self, id: Uuid, changes: PaidBillChanges) -> Result<u64, StoreError>;

    /// Returns the deleted count (0 or 1)
    async fn delete(&self, id: Uuid) -> Result<u64, StoreError>;

    async fn summarize_for_owner(&self, email: &str) -> Result<PaidSummary, StoreError>;
}

/// Identity records keyed by unique email
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn insert(&self, user: NewUser) -> Result<Uuid, StoreError>;
}
