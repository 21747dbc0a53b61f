use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SecurityConfig;
use crate::database::memory::MemoryStore;
use crate::database::postgres::{PgBillStore, PgPaidBillStore, PgUserStore};
use crate::database::store::{BillStore, PaidBillStore, UserStore};

/// Per-request application state: injected store handles plus the security
/// section of the configuration. Cloned cheaply by axum for every request.
#[derive(Clone)]
pub struct AppState {
    pub bills: Arc<dyn BillStore>,
    pub paid_bills: Arc<dyn PaidBillStore>,
    pub users: Arc<dyn UserStore>,
    pub security: SecurityConfig,
}

impl AppState {
    /// State backed by the Postgres stores sharing one pool
    pub fn postgres(pool: PgPool, security: SecurityConfig) -> Self {
        Self {
            bills: Arc::new(PgBillStore::new(pool.clone())),
            paid_bills: Arc::new(PgPaidBillStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool)),
            security,
        }
    }

    /// State backed by a single shared in-memory store
    pub fn in_memory(security: SecurityConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            bills: store.clone(),
            paid_bills: store.clone(),
            users: store,
            security,
        }
    }
}
