use async_trait::async_trait;
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Bill, NewBill, NewPaidBill, NewUser, PaidBill, PaidBillChanges, PaidSummary, UserRecord};
use super::store::{BillStore, PaidBillStore, StoreError, UserStore};

/// In-memory backend. Serves two purposes: the store behind the integration
/// tests, and the degraded-mode fallback when DATABASE_URL is unset so the
/// process still boots with every endpoint reachable.
#[derive(Default)]
pub struct MemoryStore {
    bills: RwLock<Vec<Bill>>,
    paid_bills: RwLock<Vec<PaidBill>>,
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BillStore for MemoryStore {
    async fn list_recent(&self, limit: i64) -> Result<Vec<Bill>, StoreError> {
        let mut rows = self.bills.read().await.clone();
        // Descending by date; undated entries sort last
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Bill>, StoreError> {
        let rows = self.bills.read().await;
        Ok(rows
            .iter()
            .filter(|b| match category {
                Some(c) => b.category.as_deref() == Some(c),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Bill>, StoreError> {
        let rows = self.bills.read().await;
        Ok(rows.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, bill: NewBill) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.bills.write().await.push(Bill {
            id,
            category: bill.category,
            date: bill.date,
            payload: Json(bill.payload),
        });
        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl PaidBillStore for MemoryStore {
    async fn create(&self, record: NewPaidBill) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.paid_bills.write().await.push(PaidBill {
            id,
            email: record.email,
            bill_id: record.bill_id,
            amount: record.amount,
            address: record.address,
            phone: record.phone,
            date: record.date,
        });
        Ok(id)
    }

    async fn list_for_owner(&self, email: &str) -> Result<Vec<PaidBill>, StoreError> {
        let rows = self.paid_bills.read().await;
        Ok(rows.iter().filter(|r| r.email == email).cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<PaidBill>, StoreError> {
        let rows = self.paid_bills.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: PaidBillChanges) -> Result<u64, StoreError> {
        let mut rows = self.paid_bills.write().await;
        match rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.amount = changes.amount;
                row.address = changes.address;
                row.phone = changes.phone;
                row.date = changes.date;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut rows = self.paid_bills.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn summarize_for_owner(&self, email: &str) -> Result<PaidSummary, StoreError> {
        let rows = self.paid_bills.read().await;
        let owned: Vec<_> = rows.iter().filter(|r| r.email == email).collect();
        Ok(PaidSummary {
            count_paid: owned.len() as i64,
            total_amount_paid: owned.iter().map(|r| r.amount).sum(),
        })
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let rows = self.users.read().await;
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.users.write().await.push(UserRecord {
            id,
            email: user.email,
            profile: Json(user.profile),
        });
        Ok(id)
    }
}
