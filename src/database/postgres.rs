use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{Bill, NewBill, NewPaidBill, NewUser, PaidBill, PaidBillChanges, PaidSummary, UserRecord};
use super::store::{BillStore, PaidBillStore, StoreError, UserStore};

/// Bill catalog backed by the `bills` table
#[derive(Clone)]
pub struct PgBillStore {
    pool: PgPool,
}

impl PgBillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BillStore for PgBillStore {
    async fn list_recent(&self, limit: i64) -> Result<Vec<Bill>, StoreError> {
        let rows = sqlx::query_as::<_, Bill>(
            "SELECT id, category, date, payload FROM bills \
             ORDER BY date DESC NULLS LAST LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Bill>, StoreError> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, Bill>(
                    "SELECT id, category, date, payload FROM bills WHERE category = $1",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Bill>("SELECT id, category, date, payload FROM bills")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Bill>, StoreError> {
        let row = sqlx::query_as::<_, Bill>(
            "SELECT id, category, date, payload FROM bills WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, bill: NewBill) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO bills (id, category, date, payload) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(bill.category)
            .bind(bill.date)
            .bind(Json(bill.payload))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Paid-bill ledger backed by the `paid_bills` table
#[derive(Clone)]
pub struct PgPaidBillStore {
    pool: PgPool,
}

impl PgPaidBillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaidBillStore for PgPaidBillStore {
    async fn create(&self, record: NewPaidBill) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO paid_bills (id, email, bill_id, amount, address, phone, date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(record.email)
        .bind(record.bill_id)
        .bind(record.amount)
        .bind(record.address)
        .bind(record.phone)
        .bind(record.date)
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    async fn list_for_owner(&self, email: &str) -> Result<Vec<PaidBill>, StoreError> {
        let rows = sqlx::query_as::<_, PaidBill>(
            "SELECT id, email, bill_id, amount, address, phone, date \
             FROM paid_bills WHERE email = $1",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<PaidBill>, StoreError> {
        let row = sqlx::query_as::<_, PaidBill>(
            "SELECT id, email, bill_id, amount, address, phone, date \
             FROM paid_bills WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: PaidBillChanges) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE paid_bills SET amount = $2, address = $3, phone = $4, date = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(changes.amount)
        .bind(changes.address)
        .bind(changes.phone)
        .bind(changes.date)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM paid_bills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn summarize_for_owner(&self, email: &str) -> Result<PaidSummary, StoreError> {
        // COUNT/SUM over zero rows already yields the zero summary, no
        // special case needed
        let summary = sqlx::query_as::<_, PaidSummary>(
            "SELECT COUNT(*) AS count_paid, \
                    COALESCE(SUM(amount), 0::float8) AS total_amount_paid \
             FROM paid_bills WHERE email = $1",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(summary)
    }
}

/// User directory backed by the `users` table
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, profile FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, user: NewUser) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, email, profile) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(user.email)
            .bind(Json(user.profile))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }
}
