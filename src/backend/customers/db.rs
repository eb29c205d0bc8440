//! Database operations for customers
//!
//! SQLite-backed implementation of the record store. The table is created on
//! connect; there is no migration framework.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use crate::shared::customer::{ApiMessage, Customer, CustomerFields, CustomerId};
use crate::shared::error::{CustomerError, StoreResult};
use crate::shared::store::RecordStore;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        date TEXT NOT NULL,
        member REAL NOT NULL,
        interest TEXT NOT NULL
    )
"#;

const CREATE_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_customers_name ON customers (name, id)";

/// Customer store backed by a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqliteCustomerStore {
    pool: SqlitePool,
}

impl SqliteCustomerStore {
    /// Connect to the database at `database_url`, creating the file if needed
    ///
    /// # Arguments
    ///
    /// * `database_url` - SQLite URL, e.g. `sqlite://customers.db`
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Open a private in-memory database
    ///
    /// The pool holds exactly one connection that never expires, since every
    /// SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and make sure the table exists
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        sqlx::query(CREATE_NAME_INDEX).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_customer(row: &SqliteRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: CustomerId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        date: row.try_get("date")?,
        member: row.try_get("member")?,
        interest: row.try_get("interest")?,
    })
}

#[async_trait]
impl RecordStore for SqliteCustomerStore {
    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, date, member, interest
            FROM customers
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let customers = rows
            .iter()
            .map(row_to_customer)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(customers)
    }

    async fn create(&self, fields: CustomerFields) -> StoreResult<Customer> {
        let draft = fields.require()?;
        let customer = Customer::from_draft(CustomerId::generate(), draft);

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, date, member, interest)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer.id.as_str())
        .bind(&customer.name)
        .bind(customer.date)
        .bind(customer.member)
        .bind(&customer.interest)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Inserted customer {}", customer.id);
        Ok(customer)
    }

    async fn update_by_id(&self, id: &CustomerId, fields: CustomerFields) -> StoreResult<Customer> {
        fields.validate_present()?;

        let row = sqlx::query(
            r#"
            UPDATE customers
            SET name = COALESCE(?, name),
                date = COALESCE(?, date),
                member = COALESCE(?, member),
                interest = COALESCE(?, interest)
            WHERE id = ?
            RETURNING id, name, date, member, interest
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(fields.date)
        .bind(fields.member)
        .bind(fields.interest.as_deref())
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(row_to_customer(&row)?),
            None => Err(CustomerError::not_found(id)),
        }
    }

    async fn delete_by_id(&self, id: &CustomerId) -> StoreResult<ApiMessage> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::not_found(id));
        }
        Ok(ApiMessage::deleted())
    }
}
