use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::StoreError;

mod attendance;
mod employee;

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        role TEXT
    )
"#;

const CREATE_ATTENDANCE: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER,
        status TEXT,
        date TEXT,
        FOREIGN KEY (employee_id) REFERENCES employees(id)
    )
"#;

/// Owned handle to the HRMS database.
///
/// Cloning is cheap (the pool is reference counted); every actix worker holds
/// a clone through `web::Data<Store>`.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connects to `database_url`, creating the file if needed, and ensures
    /// the schema exists.
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let in_memory = database_url.contains(":memory:");

        // The attendance -> employees reference is declared but not enforced.
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        // An in-memory database lives and dies with its single connection.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        info!(database_url, in_memory, "Connected to database");

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Creates both tables if they are missing. Safe to call repeatedly.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_EMPLOYEES).execute(&self.pool).await?;
        sqlx::query(CREATE_ATTENDANCE).execute(&self.pool).await?;
        debug!("Schema ready");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Waits for in-flight queries and closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) async fn memory_store() -> Store {
        Store::open("sqlite::memory:", 1).await.unwrap()
    }

    #[actix_web::test]
    async fn init_schema_is_idempotent() {
        let store = memory_store().await;
        store.init_schema().await.unwrap();
        store.init_schema().await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('employees', 'attendance') ORDER BY name",
        )
        .fetch_all(store.pool())
        .await
        .unwrap();

        assert_eq!(tables, vec!["attendance", "employees"]);
    }

    #[actix_web::test]
    async fn ping_fails_after_close() {
        let store = memory_store().await;
        store.ping().await.unwrap();

        store.close().await;

        assert!(matches!(store.ping().await, Err(StoreError::Fault(_))));
    }

    #[actix_web::test]
    async fn reopening_a_file_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("hrms.db").display());

        let store = Store::open(&url, 2).await.unwrap();
        store
            .insert_employee(crate::model::NewEmployee::new("Ana", "ana@x.com", Some("Designer")))
            .await
            .unwrap();
        store.close().await;

        let reopened = Store::open(&url, 2).await.unwrap();
        let employees = reopened.list_employees().await.unwrap();

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].email, "ana@x.com");
        reopened.close().await;
    }
}
