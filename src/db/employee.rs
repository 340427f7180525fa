use sqlx::error::ErrorKind;
use tracing::{debug, info, warn};

use super::Store;
use crate::error::{ConstraintKind, StoreError};
use crate::model::{Employee, NewEmployee};

/// Returns the value of a required text field, rejecting absent or blank input.
fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, StoreError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(StoreError::missing_field(field)),
    }
}

/// Sorts engine errors from an insert into constraint violations and faults.
fn classify_insert_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        let kind = match db_err.kind() {
            ErrorKind::UniqueViolation => Some(ConstraintKind::DuplicateEmail),
            ErrorKind::NotNullViolation => Some(ConstraintKind::MissingField),
            _ => None,
        };
        if let Some(kind) = kind {
            return StoreError::ConstraintViolation {
                kind,
                message: db_err.message().to_string(),
            };
        }
    }
    StoreError::Fault(e)
}

impl Store {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, role FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    pub async fn insert_employee(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let name = required(&new.name, "name")?;
        let email = required(&new.email, "email")?;

        let result = sqlx::query("INSERT INTO employees (name, email, role) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(new.role.as_deref())
            .execute(&self.pool)
            .await
            .map_err(classify_insert_error);

        let result = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, email, "Employee insert rejected");
                return Err(e);
            }
        };

        let employee = Employee {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            role: new.role.clone(),
        };
        info!(id = employee.id, email = %employee.email, "Employee created");
        Ok(employee)
    }
}
