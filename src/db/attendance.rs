use chrono::{NaiveDate, Utc};
use tracing::{debug, error, info};

use super::Store;
use crate::error::StoreError;
use crate::model::{AttendanceRecord, AttendanceStatus};

/// Today's calendar date in UTC, the date stamped on new attendance rows.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl Store {
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, StoreError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, employee_id, status, date FROM attendance ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = records.len(), "Fetched attendance");
        Ok(records)
    }

    /// Appends a record dated today. `employee_id` is stored as given, even
    /// if no such employee exists.
    pub async fn insert_attendance(
        &self,
        employee_id: i64,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, StoreError> {
        let date = today().format("%Y-%m-%d").to_string();

        let result =
            sqlx::query("INSERT INTO attendance (employee_id, status, date) VALUES (?, ?, ?)")
                .bind(employee_id)
                .bind(status.as_ref())
                .bind(&date)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, employee_id, "Failed to mark attendance");
                    StoreError::Fault(e)
                })?;

        let record = AttendanceRecord {
            id: result.last_insert_rowid(),
            employee_id: Some(employee_id),
            status: Some(status.to_string()),
            date: Some(date),
        };
        info!(id = record.id, employee_id, status = %status, "Attendance marked");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::memory_store;
    use crate::model::NewEmployee;

    fn today_text() -> Option<String> {
        Some(today().format("%Y-%m-%d").to_string())
    }

    #[actix_web::test]
    async fn mark_attendance_for_unknown_employee_succeeds() {
        let store = memory_store().await;

        let record = store
            .insert_attendance(42, AttendanceStatus::Absent)
            .await
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.employee_id, Some(42));
        assert_eq!(record.status.as_deref(), Some("Absent"));
        assert_eq!(record.date, today_text());
        assert_eq!(store.list_attendance().await.unwrap(), vec![record]);
    }

    #[actix_web::test]
    async fn each_mark_appends_exactly_one_record() {
        let store = memory_store().await;
        let ana = store
            .insert_employee(NewEmployee::new("Ana", "ana@x.com", Some("Designer")))
            .await
            .unwrap();

        let statuses = [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Present,
        ];
        for status in statuses {
            store.insert_attendance(ana.id, status).await.unwrap();
        }

        let records = store.list_attendance().await.unwrap();
        let present = records
            .iter()
            .filter(|r| r.attendance_status() == Some(AttendanceStatus::Present))
            .count();

        assert_eq!(records.len(), 3);
        assert_eq!(present, 2);
        assert_eq!(records.len() - present, 1);
        assert!(
            records
                .iter()
                .all(|r| r.employee_id == Some(ana.id) && r.date == today_text())
        );
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[actix_web::test]
    async fn status_is_stored_as_text() {
        let store = memory_store().await;
        store
            .insert_attendance(1, AttendanceStatus::Present)
            .await
            .unwrap();

        let (status, date): (String, String) =
            sqlx::query_as("SELECT status, date FROM attendance WHERE id = 1")
                .fetch_one(store.pool())
                .await
                .unwrap();

        assert_eq!(status, "Present");
        assert_eq!(Some(date), today_text());
    }

    #[actix_web::test]
    async fn legacy_rows_do_not_break_the_listing() {
        let store = memory_store().await;
        sqlx::query("INSERT INTO attendance (employee_id, status, date) VALUES (NULL, 'present', '2026-01-01')")
            .execute(store.pool())
            .await
            .unwrap();
        sqlx::query("INSERT INTO attendance (employee_id, status, date) VALUES (3, NULL, NULL)")
            .execute(store.pool())
            .await
            .unwrap();
        store
            .insert_attendance(1, AttendanceStatus::Present)
            .await
            .unwrap();

        let records = store.list_attendance().await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].employee_id, None);
        assert_eq!(records[0].status.as_deref(), Some("present"));
        assert_eq!(records[0].attendance_status(), None);
        assert_eq!(records[1].status, None);
        assert_eq!(records[1].date, None);
        assert_eq!(records[2].attendance_status(), Some(AttendanceStatus::Present));
    }
}
