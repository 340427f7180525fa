use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// A stored attendance row.
///
/// Every column but `id` is nullable TEXT/INTEGER and rows written by older
/// clients may hold any status text, so values are kept as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1,
        "status": "Present",
        "date": "2026-01-01"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    /// Not checked against `employees.id`.
    #[schema(example = 1, nullable = true)]
    pub employee_id: Option<i64>,

    #[schema(example = "Present", nullable = true)]
    pub status: Option<String>,

    #[schema(example = "2026-01-01", format = "date", nullable = true)]
    pub date: Option<String>,
}

impl AttendanceRecord {
    /// The status as a known value, `None` for blank or unrecognised text.
    pub fn attendance_status(&self) -> Option<AttendanceStatus> {
        self.status.as_deref()?.parse().ok()
    }
}
