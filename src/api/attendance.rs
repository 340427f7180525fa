use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    db::Store,
    error::ApiError,
    model::AttendanceStatus,
};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AttendanceMarked {
    #[schema(example = "Attendance marked!")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i64,
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance recorded for today", body = AttendanceMarked),
        (status = 400, description = "Malformed body, unknown status or failed insert", body = Object, example = json!({
            "error": "Json deserialize error: unknown variant `Late`, expected `Present` or `Absent`"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<Store>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let MarkAttendance { employee_id, status } = payload.into_inner();

    // Any failed insert is answered as a client error, store faults included.
    let record = store
        .insert_attendance(employee_id, status)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AttendanceMarked {
        message: "Attendance marked!".to_string(),
        id: record.id,
    }))
}

/// List Attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance records, all employees", body = [crate::model::AttendanceRecord]),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let records = store.list_attendance().await.map_err(|e| {
        error!(error = %e, "Failed to fetch attendance");
        e
    })?;

    Ok(HttpResponse::Ok().json(records))
}
