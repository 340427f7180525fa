use actix_web::{HttpResponse, web};
use tracing::error;

use crate::{
    db::Store,
    error::{ApiError, StoreError},
    model::NewEmployee,
};

/// Register Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee created", body = crate::model::Employee),
        (status = 400, description = "Duplicate email or missing field", body = Object, example = json!({
            "error": "UNIQUE constraint failed: employees.email"
        })),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, ApiError> {
    let employee = store.insert_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Every registered employee", body = [crate::model::Employee]),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let employees = store.list_employees().await.map_err(|e: StoreError| {
        error!(error = %e, "Failed to fetch employees");
        e
    })?;

    Ok(HttpResponse::Ok().json(employees))
}
