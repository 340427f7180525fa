use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::{db::Store, error::ApiError};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", body = Object, example = json!({
            "status": "ok"
        })),
        (status = 500, description = "Database unreachable", body = Object)
    ),
    tag = "Health"
)]
pub async fn health(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    store.ping().await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
