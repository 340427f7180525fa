use crate::{
    api::{attendance, employee, health},
    config::Config,
    db::Store,
    docs::ApiDoc,
    error::ApiError,
};
use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, Error, http::header, web};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Body parse failures answer with the same `{"error": ...}` 400 shape as
/// store constraint violations.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!(error = %err, path = %req.path(), "Rejected request body");
        ApiError::BadRequest(err.to_string()).into()
    })
}

/// CORS for the dashboard. With no configured origins every origin is
/// accepted.
pub fn cors_middleware(config: &Config) -> Cors {
    if config.cors_allowed_origins.is_empty() {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    for origin in &config.cors_allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.app_data(json_config())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so the JS/CSS assets resolve
                .url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .service(web::resource("/health").route(web::get().to(health::health)))
        .service(
            web::scope(&config.api_prefix)
                // /employees
                .service(
                    web::resource("/employees")
                        .route(web::get().to(employee::list_employees))
                        .route(web::post().to(employee::create_employee)),
                )
                // /attendance
                .service(
                    web::resource("/attendance")
                        .route(web::get().to(attendance::list_attendance))
                        .route(web::post().to(attendance::mark_attendance)),
                ),
        );
}

/// The full application: middleware, shared store and route table. Used by
/// the server for every worker and by the integration tests.
pub fn app(
    store: web::Data<Store>,
    config: Config,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(cors_middleware(&config))
        .wrap(NormalizePath::trim())
        .app_data(store)
        .configure(|cfg| configure(cfg, &config))
}
