use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{CODE_INVALID_FORMAT, ERR_INVALID_PAYLOAD, MSG_SERVER_RUNNING};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Health check
        .route("/health", web::get().to(health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/users")
                .route("", web::post().to(handlers::create_user))
                .route("/", web::post().to(handlers::create_user))
                .route("/{id}", web::get().to(handlers::get_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Render body parse failures with the same envelope as every other error.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected request body for {} {}: {}", req.method(), req.path(), err);
    ApiError::bad_request(CODE_INVALID_FORMAT, ERR_INVALID_PAYLOAD).into()
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let request = test::TestRequest::get().uri("/health").to_request();

        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], MSG_SERVER_RUNNING);
    }

    #[actix_web::test]
    async fn test_openapi_document_lists_user_routes() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let request = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = test::read_body_json(response).await;
        let paths = body["paths"].as_object().unwrap();
        assert!(paths.contains_key("/users/"));
        assert!(paths.contains_key("/users/{id}"));
        assert!(paths.contains_key("/health"));
    }
}
