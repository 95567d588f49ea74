use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, MessageResponse, User, UserEnvelope};

/// OpenAPI documentation for the User CRUD API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "0.1.0",
        description = "REST API for creating, reading, updating and deleting users.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD operations")
    ),
    paths(
        crate::handlers::create_user,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            User,
            UserEnvelope,
            MessageResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
