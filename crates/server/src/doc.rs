use crate::routes::{debug, health, submit};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        submit::submit,
        health::health,
        debug::db_check,
        debug::debug_insert
    ),
    tags(
        (name = "Submissions", description = "Survey submission intake"),
        (name = "Health", description = "Liveness endpoints"),
        (name = "Debug", description = "Manual database diagnostics"),
    ),
    info(
        title = "Survey API",
        version = "1.0.0",
        description = "Survey submission gateway",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
