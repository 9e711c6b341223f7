use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::files::FileService;
use crate::features::reports::{ReportQueryService, ReportService};
use crate::features::{admin, files, pages, reports};

/// Services shared by the route handlers
#[derive(Clone)]
pub struct AppServices {
    pub file_service: Arc<FileService>,
    pub report_service: Arc<ReportService>,
    pub query_service: Arc<ReportQueryService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the application router with every route and middleware layer
pub fn build_router(config: &Config, services: AppServices) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    Router::new()
        .merge(swagger)
        .merge(pages::routes(&config.storage.static_dir))
        .merge(reports::routes(
            Arc::clone(&services.report_service),
            Arc::clone(&services.query_service),
            config.app.max_request_body_size,
        ))
        .merge(admin::routes(Arc::clone(&services.query_service)))
        .merge(files::routes(services.file_service.upload_dir()))
        .route("/health", get(health_check))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
