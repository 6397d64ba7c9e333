// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::RateLimitLayer;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, modules},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Cross-cutting HTTP settings resolved from configuration.
#[derive(Clone, Default)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitLayer>,
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let origins: Vec<HeaderValue> = options
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let mut api = Router::new()
        .route("/api/modules", get(modules::public_module_tree).post(modules::create_module))
        .route("/api/modules/reorder", post(modules::reorder_modules))
        .route(
            "/api/modules/{id}",
            put(modules::update_module).delete(modules::delete_module),
        )
        .route("/api/modules/{id}/move", post(modules::move_module))
        .route("/api/admin/modules", get(modules::admin_module_tree))
        .route("/api/admin/modules/roots", get(modules::list_root_modules))
        .route("/api/admin/modules/{id}", get(modules::get_module))
        .route(
            "/api/admin/modules/{id}/children",
            get(modules::list_module_children),
        )
        .route("/api/articles", post(articles::create_article))
        // GET takes a slug, PUT/DELETE a numeric id.
        .route(
            "/api/articles/{key}",
            get(articles::get_published_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/article-slugs", get(articles::list_published_slugs))
        .route("/api/admin/articles", get(articles::list_admin_articles))
        .route("/api/admin/articles/{id}", get(articles::get_article));

    if let Some(limiter) = options.rate_limit {
        api = api.layer(limiter);
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
