// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::modules::public_module_tree,
        crate::presentation::http::controllers::modules::admin_module_tree,
        crate::presentation::http::controllers::modules::list_root_modules,
        crate::presentation::http::controllers::modules::get_module,
        crate::presentation::http::controllers::modules::list_module_children,
        crate::presentation::http::controllers::modules::create_module,
        crate::presentation::http::controllers::modules::update_module,
        crate::presentation::http::controllers::modules::delete_module,
        crate::presentation::http::controllers::modules::reorder_modules,
        crate::presentation::http::controllers::modules::move_module,
        crate::presentation::http::controllers::articles::get_published_article,
        crate::presentation::http::controllers::articles::list_published_slugs,
        crate::presentation::http::controllers::articles::list_admin_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::modules::CreateModuleRequest,
            crate::presentation::http::controllers::modules::UpdateModuleRequest,
            crate::presentation::http::controllers::modules::ReorderEntryRequest,
            crate::presentation::http::controllers::modules::ReorderModulesRequest,
            crate::presentation::http::controllers::modules::MoveModuleRequest,
            crate::presentation::http::controllers::modules::PublicModulesResponse,
            crate::presentation::http::controllers::articles::ArticleRequest,
            crate::presentation::http::controllers::articles::ModuleRef,
            crate::application::dto::ModuleDto,
            crate::application::dto::ModuleSummaryDto,
            crate::application::dto::AdminModuleNodeDto,
            crate::application::dto::PublicModuleNodeDto,
            crate::application::dto::ArticleLinkDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListItemDto,
            crate::application::dto::PublicArticleDto,
            crate::application::dto::ArticleSlugDto
        )
    ),
    tags(
        (name = "Modules", description = "Module hierarchy endpoints"),
        (name = "Articles", description = "Article catalog endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Handbook API",
        description = "Knowledge-base module hierarchy and article catalog",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut seen = HashSet::new();
        for url in server_urls(env::var("PUBLIC_API_URLS").ok()) {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

fn server_urls(raw: Option<String>) -> Vec<String> {
    let mut urls: Vec<String> = raw
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default();

    if urls.is_empty() {
        urls.push("http://localhost:8080".to_string());
    }
    urls
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the pretty-printed document to `OPENAPI_SNAPSHOT_PATH` and return the
/// path that was written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
