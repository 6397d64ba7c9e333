// src/presentation/http/controllers/modules.rs
use crate::application::{
    commands::modules::{
        CreateModuleCommand, DeleteModuleCommand, MoveModuleCommand, ReorderEntry,
        ReorderModulesCommand, UpdateModuleCommand,
    },
    dto::{AdminModuleNodeDto, ModuleDto, PublicModuleNodeDto},
    queries::modules::GetModuleQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::MessageResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateModuleRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModuleRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// An empty string clears the description.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderEntryRequest {
    pub id: i64,
    pub order: i32,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderModulesRequest {
    pub ordered_modules: Vec<ReorderEntryRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveModuleRequest {
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Zero-based slot among the new siblings; appended when omitted.
    #[serde(default)]
    pub position: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicModulesResponse {
    pub data: Vec<PublicModuleNodeDto>,
}

#[utoipa::path(
    get,
    path = "/api/modules",
    responses(
        (status = 200, description = "Module tree with published articles.", body = PublicModulesResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn public_module_tree(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<PublicModulesResponse>> {
    let data = state.services.module_queries.public_tree().await.into_http()?;
    Ok(Json(PublicModulesResponse { data }))
}

#[utoipa::path(
    get,
    path = "/api/admin/modules",
    responses(
        (status = 200, description = "Full module hierarchy.", body = [AdminModuleNodeDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn admin_module_tree(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AdminModuleNodeDto>>> {
    state
        .services
        .module_queries
        .admin_tree()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/modules/roots",
    responses(
        (status = 200, description = "Top-level modules in display order.", body = [ModuleDto])
    ),
    tag = "Modules"
)]
pub async fn list_root_modules(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ModuleDto>>> {
    state
        .services
        .module_queries
        .list_top_level()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/modules/{id}",
    params(("id" = i64, Path, description = "Module identifier")),
    responses(
        (status = 200, description = "Module.", body = ModuleDto),
        (status = 404, description = "Module not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn get_module(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ModuleDto>> {
    state
        .services
        .module_queries
        .get_module(GetModuleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/modules/{id}/children",
    params(("id" = i64, Path, description = "Parent module identifier")),
    responses(
        (status = 200, description = "Direct children in display order.", body = [ModuleDto]),
        (status = 404, description = "Module not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn list_module_children(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<ModuleDto>>> {
    state
        .services
        .module_queries
        .list_children(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/modules",
    request_body = CreateModuleRequest,
    responses(
        (status = 201, description = "Module created.", body = ModuleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Parent module not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn create_module(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateModuleRequest>,
) -> HttpResult<(StatusCode, Json<ModuleDto>)> {
    let command = CreateModuleCommand {
        name: payload.name,
        description: payload.description,
        parent_id: payload.parent_id,
    };

    let created = state
        .services
        .module_commands
        .create_module(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/modules/{id}",
    params(("id" = i64, Path, description = "Module identifier")),
    request_body = UpdateModuleRequest,
    responses(
        (status = 200, description = "Module updated.", body = ModuleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Module not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn update_module(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateModuleRequest>,
) -> HttpResult<Json<ModuleDto>> {
    let command = UpdateModuleCommand {
        id,
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .module_commands
        .update_module(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/modules/{id}",
    params(("id" = i64, Path, description = "Module identifier")),
    responses(
        (status = 204, description = "Module and its articles deleted."),
        (status = 404, description = "Module not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Module still has children.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn delete_module(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .module_commands
        .delete_module(DeleteModuleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/modules/reorder",
    request_body = ReorderModulesRequest,
    responses(
        (status = 200, description = "Every listed module was repositioned.", body = MessageResponse),
        (status = 400, description = "Duplicate ids in the batch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown module or parent.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "The batch would introduce a cycle.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn reorder_modules(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ReorderModulesRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let entries = payload
        .ordered_modules
        .into_iter()
        .map(|entry| ReorderEntry {
            id: entry.id,
            order: entry.order,
            parent_id: entry.parent_id,
        })
        .collect();

    state
        .services
        .module_commands
        .reorder_modules(ReorderModulesCommand { entries })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "Order updated successfully".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/modules/{id}/move",
    params(("id" = i64, Path, description = "Module identifier")),
    request_body = MoveModuleRequest,
    responses(
        (status = 200, description = "Module moved.", body = ModuleDto),
        (status = 404, description = "Unknown module or parent.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "The move would introduce a cycle.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Modules"
)]
pub async fn move_module(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<MoveModuleRequest>,
) -> HttpResult<Json<ModuleDto>> {
    let command = MoveModuleCommand {
        id,
        parent_id: payload.parent_id,
        position: payload.position,
    };

    state
        .services
        .module_commands
        .move_module(command)
        .await
        .into_http()
        .map(Json)
}
