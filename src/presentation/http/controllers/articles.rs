// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListItemDto, ArticleSlugDto, PublicArticleDto},
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, GetPublishedArticleBySlugQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Module references arrive either as JSON numbers or numeric strings from form inputs.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ModuleRef {
    Number(i64),
    Text(String),
}

impl ModuleRef {
    fn resolve(reference: Option<Self>) -> HttpResult<i64> {
        let invalid = || {
            HttpError::from_error(ApplicationError::validation(
                "title, content and module id are required",
            ))
        };
        match reference.ok_or_else(invalid)? {
            Self::Number(id) => Ok(id),
            Self::Text(raw) => raw.trim().parse().map_err(|_| invalid()),
        }
    }
}

/// Body shared by create and full-replacement update.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub module_id: Option<ModuleRef>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article with its module.", body = PublicArticleDto),
        (status = 404, description = "No published article has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_published_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PublicArticleDto>> {
    state
        .services
        .article_queries
        .get_published_article_by_slug(GetPublishedArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/article-slugs",
    responses(
        (status = 200, description = "Slugs of every published article.", body = [ArticleSlugDto])
    ),
    tag = "Articles"
)]
pub async fn list_published_slugs(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleSlugDto>>> {
    state
        .services
        .article_queries
        .list_published_slugs()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/articles",
    responses(
        (status = 200, description = "All articles, most recently edited first.", body = [ArticleListItemDto])
    ),
    tag = "Articles"
)]
pub async fn list_admin_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleListItemDto>>> {
    state
        .services
        .article_queries
        .list_admin_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article, drafts included.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Missing title, content or module id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Module not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        module_id: ModuleRef::resolve(payload.module_id)?,
        title: payload.title,
        content: payload.content,
        published: payload.published,
        author: payload.author,
        seo_title: payload.seo_title,
        meta_description: payload.meta_description,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleDto),
        (status = 400, description = "Missing title, content or module id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article or module not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        module_id: ModuleRef::resolve(payload.module_id)?,
        title: payload.title,
        content: payload.content,
        published: payload.published,
        author: payload.author,
        seo_title: payload.seo_title,
        meta_description: payload.meta_description,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
