use crate::domain::{article::Article, module::Module};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ModuleSummaryDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub module_id: i64,
    pub published: bool,
    pub author: Option<String>,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            module_id: article.module_id.into(),
            published: article.published,
            author: article.metadata.author,
            seo_title: article.metadata.seo_title,
            meta_description: article.metadata.meta_description,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Row of the admin article table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListItemDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub module_id: i64,
    pub module_name: Option<String>,
    pub published: bool,
    pub author: Option<String>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleListItemDto {
    pub fn new(article: Article, module_name: Option<String>) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            module_id: article.module_id.into(),
            published: article.published,
            author: article.metadata.author,
            module_name,
            updated_at: article.updated_at,
        }
    }
}

/// Published article joined with its module.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicArticleDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub module: ModuleSummaryDto,
}

impl PublicArticleDto {
    pub fn new(article: Article, module: Module) -> Self {
        Self {
            article: article.into(),
            module: module.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSlugDto {
    pub slug: String,
}
