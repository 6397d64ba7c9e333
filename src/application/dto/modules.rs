use crate::domain::{
    article::ArticleLink,
    module::{Module, ModuleId, ModuleNode},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    pub order: i32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Module> for ModuleDto {
    fn from(module: Module) -> Self {
        Self {
            id: module.id.into(),
            name: module.name.into_inner(),
            description: module.description.map(|d| d.into_inner()),
            parent_id: module.parent_id.map(Into::into),
            order: module.order,
            created_at: module.created_at,
            updated_at: module.updated_at,
        }
    }
}

/// Module summary joined onto public article responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSummaryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Module> for ModuleSummaryDto {
    fn from(module: Module) -> Self {
        Self {
            id: module.id.into(),
            name: module.name.into_inner(),
            description: module.description.map(|d| d.into_inner()),
        }
    }
}

/// Node of the admin reorder view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminModuleNodeDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    pub order: i32,
    #[schema(no_recursion)]
    pub children: Vec<AdminModuleNodeDto>,
}

impl From<ModuleNode> for AdminModuleNodeDto {
    fn from(node: ModuleNode) -> Self {
        let ModuleNode { module, children } = node;
        Self {
            id: module.id.into(),
            name: module.name.into_inner(),
            description: module.description.map(|d| d.into_inner()),
            parent_id: module.parent_id.map(Into::into),
            order: module.order,
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleLinkDto {
    pub title: String,
    pub slug: String,
}

/// Node of the public sidebar: a module with its published articles.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicModuleNodeDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub order: i32,
    pub articles: Vec<ArticleLinkDto>,
    #[schema(no_recursion)]
    pub children: Vec<PublicModuleNodeDto>,
}

impl PublicModuleNodeDto {
    /// Convert a nested tree, attaching each module's links from `links`.
    pub fn from_tree(
        nodes: Vec<ModuleNode>,
        links: &mut HashMap<ModuleId, Vec<ArticleLinkDto>>,
    ) -> Vec<Self> {
        nodes
            .into_iter()
            .map(|ModuleNode { module, children }| Self {
                articles: links.remove(&module.id).unwrap_or_default(),
                children: Self::from_tree(children, links),
                id: module.id.into(),
                name: module.name.into_inner(),
                description: module.description.map(|d| d.into_inner()),
                order: module.order,
            })
            .collect()
    }
}

/// Group published links by module, preserving their incoming order.
pub fn group_links(links: Vec<ArticleLink>) -> HashMap<ModuleId, Vec<ArticleLinkDto>> {
    let mut grouped: HashMap<ModuleId, Vec<ArticleLinkDto>> = HashMap::new();
    for link in links {
        grouped.entry(link.module_id).or_default().push(ArticleLinkDto {
            title: link.title.into_inner(),
            slug: link.slug.into_inner(),
        });
    }
    grouped
}
