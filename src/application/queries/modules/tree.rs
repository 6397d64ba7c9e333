// src/application/queries/modules/tree.rs
use super::ModuleQueryService;
use crate::{
    application::{
        dto::{AdminModuleNodeDto, PublicModuleNodeDto, modules::group_links},
        error::ApplicationResult,
    },
    domain::module::tree::nest,
};

impl ModuleQueryService {
    /// Nested hierarchy for the admin reorder view.
    pub async fn admin_tree(&self) -> ApplicationResult<Vec<AdminModuleNodeDto>> {
        let modules = self.read_repo.list_all().await?;
        Ok(nest(modules).into_iter().map(Into::into).collect())
    }

    /// Nested hierarchy for the public sidebar, each node carrying the titles and
    /// slugs of its published articles.
    pub async fn public_tree(&self) -> ApplicationResult<Vec<PublicModuleNodeDto>> {
        let modules = self.read_repo.list_all().await?;
        let links = self.article_repo.list_published_links().await?;
        let mut grouped = group_links(links);
        let tree = PublicModuleNodeDto::from_tree(nest(modules), &mut grouped);
        tracing::debug!(roots = tree.len(), "public module tree built");
        Ok(tree)
    }
}
