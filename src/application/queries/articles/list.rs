use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleListItemDto, ArticleSlugDto},
    error::ApplicationResult,
};
use std::collections::HashMap;

impl ArticleQueryService {
    /// Every article, drafts included, newest edit first, with its module name.
    pub async fn list_admin_articles(&self) -> ApplicationResult<Vec<ArticleListItemDto>> {
        let articles = self.read_repo.list_all().await?;
        let names: HashMap<_, _> = self
            .module_repo
            .list_all()
            .await?
            .into_iter()
            .map(|module| (module.id, module.name.into_inner()))
            .collect();

        Ok(articles
            .into_iter()
            .map(|article| {
                let module_name = names.get(&article.module_id).cloned();
                ArticleListItemDto::new(article, module_name)
            })
            .collect())
    }

    pub async fn list_published_slugs(&self) -> ApplicationResult<Vec<ArticleSlugDto>> {
        let links = self.read_repo.list_published_links().await?;
        Ok(links
            .into_iter()
            .map(|link| ArticleSlugDto {
                slug: link.slug.into_inner(),
            })
            .collect())
    }
}
