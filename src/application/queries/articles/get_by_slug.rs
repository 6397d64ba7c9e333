use super::ArticleQueryService;
use crate::{
    application::{
        dto::PublicArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetPublishedArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Public lookup. Drafts are indistinguishable from missing articles.
    pub async fn get_published_article_by_slug(
        &self,
        query: GetPublishedArticleBySlugQuery,
    ) -> ApplicationResult<PublicArticleDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|article| article.is_publicly_visible())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let module = self
            .module_repo
            .find_by_id(article.module_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::infrastructure(format!(
                    "article {} references missing module {}",
                    article.id, article.module_id
                ))
            })?;

        tracing::debug!(slug = %slug, article_id = %article.id, "public article resolved");
        Ok(PublicArticleDto::new(article, module))
    }
}
