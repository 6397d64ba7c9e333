use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleMetadata, ArticleTitle, ArticleUpdate},
};

/// Full replacement of an article. The slug is always derived again from
/// `title`, even when the title did not change.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub module_id: i64,
    pub published: bool,
    pub author: Option<String>,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let module_id = self.resolve_module(command.module_id).await?;
        let slug = self
            .slug_service
            .generate_unique_slug(&title, Some(article.id))
            .await?;

        let update = ArticleUpdate {
            id,
            title,
            slug,
            content,
            module_id,
            published: command.published,
            metadata: ArticleMetadata::new(
                command.author,
                command.seo_title,
                command.meta_description,
            ),
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        if updated.slug != article.slug {
            tracing::info!(
                article_id = %updated.id,
                from = %article.slug,
                to = %updated.slug,
                "article slug changed"
            );
        }
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
