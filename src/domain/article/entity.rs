// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleMetadata, ArticleSlug, ArticleTitle,
};
use crate::domain::module::ModuleId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub module_id: ModuleId,
    pub published: bool,
    pub metadata: ArticleMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_publicly_visible(&self) -> bool {
        self.published
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub module_id: ModuleId,
    pub published: bool,
    pub metadata: ArticleMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of an article's editable fields.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub module_id: ModuleId,
    pub published: bool,
    pub metadata: ArticleMetadata,
    pub updated_at: DateTime<Utc>,
}

/// Title and slug of a published article, grouped under its module in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLink {
    pub module_id: ModuleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_published_articles_are_public() {
        let now = Utc::now();
        let mut article = Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Install").unwrap(),
            slug: ArticleSlug::new("install").unwrap(),
            content: ArticleContent::new("<p>steps</p>").unwrap(),
            module_id: ModuleId::new(1).unwrap(),
            published: false,
            metadata: ArticleMetadata::default(),
            created_at: now,
            updated_at: now,
        };
        assert!(!article.is_publicly_visible());
        article.published = true;
        assert!(article.is_publicly_visible());
    }
}
