// tests/support/builders.rs
use super::mocks::fixed_now;
use chrono::{DateTime, Utc};
use handbook_core::domain::article::*;
use handbook_core::domain::module::{Module, ModuleDescription, ModuleId, ModuleName};

pub struct ModuleBuilder {
    id: i64,
    name: String,
    description: Option<String>,
    parent_id: Option<i64>,
    order: i32,
}

impl ModuleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Module {id}"),
            description: None,
            parent_id: None,
            order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> Module {
        Module {
            id: ModuleId::new(self.id).unwrap(),
            name: ModuleName::new(self.name).unwrap(),
            description: ModuleDescription::parse(self.description),
            parent_id: self.parent_id.map(|p| ModuleId::new(p).unwrap()),
            order: self.order,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: Option<String>,
    content: String,
    module_id: i64,
    published: bool,
    updated_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64, module_id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            slug: None,
            content: "<p>body</p>".into(),
            module_id,
            published: false,
            updated_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn build(self) -> Article {
        let slug = self.slug.unwrap_or_else(|| format!("article-{}", self.id));
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            module_id: ModuleId::new(self.module_id).unwrap(),
            published: self.published,
            metadata: ArticleMetadata::default(),
            created_at: fixed_now(),
            updated_at: self.updated_at,
        }
    }
}
