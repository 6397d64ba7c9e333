// tests/support/mocks/store.rs
//! In-memory stand-in for the Postgres repositories.
//!
//! Mutations work on a copy of the state and only swap it in when every step
//! succeeded, which mirrors the transactional behaviour of the real store.
use async_trait::async_trait;
use handbook_core::domain::article::{
    Article, ArticleId, ArticleLink, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use handbook_core::domain::errors::{DomainError, DomainResult};
use handbook_core::domain::module::{
    Module, ModuleDeletion, ModuleId, ModulePlacement, ModuleReadRepository, ModuleUpdate,
    ModuleWriteRepository, NewModule,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct StoreState {
    pub modules: BTreeMap<i64, Module>,
    pub articles: BTreeMap<i64, Article>,
    next_module_id: i64,
    next_article_id: i64,
}

impl StoreState {
    fn allocate_module_id(&mut self) -> i64 {
        self.next_module_id = self.next_module_id.max(
            self.modules.keys().next_back().copied().unwrap_or(0),
        ) + 1;
        self.next_module_id
    }

    fn allocate_article_id(&mut self) -> i64 {
        self.next_article_id = self.next_article_id.max(
            self.articles.keys().next_back().copied().unwrap_or(0),
        ) + 1;
        self.next_article_id
    }

    fn check_parent(&self, id: Option<ModuleId>, parent: Option<ModuleId>) -> DomainResult<()> {
        match parent {
            Some(parent) if Some(parent) == id => Err(DomainError::Cycle(
                "module cannot be its own parent".into(),
            )),
            Some(parent) if !self.modules.contains_key(&parent.0) => Err(DomainError::NotFound(
                "parent module not found".into(),
            )),
            _ => Ok(()),
        }
    }

    fn check_slug(&self, slug: &ArticleSlug, owner: Option<ArticleId>) -> DomainResult<()> {
        let taken = self
            .articles
            .values()
            .any(|a| &a.slug == slug && Some(a.id) != owner);
        if taken {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        Ok(())
    }

    fn check_module(&self, module_id: ModuleId) -> DomainResult<()> {
        if self.modules.contains_key(&module_id.0) {
            Ok(())
        } else {
            Err(DomainError::NotFound("module not found".into()))
        }
    }

    fn place(&mut self, placement: &ModulePlacement) -> DomainResult<()> {
        self.check_parent(Some(placement.id), placement.parent_id)?;
        let module = self
            .modules
            .get_mut(&placement.id.0)
            .ok_or_else(|| DomainError::NotFound(format!("module {} not found", placement.id)))?;
        module.parent_id = placement.parent_id;
        module.order = placement.order;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_module(&self, module: Module) {
        self.state
            .lock()
            .unwrap()
            .modules
            .insert(module.id.0, module);
    }

    pub fn seed_article(&self, article: Article) {
        self.state
            .lock()
            .unwrap()
            .articles
            .insert(article.id.0, article);
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.lock().unwrap().clone()
    }

    pub fn module(&self, id: i64) -> Option<Module> {
        self.state.lock().unwrap().modules.get(&id).cloned()
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn module_count(&self) -> usize {
        self.state.lock().unwrap().modules.len()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    /// Run `f` against a copy of the state and keep the copy only on success.
    fn transact<T>(&self, f: impl FnOnce(&mut StoreState) -> DomainResult<T>) -> DomainResult<T> {
        let mut guard = self.state.lock().unwrap();
        let mut working = guard.clone();
        let value = f(&mut working)?;
        *guard = working;
        Ok(value)
    }

    fn sorted_modules(&self, filter: impl Fn(&Module) -> bool) -> Vec<Module> {
        let mut modules: Vec<Module> = self
            .state
            .lock()
            .unwrap()
            .modules
            .values()
            .filter(|m| filter(*m))
            .cloned()
            .collect();
        modules.sort_by(Module::sibling_cmp);
        modules
    }
}

#[async_trait]
impl ModuleWriteRepository for InMemoryStore {
    async fn insert(&self, module: NewModule) -> DomainResult<Module> {
        self.transact(|state| {
            state.check_parent(None, module.parent_id)?;
            let id = ModuleId::new(state.allocate_module_id())?;
            let created = Module {
                id,
                name: module.name,
                description: module.description,
                parent_id: module.parent_id,
                order: module.order,
                created_at: module.created_at,
                updated_at: module.updated_at,
            };
            state.modules.insert(id.0, created.clone());
            Ok(created)
        })
    }

    async fn update(&self, update: ModuleUpdate) -> DomainResult<Module> {
        self.transact(|state| {
            let module = state
                .modules
                .get_mut(&update.id.0)
                .ok_or_else(|| DomainError::NotFound("module not found".into()))?;
            if let Some(name) = update.name {
                module.rename(name, update.updated_at);
            }
            if let Some(description) = update.description {
                module.describe(description, update.updated_at);
            }
            module.updated_at = update.updated_at;
            Ok(module.clone())
        })
    }

    async fn apply_placements(&self, placements: Vec<ModulePlacement>) -> DomainResult<()> {
        self.transact(|state| {
            for placement in &placements {
                state.place(placement)?;
            }
            Ok(())
        })
    }

    async fn delete(&self, deletion: ModuleDeletion) -> DomainResult<()> {
        self.transact(|state| {
            for placement in &deletion.reparented {
                state.place(placement)?;
            }
            state
                .articles
                .retain(|_, article| !deletion.removed.contains(&article.module_id));
            for id in &deletion.removed {
                state
                    .modules
                    .remove(&id.0)
                    .ok_or_else(|| DomainError::NotFound("module not found".into()))?;
            }
            let orphaned = state
                .modules
                .values()
                .any(|m| m.parent_id.is_some_and(|p| deletion.removed.contains(&p)));
            if orphaned {
                return Err(DomainError::Conflict(
                    "module is still referenced as a parent".into(),
                ));
            }
            Ok(())
        })
    }
}

#[async_trait]
impl ModuleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ModuleId) -> DomainResult<Option<Module>> {
        Ok(self.module(id.0))
    }

    async fn list_children(&self, parent: Option<ModuleId>) -> DomainResult<Vec<Module>> {
        Ok(self.sorted_modules(|m| m.parent_id == parent))
    }

    async fn list_all(&self) -> DomainResult<Vec<Module>> {
        Ok(self.sorted_modules(|_| true))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.transact(|state| {
            state.check_module(article.module_id)?;
            state.check_slug(&article.slug, None)?;
            let id = ArticleId::new(state.allocate_article_id())?;
            let created = Article {
                id,
                title: article.title,
                slug: article.slug,
                content: article.content,
                module_id: article.module_id,
                published: article.published,
                metadata: article.metadata,
                created_at: article.created_at,
                updated_at: article.updated_at,
            };
            state.articles.insert(id.0, created.clone());
            Ok(created)
        })
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.transact(|state| {
            state.check_module(update.module_id)?;
            state.check_slug(&update.slug, Some(update.id))?;
            let article = state
                .articles
                .get_mut(&update.id.0)
                .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
            article.title = update.title;
            article.slug = update.slug;
            article.content = update.content;
            article.module_id = update.module_id;
            article.published = update.published;
            article.metadata = update.metadata;
            article.updated_at = update.updated_at;
            Ok(article.clone())
        })
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.transact(|state| {
            state
                .articles
                .remove(&id.0)
                .map(|_| ())
                .ok_or_else(|| DomainError::NotFound("article not found".into()))
        })
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.article(id.0))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .articles
            .values()
            .find(|a| &a.slug == slug)
            .cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .state
            .lock()
            .unwrap()
            .articles
            .values()
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.0.cmp(&a.id.0)));
        Ok(articles)
    }

    async fn list_published_links(&self) -> DomainResult<Vec<ArticleLink>> {
        let mut published: Vec<Article> = self
            .state
            .lock()
            .unwrap()
            .articles
            .values()
            .filter(|a| a.published)
            .cloned()
            .collect();
        published.sort_by(|a, b| {
            a.title
                .as_str()
                .cmp(b.title.as_str())
                .then(a.id.0.cmp(&b.id.0))
        });
        Ok(published
            .into_iter()
            .map(|a| ArticleLink {
                module_id: a.module_id,
                title: a.title,
                slug: a.slug,
            })
            .collect())
    }
}
