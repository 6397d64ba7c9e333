// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, modules::ModuleCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, modules::ModuleQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        module::{DeletePolicy, ModuleReadRepository, ModuleWriteRepository},
    },
};

/// Repositories the services are built from.
pub struct Repositories {
    pub module_write: Arc<dyn ModuleWriteRepository>,
    pub module_read: Arc<dyn ModuleReadRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
}

pub struct ApplicationServices {
    pub module_commands: Arc<ModuleCommandService>,
    pub module_queries: Arc<ModuleQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        delete_policy: DeletePolicy,
    ) -> Self {
        let module_commands = Arc::new(ModuleCommandService::new(
            Arc::clone(&repos.module_write),
            Arc::clone(&repos.module_read),
            Arc::clone(&clock),
            delete_policy,
        ));

        let module_queries = Arc::new(ModuleQueryService::new(
            Arc::clone(&repos.module_read),
            Arc::clone(&repos.article_read),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.module_read),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.module_read),
        ));

        Self {
            module_commands,
            module_queries,
            article_commands,
            article_queries,
        }
    }
}
