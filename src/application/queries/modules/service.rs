use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, module::ModuleReadRepository};

pub struct ModuleQueryService {
    pub(super) read_repo: Arc<dyn ModuleReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
}

impl ModuleQueryService {
    pub fn new(
        read_repo: Arc<dyn ModuleReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            article_repo,
        }
    }
}
