use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, module::ModuleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) module_repo: Arc<dyn ModuleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        module_repo: Arc<dyn ModuleReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            module_repo,
        }
    }
}
