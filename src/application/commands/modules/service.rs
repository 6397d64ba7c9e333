// src/application/commands/modules/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::module::{DeletePolicy, ModuleReadRepository, ModuleWriteRepository},
};

pub struct ModuleCommandService {
    pub(super) write_repo: Arc<dyn ModuleWriteRepository>,
    pub(super) read_repo: Arc<dyn ModuleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) delete_policy: DeletePolicy,
}

impl ModuleCommandService {
    pub fn new(
        write_repo: Arc<dyn ModuleWriteRepository>,
        read_repo: Arc<dyn ModuleReadRepository>,
        clock: Arc<dyn Clock>,
        delete_policy: DeletePolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
            delete_policy,
        }
    }
}
