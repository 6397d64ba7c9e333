use crate::domain::errors::DomainResult;
use crate::domain::module::entity::{Module, ModuleDeletion, ModulePlacement, ModuleUpdate, NewModule};
use crate::domain::module::value_objects::ModuleId;
use async_trait::async_trait;

#[async_trait]
pub trait ModuleWriteRepository: Send + Sync {
    async fn insert(&self, module: NewModule) -> DomainResult<Module>;
    async fn update(&self, update: ModuleUpdate) -> DomainResult<Module>;
    /// Write every placement or none of them.
    async fn apply_placements(&self, placements: Vec<ModulePlacement>) -> DomainResult<()>;
    /// Apply a deletion plan atomically, including the article cascade.
    async fn delete(&self, deletion: ModuleDeletion) -> DomainResult<()>;
}

#[async_trait]
pub trait ModuleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ModuleId) -> DomainResult<Option<Module>>;
    /// Direct children of `parent` (`None` = top level), ordered by `(order, id)`.
    async fn list_children(&self, parent: Option<ModuleId>) -> DomainResult<Vec<Module>>;
    /// Every module, ordered by `(order, id)`.
    async fn list_all(&self) -> DomainResult<Vec<Module>>;
}
