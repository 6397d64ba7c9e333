use super::ModuleQueryService;
use crate::{
    application::{
        dto::ModuleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::module::ModuleId,
};

pub struct GetModuleQuery {
    pub id: i64,
}

impl ModuleQueryService {
    pub async fn get_module(&self, query: GetModuleQuery) -> ApplicationResult<ModuleDto> {
        let id = ModuleId::new(query.id)?;
        let module = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("module not found"))?;
        Ok(module.into())
    }

    pub async fn list_top_level(&self) -> ApplicationResult<Vec<ModuleDto>> {
        self.list_children_of(None).await
    }

    pub async fn list_children(&self, parent_id: i64) -> ApplicationResult<Vec<ModuleDto>> {
        let parent = ModuleId::new(parent_id)?;
        self.read_repo
            .find_by_id(parent)
            .await?
            .ok_or_else(|| ApplicationError::not_found("module not found"))?;
        self.list_children_of(Some(parent)).await
    }

    async fn list_children_of(&self, parent: Option<ModuleId>) -> ApplicationResult<Vec<ModuleDto>> {
        let children = self.read_repo.list_children(parent).await?;
        Ok(children.into_iter().map(Into::into).collect())
    }
}
