// src/application/commands/modules/create.rs
use super::ModuleCommandService;
use crate::{
    application::{
        dto::ModuleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::module::{
        ModuleDescription, ModuleId, ModuleName, NewModule, hierarchy::next_sibling_order,
    },
};

pub struct CreateModuleCommand {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
}

impl ModuleCommandService {
    pub async fn create_module(&self, command: CreateModuleCommand) -> ApplicationResult<ModuleDto> {
        let name = ModuleName::new(command.name)?;
        let description = ModuleDescription::parse(command.description);
        let parent_id = command.parent_id.map(ModuleId::new).transpose()?;

        if let Some(parent) = parent_id {
            self.read_repo
                .find_by_id(parent)
                .await?
                .ok_or_else(|| ApplicationError::not_found(format!("parent module {parent} not found")))?;
        }

        let siblings = self.read_repo.list_children(parent_id).await?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewModule {
                name,
                description,
                parent_id,
                order: next_sibling_order(&siblings),
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            module_id = %created.id,
            parent_id = ?created.parent_id.map(i64::from),
            order = created.order,
            "module created"
        );
        Ok(created.into())
    }
}
