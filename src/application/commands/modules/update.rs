use super::ModuleCommandService;
use crate::{
    application::{
        dto::ModuleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::module::{ModuleDescription, ModuleId, ModuleName, ModuleUpdate},
};

/// Partial update of a module's label and description.
///
/// A present but blank `description` clears it. Parent and order are only
/// changed through reorder/move.
pub struct UpdateModuleCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ModuleCommandService {
    pub async fn update_module(&self, command: UpdateModuleCommand) -> ApplicationResult<ModuleDto> {
        let id = ModuleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("module not found"))?;

        let mut update = ModuleUpdate::new(id, self.clock.now());
        if let Some(name) = command.name {
            update = update.with_name(ModuleName::new(name)?);
        }
        if let Some(description) = command.description {
            update = update.with_description(ModuleDescription::parse(Some(description)));
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(module_id = %updated.id, "module updated");
        Ok(updated.into())
    }
}
