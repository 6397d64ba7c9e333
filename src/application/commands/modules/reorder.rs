// src/application/commands/modules/reorder.rs
use super::ModuleCommandService;
use crate::{
    application::{
        dto::ModuleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::module::{
        ModuleId, ModulePlacement,
        hierarchy::{plan_move, validate_reorder},
    },
};

#[derive(Debug, Clone, Copy)]
pub struct ReorderEntry {
    pub id: i64,
    pub order: i32,
    pub parent_id: Option<i64>,
}

/// Declarative result of a drag-and-drop: every listed module gets the given
/// parent and order, all together or not at all.
pub struct ReorderModulesCommand {
    pub entries: Vec<ReorderEntry>,
}

pub struct MoveModuleCommand {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub position: Option<usize>,
}

impl ModuleCommandService {
    pub async fn reorder_modules(&self, command: ReorderModulesCommand) -> ApplicationResult<()> {
        if command.entries.is_empty() {
            return Ok(());
        }

        let placements = command
            .entries
            .into_iter()
            .map(|entry| -> ApplicationResult<ModulePlacement> {
                Ok(ModulePlacement {
                    id: ModuleId::new(entry.id)?,
                    parent_id: entry.parent_id.map(ModuleId::new).transpose()?,
                    order: entry.order,
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        let modules = self.read_repo.list_all().await?;
        if let Err(err) = validate_reorder(&modules, &placements) {
            tracing::warn!(error = %err, entries = placements.len(), "reorder batch rejected");
            return Err(err.into());
        }

        let count = placements.len();
        self.write_repo.apply_placements(placements).await?;
        tracing::info!(entries = count, "modules reordered");
        Ok(())
    }

    pub async fn move_module(&self, command: MoveModuleCommand) -> ApplicationResult<ModuleDto> {
        let id = ModuleId::new(command.id)?;
        let parent_id = command.parent_id.map(ModuleId::new).transpose()?;

        let modules = self.read_repo.list_all().await?;
        let placements = plan_move(&modules, id, parent_id, command.position)?;

        if !placements.is_empty() {
            let count = placements.len();
            self.write_repo.apply_placements(placements).await?;
            tracing::info!(
                module_id = %id,
                parent_id = ?parent_id.map(i64::from),
                touched = count,
                "module moved"
            );
        }

        let moved = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("module not found"))?;
        Ok(moved.into())
    }
}
