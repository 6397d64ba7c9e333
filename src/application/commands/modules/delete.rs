use super::ModuleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::module::{ModuleId, deletion::plan_deletion},
};

pub struct DeleteModuleCommand {
    pub id: i64,
}

impl ModuleCommandService {
    /// Delete a module and every article filed under it. Child modules follow
    /// the configured delete policy.
    pub async fn delete_module(&self, command: DeleteModuleCommand) -> ApplicationResult<()> {
        let id = ModuleId::new(command.id)?;
        let modules = self.read_repo.list_all().await?;
        let plan = plan_deletion(&modules, id, self.delete_policy)?;

        let removed = plan.removed.len();
        let reparented = plan.reparented.len();
        self.write_repo.delete(plan).await?;

        tracing::info!(
            module_id = %id,
            policy = %self.delete_policy,
            removed,
            reparented,
            "module deleted"
        );
        Ok(())
    }
}
