// src/application/commands/modules/mod.rs
mod create;
mod delete;
mod reorder;
mod service;
mod update;

pub use create::CreateModuleCommand;
pub use delete::DeleteModuleCommand;
pub use reorder::{MoveModuleCommand, ReorderEntry, ReorderModulesCommand};
pub use service::ModuleCommandService;
pub use update::UpdateModuleCommand;
