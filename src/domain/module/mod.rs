pub mod deletion;
pub mod entity;
pub mod hierarchy;
pub mod repository;
pub mod tree;
pub mod value_objects;

pub use deletion::DeletePolicy;
pub use entity::{Module, ModuleDeletion, ModulePlacement, ModuleUpdate, NewModule};
pub use repository::{ModuleReadRepository, ModuleWriteRepository};
pub use tree::ModuleNode;
pub use value_objects::{ModuleDescription, ModuleId, ModuleName};
