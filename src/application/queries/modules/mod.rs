mod get;
mod service;
mod tree;

pub use get::GetModuleQuery;
pub use service::ModuleQueryService;
