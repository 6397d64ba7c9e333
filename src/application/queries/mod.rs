pub mod articles;
pub mod modules;
