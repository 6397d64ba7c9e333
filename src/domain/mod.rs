// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod module;
