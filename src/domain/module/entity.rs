// src/domain/module/entity.rs
use crate::domain::module::value_objects::{ModuleDescription, ModuleId, ModuleName};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: ModuleId,
    pub name: ModuleName,
    pub description: Option<ModuleDescription>,
    pub parent_id: Option<ModuleId>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Module {
    pub fn placement(&self) -> ModulePlacement {
        ModulePlacement {
            id: self.id,
            parent_id: self.parent_id,
            order: self.order,
        }
    }

    pub fn rename(&mut self, name: ModuleName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }

    pub fn describe(&mut self, description: Option<ModuleDescription>, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = now;
    }

    /// Sibling display order: `order` first, then id for equal orders.
    pub fn sibling_cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.id.cmp(&other.id))
    }
}

#[derive(Debug, Clone)]
pub struct NewModule {
    pub name: ModuleName,
    pub description: Option<ModuleDescription>,
    pub parent_id: Option<ModuleId>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ModuleUpdate {
    pub id: ModuleId,
    pub name: Option<ModuleName>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<ModuleDescription>>,
    pub updated_at: DateTime<Utc>,
}

impl ModuleUpdate {
    pub fn new(id: ModuleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            description: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: ModuleName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_description(mut self, description: Option<ModuleDescription>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Position of a module in the hierarchy: its parent link and sibling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModulePlacement {
    pub id: ModuleId,
    pub parent_id: Option<ModuleId>,
    pub order: i32,
}

/// Everything a module delete touches, applied in one transaction.
///
/// `reparented` placements are written first, then articles belonging to any
/// module in `removed` are deleted, then the modules themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDeletion {
    pub removed: Vec<ModuleId>,
    pub reparented: Vec<ModulePlacement>,
}
