// src/domain/module/deletion.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::module::entity::{Module, ModuleDeletion, ModulePlacement};
use crate::domain::module::hierarchy::Hierarchy;
use crate::domain::module::value_objects::ModuleId;
use std::{fmt, str::FromStr};

/// What happens to child modules when their parent is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Refuse to delete a module that still has children.
    #[default]
    Reject,
    /// Delete the whole subtree, articles included.
    Cascade,
    /// Hand the children to the deleted module's parent.
    Reparent,
}

impl DeletePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Cascade => "cascade",
            Self::Reparent => "reparent",
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeletePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "cascade" => Ok(Self::Cascade),
            "reparent" => Ok(Self::Reparent),
            other => Err(DomainError::Validation(format!(
                "unknown module delete policy: {other}"
            ))),
        }
    }
}

pub fn plan_deletion(
    modules: &[Module],
    id: ModuleId,
    policy: DeletePolicy,
) -> DomainResult<ModuleDeletion> {
    let hierarchy = Hierarchy::from_modules(modules);
    let target = *hierarchy
        .get(id)
        .ok_or_else(|| DomainError::NotFound(format!("module {id} not found")))?;
    let children = hierarchy.children_of(Some(id));

    match policy {
        DeletePolicy::Reject => {
            if !children.is_empty() {
                return Err(DomainError::Conflict(format!(
                    "module {id} still has {} child module(s)",
                    children.len()
                )));
            }
            Ok(ModuleDeletion {
                removed: vec![id],
                reparented: Vec::new(),
            })
        }
        DeletePolicy::Cascade => {
            let mut removed = vec![id];
            removed.extend(hierarchy.descendants_of(id));
            Ok(ModuleDeletion {
                removed,
                reparented: Vec::new(),
            })
        }
        DeletePolicy::Reparent => {
            let first_free = hierarchy
                .children_of(target.parent_id)
                .iter()
                .filter(|sibling| sibling.id != id)
                .map(|sibling| sibling.order)
                .max()
                .map_or(0, |max| max.saturating_add(1));

            let reparented = children
                .iter()
                .zip(0_i32..)
                .map(|(child, offset)| ModulePlacement {
                    id: child.id,
                    parent_id: target.parent_id,
                    order: first_free.saturating_add(offset),
                })
                .collect();

            Ok(ModuleDeletion {
                removed: vec![id],
                reparented,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::module::value_objects::ModuleName;
    use chrono::Utc;

    fn module(id: i64, parent: Option<i64>, order: i32) -> Module {
        let now = Utc::now();
        Module {
            id: ModuleId(id),
            name: ModuleName::new(format!("module {id}")).unwrap(),
            description: None,
            parent_id: parent.map(ModuleId),
            order,
            created_at: now,
            updated_at: now,
        }
    }

    fn forest() -> Vec<Module> {
        vec![
            module(1, None, 0),
            module(2, Some(1), 0),
            module(3, Some(1), 1),
            module(4, Some(2), 0),
            module(5, None, 1),
        ]
    }

    #[test]
    fn parses_policies() {
        assert_eq!("Cascade".parse::<DeletePolicy>().unwrap(), DeletePolicy::Cascade);
        assert_eq!(" reparent ".parse::<DeletePolicy>().unwrap(), DeletePolicy::Reparent);
        assert!("orphan".parse::<DeletePolicy>().is_err());
        assert_eq!(DeletePolicy::default(), DeletePolicy::Reject);
    }

    #[test]
    fn reject_blocks_parents_but_not_leaves() {
        assert!(matches!(
            plan_deletion(&forest(), ModuleId(1), DeletePolicy::Reject),
            Err(DomainError::Conflict(_))
        ));
        let plan = plan_deletion(&forest(), ModuleId(4), DeletePolicy::Reject).unwrap();
        assert_eq!(plan.removed, vec![ModuleId(4)]);
        assert!(plan.reparented.is_empty());
    }

    #[test]
    fn cascade_removes_subtree() {
        let plan = plan_deletion(&forest(), ModuleId(1), DeletePolicy::Cascade).unwrap();
        assert_eq!(
            plan.removed,
            vec![ModuleId(1), ModuleId(2), ModuleId(4), ModuleId(3)]
        );
    }

    #[test]
    fn reparent_appends_children_to_grandparent() {
        let plan = plan_deletion(&forest(), ModuleId(1), DeletePolicy::Reparent).unwrap();
        assert_eq!(plan.removed, vec![ModuleId(1)]);
        assert_eq!(
            plan.reparented,
            vec![
                ModulePlacement { id: ModuleId(2), parent_id: None, order: 2 },
                ModulePlacement { id: ModuleId(3), parent_id: None, order: 3 },
            ]
        );
    }

    #[test]
    fn missing_module_is_not_found() {
        assert!(matches!(
            plan_deletion(&forest(), ModuleId(99), DeletePolicy::Cascade),
            Err(DomainError::NotFound(_))
        ));
    }
}
