// src/domain/module/hierarchy.rs
//! In-memory view of the module forest used to validate shape changes before
//! anything is written.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::module::entity::{Module, ModulePlacement};
use crate::domain::module::value_objects::ModuleId;
use std::collections::{HashMap, HashSet};

/// Order assigned to a module appended after `siblings`.
pub fn next_sibling_order(siblings: &[Module]) -> i32 {
    siblings
        .iter()
        .map(|m| m.order)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    placements: HashMap<ModuleId, ModulePlacement>,
}

impl Hierarchy {
    pub fn from_modules(modules: &[Module]) -> Self {
        Self {
            placements: modules.iter().map(|m| (m.id, m.placement())).collect(),
        }
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.placements.contains_key(&id)
    }

    pub fn get(&self, id: ModuleId) -> Option<&ModulePlacement> {
        self.placements.get(&id)
    }

    /// Direct children of `parent`, ordered by `(order, id)`.
    pub fn children_of(&self, parent: Option<ModuleId>) -> Vec<ModulePlacement> {
        let mut children: Vec<ModulePlacement> = self
            .placements
            .values()
            .filter(|p| p.parent_id == parent)
            .copied()
            .collect();
        children.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        children
    }

    /// All descendants of `id` in depth-first pre-order, excluding `id` itself.
    pub fn descendants_of(&self, id: ModuleId) -> Vec<ModuleId> {
        let mut out = Vec::new();
        let mut stack: Vec<ModuleId> = self
            .children_of(Some(id))
            .into_iter()
            .rev()
            .map(|p| p.id)
            .collect();
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            out.push(current);
            stack.extend(self.children_of(Some(current)).into_iter().rev().map(|p| p.id));
        }
        out
    }

    /// Overlay placements on top of the stored ones.
    pub fn apply(&mut self, placements: &[ModulePlacement]) {
        for placement in placements {
            self.placements.insert(placement.id, *placement);
        }
    }

    /// Fail with `Cycle` if following parent links from any module revisits a module.
    pub fn ensure_acyclic(&self) -> DomainResult<()> {
        let mut settled: HashSet<ModuleId> = HashSet::with_capacity(self.placements.len());
        let mut ids: Vec<ModuleId> = self.placements.keys().copied().collect();
        ids.sort();

        for start in ids {
            let mut path = Vec::new();
            let mut on_path = HashSet::new();
            let mut current = Some(start);

            while let Some(id) = current {
                if settled.contains(&id) {
                    break;
                }
                if !on_path.insert(id) {
                    return Err(DomainError::Cycle(format!(
                        "module {id} would become its own ancestor"
                    )));
                }
                path.push(id);
                current = self.placements.get(&id).and_then(|p| p.parent_id);
            }

            settled.extend(path);
        }

        Ok(())
    }
}

/// Check a reorder batch against the current forest.
///
/// Duplicate ids are a validation error, unknown ids or parents are not-found
/// errors and any parent link that closes a loop is a cycle error.
pub fn validate_reorder(modules: &[Module], entries: &[ModulePlacement]) -> DomainResult<()> {
    let mut hierarchy = Hierarchy::from_modules(modules);

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(DomainError::Validation(format!(
                "module {} appears more than once in the reorder batch",
                entry.id
            )));
        }
        if !hierarchy.contains(entry.id) {
            return Err(DomainError::NotFound(format!("module {} not found", entry.id)));
        }
        if let Some(parent) = entry.parent_id {
            if parent == entry.id {
                return Err(DomainError::Cycle(format!(
                    "module {} cannot be its own parent",
                    entry.id
                )));
            }
            if !hierarchy.contains(parent) {
                return Err(DomainError::NotFound(format!(
                    "parent module {parent} not found"
                )));
            }
        }
    }

    hierarchy.apply(entries);
    hierarchy.ensure_acyclic()
}

/// Placements needed to move `id` under `new_parent` at `position` among its new
/// siblings (end when `None`). Both the destination and the source sibling groups
/// are renumbered densely from zero; only placements that change are returned.
pub fn plan_move(
    modules: &[Module],
    id: ModuleId,
    new_parent: Option<ModuleId>,
    position: Option<usize>,
) -> DomainResult<Vec<ModulePlacement>> {
    let hierarchy = Hierarchy::from_modules(modules);
    let current = *hierarchy
        .get(id)
        .ok_or_else(|| DomainError::NotFound(format!("module {id} not found")))?;

    if let Some(parent) = new_parent {
        if parent == id {
            return Err(DomainError::Cycle(format!("module {id} cannot be its own parent")));
        }
        if !hierarchy.contains(parent) {
            return Err(DomainError::NotFound(format!("parent module {parent} not found")));
        }
        if hierarchy.descendants_of(id).contains(&parent) {
            return Err(DomainError::Cycle(format!(
                "module {parent} is a descendant of module {id}"
            )));
        }
    }

    let mut destination: Vec<ModuleId> = hierarchy
        .children_of(new_parent)
        .into_iter()
        .map(|p| p.id)
        .filter(|sibling| *sibling != id)
        .collect();
    let index = position.unwrap_or(destination.len()).min(destination.len());
    destination.insert(index, id);

    let mut planned: Vec<ModulePlacement> = renumber(new_parent, &destination);
    if current.parent_id != new_parent {
        let source: Vec<ModuleId> = hierarchy
            .children_of(current.parent_id)
            .into_iter()
            .map(|p| p.id)
            .filter(|sibling| *sibling != id)
            .collect();
        planned.extend(renumber(current.parent_id, &source));
    }

    Ok(planned
        .into_iter()
        .filter(|placement| hierarchy.get(placement.id) != Some(placement))
        .collect())
}

fn renumber(parent_id: Option<ModuleId>, ids: &[ModuleId]) -> Vec<ModulePlacement> {
    ids.iter()
        .zip(0_i32..)
        .map(|(id, order)| ModulePlacement {
            id: *id,
            parent_id,
            order,
        })
        .collect()
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

    fn placement(id: i64, parent: Option<i64>, order: i32) -> ModulePlacement {
        ModulePlacement {
            id: ModuleId(id),
            parent_id: parent.map(ModuleId),
            order,
        }
    }

    fn forest() -> Vec<Module> {
        // 1
        // ├── 2
        // │   └── 4
        // └── 3
        // 5
        vec![
            module(1, None, 0),
            module(2, Some(1), 0),
            module(3, Some(1), 1),
            module(4, Some(2), 0),
            module(5, None, 1),
        ]
    }

    #[test]
    fn next_order_is_zero_for_empty_group() {
        assert_eq!(next_sibling_order(&[]), 0);
    }

    #[test]
    fn next_order_follows_max_not_len() {
        let siblings = vec![module(1, None, 0), module(2, None, 7)];
        assert_eq!(next_sibling_order(&siblings), 8);
    }

    #[test]
    fn descendants_are_preorder() {
        let hierarchy = Hierarchy::from_modules(&forest());
        assert_eq!(
            hierarchy.descendants_of(ModuleId(1)),
            vec![ModuleId(2), ModuleId(4), ModuleId(3)]
        );
        assert!(hierarchy.descendants_of(ModuleId(5)).is_empty());
    }

    #[test]
    fn existing_forest_is_acyclic() {
        assert!(Hierarchy::from_modules(&forest()).ensure_acyclic().is_ok());
    }

    #[test]
    fn reorder_accepts_move_with_new_parent() {
        let entries = vec![placement(3, Some(5), 0), placement(4, Some(1), 2)];
        assert!(validate_reorder(&forest(), &entries).is_ok());
    }

    #[test]
    fn reorder_rejects_self_parent() {
        let err = validate_reorder(&forest(), &[placement(2, Some(2), 0)]).unwrap_err();
        assert!(matches!(err, DomainError::Cycle(_)));
    }

    #[test]
    fn reorder_rejects_transitive_cycle() {
        // 1 under 4 while 4 is a grandchild of 1.
        let err = validate_reorder(&forest(), &[placement(1, Some(4), 0)]).unwrap_err();
        assert!(matches!(err, DomainError::Cycle(_)));
    }

    #[test]
    fn reorder_allows_swap_that_is_acyclic_once_complete() {
        // 2 moves to top level and 1 moves under 2 in the same batch.
        let entries = vec![placement(2, None, 0), placement(1, Some(2), 0)];
        assert!(validate_reorder(&forest(), &entries).is_ok());
    }

    #[test]
    fn reorder_rejects_unknown_ids_and_parents() {
        assert!(matches!(
            validate_reorder(&forest(), &[placement(42, None, 0)]),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            validate_reorder(&forest(), &[placement(2, Some(42), 0)]),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn reorder_rejects_duplicates() {
        let entries = vec![placement(2, None, 0), placement(2, None, 1)];
        assert!(matches!(
            validate_reorder(&forest(), &entries),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn move_to_new_parent_renumbers_both_groups() {
        let planned = plan_move(&forest(), ModuleId(2), Some(ModuleId(5)), None).unwrap();
        assert!(planned.contains(&placement(2, Some(5), 0)));
        assert!(planned.contains(&placement(3, Some(1), 0)));
        assert_eq!(planned.len(), 2);
    }

    #[test]
    fn move_within_group_inserts_at_position() {
        let planned = plan_move(&forest(), ModuleId(5), None, Some(0)).unwrap();
        assert!(planned.contains(&placement(5, None, 0)));
        assert!(planned.contains(&placement(1, None, 1)));
    }

    #[test]
    fn move_under_descendant_is_a_cycle() {
        let err = plan_move(&forest(), ModuleId(1), Some(ModuleId(4)), None).unwrap_err();
        assert!(matches!(err, DomainError::Cycle(_)));
    }

    #[test]
    fn move_to_same_place_is_empty() {
        let planned = plan_move(&forest(), ModuleId(3), Some(ModuleId(1)), None).unwrap();
        assert!(planned.is_empty());
    }
}
