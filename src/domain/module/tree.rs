// src/domain/module/tree.rs
//! Nested view over the flat parent-linked module records.
//!
//! The nested shape is always derived on read and never stored.
use crate::domain::module::entity::{Module, ModulePlacement};
use crate::domain::module::value_objects::ModuleId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub module: Module,
    pub children: Vec<ModuleNode>,
}

impl ModuleNode {
    pub fn id(&self) -> ModuleId {
        self.module.id
    }
}

/// Build one root per top-level module with children populated recursively.
///
/// Siblings are ordered by `(order, id)` at every level. A module whose parent is
/// not part of `modules` is surfaced as a root rather than dropped.
pub fn nest(modules: Vec<Module>) -> Vec<ModuleNode> {
    let known: HashSet<ModuleId> = modules.iter().map(|m| m.id).collect();
    let mut by_parent: HashMap<Option<ModuleId>, Vec<Module>> = HashMap::new();

    for module in modules {
        let key = module.parent_id.filter(|parent| known.contains(parent));
        by_parent.entry(key).or_default().push(module);
    }
    for siblings in by_parent.values_mut() {
        siblings.sort_by(Module::sibling_cmp);
    }

    let roots = by_parent.remove(&None).unwrap_or_default();
    roots
        .into_iter()
        .map(|root| attach_children(root, &mut by_parent))
        .collect()
}

fn attach_children(
    module: Module,
    by_parent: &mut HashMap<Option<ModuleId>, Vec<Module>>,
) -> ModuleNode {
    let children = by_parent
        .remove(&Some(module.id))
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach_children(child, by_parent))
        .collect();
    ModuleNode { module, children }
}

/// Depth-first pre-order list of `{id, parent_id, order}` triples.
pub fn flatten(nodes: &[ModuleNode]) -> Vec<ModulePlacement> {
    let mut out = Vec::new();
    let mut stack: Vec<&ModuleNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node.module.placement());
        stack.extend(node.children.iter().rev());
    }
    out
}
