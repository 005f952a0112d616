//! Adjacency mutation primitives.
//!
//! Each primitive touches only the target component. A primitive whose
//! precondition does not hold fails with [`GraphError::PrecondViolation`];
//! on a correctly maintained graph that never happens.

use on_core::CompId;

use crate::compact::Remap;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Component, Graph};

impl Component {
    /// Replace the adjacency list wholesale. A resistor takes exactly two entries.
    pub fn set_adjacencies(&mut self, list: Vec<CompId>) -> GraphResult<()> {
        match self {
            Component::Junction(j) => {
                j.adjacent = list;
                Ok(())
            }
            Component::Resistor(r) => match <[CompId; 2]>::try_from(list.as_slice()) {
                Ok(terminals) => {
                    r.terminals = terminals;
                    Ok(())
                }
                Err(_) => Err(GraphError::precond(
                    "set_adjacencies",
                    &r.name,
                    format!("a resistor has 2 terminals, got {}", list.len()),
                )),
            },
        }
    }

    /// Append a neighbour to a junction.
    pub fn add_adjacency(&mut self, target: CompId) -> GraphResult<()> {
        match self {
            Component::Junction(j) => {
                j.adjacent.push(target);
                Ok(())
            }
            Component::Resistor(r) => Err(GraphError::precond(
                "add_adjacency",
                &r.name,
                "resistor terminals are fixed",
            )),
        }
    }

    /// Delete the first occurrence of `target` from a junction.
    pub fn remove_adjacency(&mut self, target: CompId) -> GraphResult<()> {
        match self {
            Component::Junction(j) => match j.adjacent.iter().position(|&a| a == target) {
                Some(pos) => {
                    j.adjacent.remove(pos);
                    Ok(())
                }
                None => Err(GraphError::precond(
                    "remove_adjacency",
                    &j.name,
                    format!("{target} is not adjacent"),
                )),
            },
            Component::Resistor(r) => Err(GraphError::precond(
                "remove_adjacency",
                &r.name,
                "resistor terminals are fixed",
            )),
        }
    }

    /// Rewrite the first occurrence of `old` to `new`.
    pub fn replace_adjacency(&mut self, old: CompId, new: CompId) -> GraphResult<()> {
        let name = self.name().to_string();
        let slots: &mut [CompId] = match self {
            Component::Junction(j) => &mut j.adjacent,
            Component::Resistor(r) => &mut r.terminals,
        };
        match slots.iter_mut().find(|a| **a == old) {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(GraphError::precond(
                "replace_adjacency",
                &name,
                format!("{old} is not adjacent"),
            )),
        }
    }

    /// Rewrite every entry through `remap`. Fails on an entry that maps to a
    /// removed component.
    pub fn remap_adjacencies(&mut self, remap: &Remap) -> GraphResult<()> {
        let name = self.name().to_string();
        let slots: &mut [CompId] = match self {
            Component::Junction(j) => &mut j.adjacent,
            Component::Resistor(r) => &mut r.terminals,
        };
        for slot in slots.iter_mut() {
            let old = *slot;
            *slot = remap.get(old).ok_or_else(|| GraphError::Dangling {
                component: name.clone(),
                target: old,
            })?;
        }
        Ok(())
    }
}

/// Handle-addressed forms of the primitives.
impl Graph {
    pub fn set_adjacencies(&mut self, at: CompId, list: Vec<CompId>) -> GraphResult<()> {
        self.get_mut(at)?.set_adjacencies(list)
    }

    pub fn add_adjacency(&mut self, at: CompId, target: CompId) -> GraphResult<()> {
        self.get_mut(at)?.add_adjacency(target)
    }

    pub fn remove_adjacency(&mut self, at: CompId, target: CompId) -> GraphResult<()> {
        self.get_mut(at)?.remove_adjacency(target)
    }

    pub fn replace_adjacency(&mut self, at: CompId, old: CompId, new: CompId) -> GraphResult<()> {
        self.get_mut(at)?.replace_adjacency(old, new)
    }
}
