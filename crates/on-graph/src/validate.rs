//! Graph invariant checks.

use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Component, Graph};

/// Check every structural invariant of a graph at a pass boundary:
/// unique names, no dangling handles, no self-loops, and symmetric adjacency.
pub fn check_invariants(graph: &Graph) -> GraphResult<()> {
    check_names(graph.components())?;
    check_references(graph.components())?;
    check_symmetry(graph.components())
}

impl Graph {
    /// See [`check_invariants`].
    pub fn validate(&self) -> GraphResult<()> {
        check_invariants(self)
    }
}

fn check_names(components: &[Component]) -> GraphResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(components.len());
    for comp in components {
        if !seen.insert(comp.name()) {
            return Err(GraphError::DuplicateName {
                name: comp.name().to_string(),
            });
        }
    }
    Ok(())
}

fn check_references(components: &[Component]) -> GraphResult<()> {
    for (i, comp) in components.iter().enumerate() {
        for &target in comp.adjacencies() {
            if target.usize() >= components.len() {
                return Err(GraphError::Dangling {
                    component: comp.name().to_string(),
                    target,
                });
            }
            if target.usize() == i {
                return Err(GraphError::SelfLoop {
                    component: comp.name().to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Multiset symmetry: if A lists B k times, B lists A k times.
fn check_symmetry(components: &[Component]) -> GraphResult<()> {
    let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
    for (i, comp) in components.iter().enumerate() {
        for &target in comp.adjacencies() {
            *counts.entry((i, target.usize())).or_default() += 1;
        }
    }

    for (&(a, b), &forward) in &counts {
        let backward = counts.get(&(b, a)).copied().unwrap_or(0);
        if forward != backward {
            return Err(GraphError::Asymmetric {
                a: components[a].name().to_string(),
                b: components[b].name().to_string(),
                forward,
                backward,
            });
        }
    }
    Ok(())
}
