//! Compaction: dropping dead slots and renumbering survivors densely.
//!
//! A pass marks components as removed while it runs; the table keeps its
//! shape until the pass ends. Compaction then builds the old -> new handle
//! table, drops the removed slots and rewrites every surviving adjacency list
//! through that table in one step.

use on_core::CompId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Old -> new handle translation produced by a compaction.
///
/// `None` marks a removed component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remap {
    table: Vec<Option<CompId>>,
    live: usize,
}

impl Remap {
    /// Survivors keep their relative order and are numbered `0..live`.
    pub fn from_removed(removed: &[bool]) -> Self {
        let mut table = Vec::with_capacity(removed.len());
        let mut live = 0;
        for &gone in removed {
            if gone {
                table.push(None);
            } else {
                table.push(Some(CompId::from_usize(live)));
                live += 1;
            }
        }
        Self { table, live }
    }

    /// New handle of `old`, or `None` if it was removed (or out of range).
    pub fn get(&self, old: CompId) -> Option<CompId> {
        self.table.get(old.usize()).copied().flatten()
    }

    /// Number of surviving components.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Number of slots before compaction.
    pub fn old_count(&self) -> usize {
        self.table.len()
    }

    /// True if nothing was removed.
    pub fn is_identity(&self) -> bool {
        self.live == self.table.len()
    }
}

impl Graph {
    /// Drop every component flagged in `removed` and renumber the rest.
    ///
    /// Fails without touching the graph if a survivor still refers to a
    /// removed component.
    pub fn compact(&mut self, removed: &[bool]) -> GraphResult<Remap> {
        if removed.len() != self.components.len() {
            return Err(on_core::OnError::IndexOob {
                what: "removal flags",
                index: removed.len(),
                len: self.components.len(),
            }
            .into());
        }

        let remap = Remap::from_removed(removed);

        // Check all survivors first so a failure leaves the table intact
        for (comp, &gone) in self.components.iter().zip(removed) {
            if gone {
                continue;
            }
            if let Some(&target) = comp.adjacencies().iter().find(|&&a| remap.get(a).is_none()) {
                return Err(GraphError::Dangling {
                    component: comp.name().to_string(),
                    target,
                });
            }
        }

        if remap.is_identity() {
            return Ok(remap);
        }

        let old = std::mem::take(&mut self.components);
        let mut kept = Vec::with_capacity(remap.live_count());
        for (mut comp, &gone) in old.into_iter().zip(removed) {
            if gone {
                continue;
            }
            comp.remap_adjacencies(&remap)?;
            kept.push(comp);
        }
        self.components = kept;

        Ok(remap)
    }
}
