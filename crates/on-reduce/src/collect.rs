//! Read-only collectors: find the chain or bundle a seed resistor belongs to.

use on_core::CompId;
use on_graph::{Component, Graph, GraphError};

use crate::error::ReduceResult;

/// Resistors chained terminal-to-terminal, with the junctions that bound the
/// chain on either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesChain {
    /// `[boundary_A, boundary_B]`: first non-resistors reached walking out
    /// of terminal1 and terminal2 of the seed.
    pub boundary: [CompId; 2],
    /// Chained resistors ordered from `boundary_A` to `boundary_B`. Includes the seed.
    pub resistors: Vec<CompId>,
}

impl SeriesChain {
    /// At least two resistors chained between two boundaries.
    pub fn is_series(&self) -> bool {
        self.resistors.len() >= 2
    }

    /// `[boundary_A, r_1, .., r_k, boundary_B]`.
    pub fn sequence(&self) -> Vec<CompId> {
        let mut seq = Vec::with_capacity(self.resistors.len() + 2);
        seq.push(self.boundary[0]);
        seq.extend_from_slice(&self.resistors);
        seq.push(self.boundary[1]);
        seq
    }
}

/// Resistors wired directly between the same two junctions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelBundle {
    /// The seed's terminal junctions, `[j1, j2]`.
    pub junctions: [CompId; 2],
    /// The seed first, then every other resistor between `j1` and `j2`.
    pub resistors: Vec<CompId>,
}

impl ParallelBundle {
    pub fn is_parallel(&self) -> bool {
        self.resistors.len() >= 2
    }

    /// `[j1, r, others.., j2]`.
    pub fn sequence(&self) -> Vec<CompId> {
        let mut seq = Vec::with_capacity(self.resistors.len() + 2);
        seq.push(self.junctions[0]);
        seq.extend_from_slice(&self.resistors);
        seq.push(self.junctions[1]);
        seq
    }
}

/// Walk outward from `seed` on both terminals until a non-resistor is hit.
///
/// A walk that arrives back at `seed` is a resistor ring with no junction to
/// bound it, reported as [`GraphError::ResistorCycle`].
pub fn collect_series(graph: &Graph, seed: CompId) -> ReduceResult<SeriesChain> {
    let start = graph.resistor(seed)?;

    let (mut left, boundary_a) = walk(graph, seed, start.terminal1())?;
    let (right, boundary_b) = walk(graph, seed, start.terminal2())?;

    left.reverse();
    left.push(seed);
    left.extend(right);

    Ok(SeriesChain {
        boundary: [boundary_a, boundary_b],
        resistors: left,
    })
}

/// Follow resistors from `seed` through `first`. Returns the resistors
/// passed (nearest first) and the component that stopped the walk.
fn walk(graph: &Graph, seed: CompId, first: CompId) -> ReduceResult<(Vec<CompId>, CompId)> {
    let mut chain = Vec::new();
    let mut prev = seed;
    let mut cur = first;

    while let Component::Resistor(r) = graph.get(cur)? {
        if cur == seed {
            return Err(GraphError::ResistorCycle {
                seed: graph.name_of(seed).to_string(),
            }
            .into());
        }
        chain.push(cur);
        let next = r.other_terminal(prev).ok_or_else(|| {
            GraphError::precond(
                "collect_series",
                &r.name,
                format!("{} is not a terminal", graph.name_of(prev)),
            )
        })?;
        prev = cur;
        cur = next;
    }

    Ok((chain, cur))
}

/// Gather every resistor wired between the seed's two terminal junctions.
///
/// Returns `None` when either terminal of the seed is not a junction.
pub fn collect_parallel(graph: &Graph, seed: CompId) -> ReduceResult<Option<ParallelBundle>> {
    let start = graph.resistor(seed)?;
    let [j1, j2] = start.terminals;

    let Some(first) = graph.get(j1)?.as_junction() else {
        return Ok(None);
    };
    if !graph.is_junction(j2) {
        return Ok(None);
    }

    let mut resistors = vec![seed];
    for &other in &first.adjacent {
        if resistors.contains(&other) {
            continue;
        }
        if let Component::Resistor(r) = graph.get(other)? {
            if r.other_terminal(j1) == Some(j2) {
                resistors.push(other);
            }
        }
    }

    Ok(Some(ParallelBundle {
        junctions: [j1, j2],
        resistors,
    }))
}
