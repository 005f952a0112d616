//! Parallel pass: collapse resistors sharing both junctions into one resistor.

use on_core::{CompId, as_ohms, ohms};
use on_graph::{Component, Graph};
use tracing::debug;

use crate::collect::collect_parallel;
use crate::error::{ReduceError, ReduceResult};
use crate::scratch::Scratch;

/// Merge every parallel bundle in one scan, then compact.
///
/// Both junctions lose their entries for the bundled resistors and gain one
/// entry for the merged `R|n`, which takes the seed's slot. A zero-ohm
/// resistor in a bundle is an error. Returns the number of bundles merged.
pub fn reduce_parallel(graph: &mut Graph) -> ReduceResult<usize> {
    let mut scratch = Scratch::new(graph.len());
    let mut merged = 0;

    for i in 0..graph.len() {
        let seed = CompId::from_usize(i);
        if !scratch.is_open(seed) || !graph.is_resistor(seed) {
            continue;
        }

        let Some(bundle) = collect_parallel(graph, seed)? else {
            continue;
        };
        if !bundle.is_parallel() {
            continue;
        }

        let total = harmonic(graph, &bundle.resistors)?;

        let [j1, j2] = bundle.junctions;
        for &id in &bundle.resistors {
            graph.remove_adjacency(j1, id)?;
            graph.remove_adjacency(j2, id)?;
        }

        let name = graph.mint_name('|');
        debug!(
            merged = %name,
            count = bundle.resistors.len(),
            ohms = total,
            from = %graph.name_of(j1),
            to = %graph.name_of(j2),
            "parallel merge"
        );
        graph.replace(seed, Component::resistor(name, ohms(total), [j1, j2]))?;
        graph.add_adjacency(j1, seed)?;
        graph.add_adjacency(j2, seed)?;

        for &id in &bundle.resistors {
            if id != seed {
                scratch.remove(id);
            }
        }
        scratch.mark_fresh(seed);
        merged += 1;
    }

    if merged > 0 {
        graph.compact(scratch.removed())?;
    }
    Ok(merged)
}

/// Reciprocal of the sum of reciprocals.
fn harmonic(graph: &Graph, resistors: &[CompId]) -> ReduceResult<f64> {
    let mut conductance = 0.0;
    for &id in resistors {
        let r = graph.resistor(id)?;
        let value = as_ohms(r.resistance);
        if value == 0.0 {
            return Err(ReduceError::ZeroResistance {
                name: r.name.clone(),
            });
        }
        conductance += 1.0 / value;
    }
    Ok(1.0 / conductance)
}
