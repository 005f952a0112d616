//! Series pass: collapse resistor chains into one resistor each.

use on_core::{CompId, as_ohms, ensure_finite, ohms};
use on_graph::{Component, Graph};
use tracing::debug;

use crate::collect::collect_series;
use crate::error::ReduceResult;
use crate::scratch::Scratch;

/// Merge every series chain in one scan, then compact.
///
/// The merged resistor `R+n` takes the seed's slot and is wired to the
/// chain's two boundaries; the other chain members are dropped. Returns the
/// number of chains merged (zero means the graph is unchanged).
pub fn reduce_series(graph: &mut Graph) -> ReduceResult<usize> {
    let mut scratch = Scratch::new(graph.len());
    let mut merged = 0;

    for i in 0..graph.len() {
        let seed = CompId::from_usize(i);
        if !scratch.is_open(seed) || !graph.is_resistor(seed) {
            continue;
        }

        let chain = collect_series(graph, seed)?;
        if !chain.is_series() {
            continue;
        }

        let mut total = 0.0;
        for &id in &chain.resistors {
            total += as_ohms(graph.resistor(id)?.resistance);
        }
        let total = ensure_finite(total, "series resistance")?;

        let [a, b] = chain.boundary;
        let first = chain.resistors[0];
        let last = chain.resistors[chain.resistors.len() - 1];
        graph.replace_adjacency(a, first, seed)?;
        graph.replace_adjacency(b, last, seed)?;

        let name = graph.mint_name('+');
        debug!(
            merged = %name,
            count = chain.resistors.len(),
            ohms = total,
            from = %graph.name_of(a),
            to = %graph.name_of(b),
            "series merge"
        );
        graph.replace(seed, Component::resistor(name, ohms(total), [a, b]))?;

        for &id in &chain.resistors {
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

#[cfg(test)]
mod tests {
    use super::*;
    use on_graph::GraphBuilder;

    #[test]
    fn chain_of_three_becomes_one() {
        // A - R1(2) - R2(3) - R3(5) - B
        let mut builder = GraphBuilder::new();
        let a = builder.add_junction("A");
        let b = builder.add_junction("B");
        let r1 = builder.add_resistor("R1", 2.0);
        let r2 = builder.add_resistor("R2", 3.0);
        let r3 = builder.add_resistor("R3", 5.0);
        builder.wire(r1, a);
        builder.wire(r1, r2);
        builder.wire(r2, r3);
        builder.wire(r3, b);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_series(&mut graph).unwrap(), 1);
        graph.validate().unwrap();

        assert_eq!(graph.len(), 3);
        let merged = graph.sole_resistor().unwrap();
        assert_eq!(merged.name, "R+1");
        assert_eq!(as_ohms(merged.resistance), 10.0);
        assert_eq!(merged.terminals, [a, b]);

        let r = graph.find("R+1").unwrap();
        assert_eq!(graph.get(a).unwrap().adjacencies(), &[r]);
        assert_eq!(graph.get(b).unwrap().adjacencies(), &[r]);
    }

    #[test]
    fn two_chains_in_one_pass() {
        // A - R1 - R2 - B and B - R3 - R4 - C
        let mut builder = GraphBuilder::new();
        let a = builder.add_junction("A");
        let b = builder.add_junction("B");
        let c = builder.add_junction("C");
        let r1 = builder.add_resistor("R1", 1.0);
        let r2 = builder.add_resistor("R2", 1.0);
        let r3 = builder.add_resistor("R3", 2.0);
        let r4 = builder.add_resistor("R4", 2.0);
        builder.wire(r1, a);
        builder.wire(r1, r2);
        builder.wire(r2, b);
        builder.wire(r3, b);
        builder.wire(r3, r4);
        builder.wire(r4, c);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_series(&mut graph).unwrap(), 2);
        graph.validate().unwrap();
        assert_eq!(graph.resistor_count(), 2);
        assert_eq!(graph.len(), 5);
    }

    #[test]
    fn nothing_to_merge_leaves_graph_alone() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_junction("A");
        let b = builder.add_junction("B");
        builder.add_resistor_between("R1", 1.0, a, b);
        let mut graph = builder.build().unwrap();
        let before = graph.clone();

        assert_eq!(reduce_series(&mut graph).unwrap(), 0);
        assert_eq!(graph.components(), before.components());
    }

    #[test]
    fn chain_looping_back_to_one_junction() {
        // A - R1 - R2 - A
        let mut builder = GraphBuilder::new();
        let a = builder.add_junction("A");
        let r1 = builder.add_resistor("R1", 1.0);
        let r2 = builder.add_resistor("R2", 4.0);
        builder.wire(r1, a);
        builder.wire(r1, r2);
        builder.wire(r2, a);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_series(&mut graph).unwrap(), 1);
        graph.validate().unwrap();
        let merged = graph.sole_resistor().unwrap();
        assert_eq!(merged.terminals, [a, a]);
        assert_eq!(as_ohms(merged.resistance), 5.0);
    }
}
