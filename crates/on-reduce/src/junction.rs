//! Junction elision: splice out pass-through junctions.
//!
//! A non-port junction with exactly two entries is a pass-through when the
//! entries name two distinct components; both neighbours are rewired to each
//! other and the junction goes away. A junction whose two entries are the
//! same junction is a dangling wire stub and is dropped along with its
//! entries on that neighbour. A junction holding both ends of one resistor
//! is left alone, and so is the last junction on a resistor loop: eliding
//! it would leave a ring with no boundary for the series pass.

use on_core::CompId;
use on_graph::{Component, Graph, GraphError};
use tracing::debug;

use crate::error::ReduceResult;
use crate::scratch::Scratch;

/// Elide every eligible junction in one scan, then compact. Returns the
/// number of junctions removed.
pub fn reduce_junctions(graph: &mut Graph) -> ReduceResult<usize> {
    let mut scratch = Scratch::new(graph.len());
    let mut elided = 0;

    for i in 0..graph.len() {
        let id = CompId::from_usize(i);
        if !scratch.is_open(id) {
            continue;
        }
        let Component::Junction(j) = graph.get(id)? else {
            continue;
        };
        if j.port {
            continue;
        }
        let &[n1, n2] = j.adjacent.as_slice() else {
            continue;
        };

        if n1 == n2 {
            if !graph.is_junction(n1) {
                continue;
            }
            graph.remove_adjacency(n1, id)?;
            graph.remove_adjacency(n1, id)?;
            debug!(junction = %graph.name_of(id), to = %graph.name_of(n1), "wire stub dropped");
        } else {
            if closes_loop(graph, id, n1)? {
                continue;
            }
            graph.replace_adjacency(n1, id, n2)?;
            graph.replace_adjacency(n2, id, n1)?;
            debug!(
                junction = %graph.name_of(id),
                left = %graph.name_of(n1),
                right = %graph.name_of(n2),
                "junction elided"
            );
        }

        scratch.remove(id);
        elided += 1;
    }

    if elided > 0 {
        graph.compact(scratch.removed())?;
    }
    Ok(elided)
}

/// Follow resistors out of `junction` through `first`. True when the walk
/// arrives back at `junction` without meeting any other junction.
fn closes_loop(graph: &Graph, junction: CompId, first: CompId) -> ReduceResult<bool> {
    let mut prev = junction;
    let mut cur = first;
    let mut steps = 0;

    while let Component::Resistor(r) = graph.get(cur)? {
        steps += 1;
        if steps > graph.len() {
            return Err(GraphError::ResistorCycle {
                seed: graph.name_of(first).to_string(),
            }
            .into());
        }
        let next = r.other_terminal(prev).ok_or_else(|| {
            GraphError::precond(
                "reduce_junctions",
                &r.name,
                format!("{} is not a terminal", graph.name_of(prev)),
            )
        })?;
        prev = cur;
        cur = next;
    }

    Ok(cur == junction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use on_core::as_ohms;
    use on_graph::GraphBuilder;

    #[test]
    fn junction_between_junctions_is_spliced() {
        // A - J - B, A and B pinned
        let mut builder = GraphBuilder::new();
        let a = builder.add_port("A");
        let j = builder.add_junction("J");
        let b = builder.add_port("B");
        builder.wire(a, j);
        builder.wire(j, b);
        builder.add_resistor_between("R1", 3.0, a, b);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_junctions(&mut graph).unwrap(), 1);
        graph.validate().unwrap();
        assert_eq!(graph.junction_count(), 2);

        let a = graph.find("A").unwrap();
        let b = graph.find("B").unwrap();
        assert!(graph.get(a).unwrap().adjacencies().contains(&b));
        assert!(graph.get(b).unwrap().adjacencies().contains(&a));
    }

    #[test]
    fn resistors_through_a_junction_become_chained() {
        // A - R1 - J - R2 - B
        let mut builder = GraphBuilder::new();
        let a = builder.add_port("A");
        let j = builder.add_junction("J");
        let b = builder.add_port("B");
        let r1 = builder.add_resistor_between("R1", 1.0, a, j);
        let r2 = builder.add_resistor_between("R2", 2.0, j, b);
        let mut graph = builder.build().unwrap();
        let before: f64 = [r1, r2]
            .iter()
            .map(|&r| as_ohms(graph.resistor(r).unwrap().resistance))
            .sum();

        assert_eq!(reduce_junctions(&mut graph).unwrap(), 1);
        graph.validate().unwrap();
        assert_eq!(graph.len(), 4);

        let r1 = graph.find("R1").unwrap();
        let r2 = graph.find("R2").unwrap();
        assert_eq!(graph.resistor(r1).unwrap().terminal2(), r2);
        assert_eq!(graph.resistor(r2).unwrap().terminal1(), r1);

        let after: f64 = [r1, r2]
            .iter()
            .map(|&r| as_ohms(graph.resistor(r).unwrap().resistance))
            .sum();
        assert_eq!(before, after);
    }

    #[test]
    fn ports_and_busy_junctions_stay() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_port("A");
        let m = builder.add_junction("M");
        let b = builder.add_port("B");
        builder.add_resistor_between("R1", 1.0, a, m);
        builder.add_resistor_between("R2", 1.0, m, b);
        builder.add_resistor_between("R3", 1.0, m, b);
        builder.add_resistor_between("R4", 1.0, a, b);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_junctions(&mut graph).unwrap(), 0);
        assert_eq!(graph.len(), 7);
    }

    #[test]
    fn wire_stub_is_dropped() {
        // J lists K twice: a doubled stub hanging off K
        let mut builder = GraphBuilder::new();
        let k = builder.add_port("K");
        let j = builder.add_junction("J");
        builder.wire(k, j);
        builder.wire(k, j);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_junctions(&mut graph).unwrap(), 1);
        graph.validate().unwrap();
        assert_eq!(graph.len(), 1);
        assert!(graph.get(k).unwrap().adjacencies().is_empty());
    }

    #[test]
    fn last_junction_on_a_loop_stays() {
        // J1 - R1 - J2 - R2 - J3 - R3 - J1, no ports anywhere
        let mut builder = GraphBuilder::new();
        let j1 = builder.add_junction("J1");
        let j2 = builder.add_junction("J2");
        let j3 = builder.add_junction("J3");
        builder.add_resistor_between("R1", 1.0, j1, j2);
        builder.add_resistor_between("R2", 2.0, j2, j3);
        builder.add_resistor_between("R3", 3.0, j3, j1);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_junctions(&mut graph).unwrap(), 2);
        graph.validate().unwrap();
        assert_eq!(graph.junction_count(), 1);
        assert!(graph.find("J3").is_some());

        // Running again changes nothing: J3 holds the loop together
        assert_eq!(reduce_junctions(&mut graph).unwrap(), 0);
    }

    #[test]
    fn shorted_resistor_keeps_its_junction() {
        let mut builder = GraphBuilder::new();
        let j = builder.add_junction("J");
        builder.add_resistor_between("R1", 1.0, j, j);
        let mut graph = builder.build().unwrap();

        assert_eq!(reduce_junctions(&mut graph).unwrap(), 0);
    }
}
