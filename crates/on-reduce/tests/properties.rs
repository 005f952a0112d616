//! Property tests: reduced values match the textbook combination.

use on_core::{CompId, Tolerances, as_ohms, nearly_equal};
use on_graph::{Graph, GraphBuilder};
use on_reduce::{Outcome, ReduceOptions, reduce};
use proptest::prelude::*;

const TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-9,
};

/// Ports A and B with one branch per entry of `branches`, each branch a
/// series chain. With `via_junctions`, neighbouring resistors in a branch
/// meet at a junction instead of touching directly.
fn network(branches: &[Vec<f64>], via_junctions: bool) -> Graph {
    build_network(branches, via_junctions, true)
}

/// As [`network`], with `ports` choosing whether A and B are ports or plain
/// junctions.
fn build_network(branches: &[Vec<f64>], via_junctions: bool, ports: bool) -> Graph {
    let mut builder = GraphBuilder::new();
    let (a, b) = if ports {
        (builder.add_port("A"), builder.add_port("B"))
    } else {
        (builder.add_junction("A"), builder.add_junction("B"))
    };

    let mut serial = 0;
    for (bi, branch) in branches.iter().enumerate() {
        let mut prev: CompId = a;
        for (ri, &value) in branch.iter().enumerate() {
            serial += 1;
            let r = builder.add_resistor(format!("R{serial}"), value);
            builder.wire(r, prev);
            prev = r;
            if via_junctions && ri + 1 < branch.len() {
                let j = builder.add_junction(format!("J{bi}_{ri}"));
                builder.wire(r, j);
                prev = j;
            }
        }
        builder.wire(prev, b);
    }
    builder.build().expect("generated network is well formed")
}

fn expected(branches: &[Vec<f64>]) -> f64 {
    let conductance: f64 = branches
        .iter()
        .map(|branch| 1.0 / branch.iter().sum::<f64>())
        .sum();
    1.0 / conductance
}

proptest! {
    #[test]
    fn series_chain_reduces_to_sum(values in prop::collection::vec(0.1_f64..1000.0, 1..8)) {
        let graph = network(std::slice::from_ref(&values), false);
        let reduced = reduce(&graph, &ReduceOptions::default()).unwrap().graph;

        let sole = reduced.sole_resistor().unwrap();
        let total: f64 = values.iter().sum();
        prop_assert!(nearly_equal(as_ohms(sole.resistance), total, TOL));
        prop_assert_eq!(reduced.len(), 3);
    }

    #[test]
    fn parallel_bundle_reduces_to_harmonic(values in prop::collection::vec(0.1_f64..1000.0, 1..8)) {
        let branches: Vec<Vec<f64>> = values.iter().map(|&v| vec![v]).collect();
        let graph = network(&branches, false);
        let reduced = reduce(&graph, &ReduceOptions::default()).unwrap().graph;

        let sole = reduced.sole_resistor().unwrap();
        prop_assert!(nearly_equal(as_ohms(sole.resistance), expected(&branches), TOL));
    }

    #[test]
    fn series_parallel_ladder_collapses(
        branches in prop::collection::vec(prop::collection::vec(0.1_f64..1000.0, 1..5), 1..5),
        via_junctions in any::<bool>(),
    ) {
        let graph = network(&branches, via_junctions);
        let reduction = reduce(&graph, &ReduceOptions::default()).unwrap();
        let reduced = &reduction.graph;

        reduced.validate().unwrap();
        prop_assert_eq!(reduced.junction_count(), 2);
        let sole = reduced.sole_resistor().unwrap();
        prop_assert!(nearly_equal(as_ohms(sole.resistance), expected(&branches), TOL));

        // The input is never touched
        prop_assert_eq!(graph.len(), network(&branches, via_junctions).len());
    }

    #[test]
    fn plain_terminal_ladder_converges(
        branches in prop::collection::vec(prop::collection::vec(0.1_f64..1000.0, 1..5), 1..5),
        via_junctions in any::<bool>(),
    ) {
        let graph = build_network(&branches, via_junctions, false);
        let reduction = reduce(&graph, &ReduceOptions::default()).unwrap();
        let reduced = &reduction.graph;

        prop_assert_eq!(reduction.report.outcome, Outcome::Converged);
        reduced.validate().unwrap();
        prop_assert!(reduced.junction_count() >= 1);
        prop_assert!(reduced.resistor_count() >= 1);

        // A lone chain has a single way to read its ends
        if branches.len() == 1 {
            let sole = reduced.sole_resistor().unwrap();
            let total: f64 = branches[0].iter().sum();
            prop_assert!(nearly_equal(as_ohms(sole.resistance), total, TOL));
        }
    }
}
