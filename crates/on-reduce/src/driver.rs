//! Fixed-point reduction driver.

use std::fmt;

use on_graph::Graph;
use tracing::{debug, info};

use crate::error::ReduceResult;
use crate::junction::reduce_junctions;
use crate::parallel::reduce_parallel;
use crate::series::reduce_series;

/// One structural rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Series,
    Parallel,
    JunctionElide,
}

impl Pass {
    /// Order the passes run in within a round.
    pub const ROUND: [Pass; 3] = [Pass::Series, Pass::Parallel, Pass::JunctionElide];

    /// Run this pass once. Returns how many rewrites it made.
    pub fn run(self, graph: &mut Graph) -> ReduceResult<usize> {
        match self {
            Pass::Series => reduce_series(graph),
            Pass::Parallel => reduce_parallel(graph),
            Pass::JunctionElide => reduce_junctions(graph),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pass::Series => "series",
            Pass::Parallel => "parallel",
            Pass::JunctionElide => "junction",
        }
    }
}

/// Reduction configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReduceOptions {
    /// Stop after this many rounds even if the last one changed something
    pub max_rounds: Option<usize>,
    /// Check every graph invariant after each pass
    pub check_invariants: bool,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            max_rounds: None,
            check_invariants: true,
        }
    }
}

/// Why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A full round changed nothing.
    Converged,
    /// `max_rounds` was reached first.
    RoundLimit,
}

/// Rewrites made by each pass in one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub series: usize,
    pub parallel: usize,
    pub junctions: usize,
}

impl RoundStats {
    pub fn changed(&self) -> bool {
        self.series + self.parallel + self.junctions > 0
    }

    fn record(&mut self, pass: Pass, count: usize) {
        match pass {
            Pass::Series => self.series += count,
            Pass::Parallel => self.parallel += count,
            Pass::JunctionElide => self.junctions += count,
        }
    }
}

/// Summary of a whole reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceReport {
    /// Rounds run, including the final unproductive one on convergence
    pub rounds: usize,
    /// Rounds that changed the graph
    pub productive_rounds: usize,
    pub series_merges: usize,
    pub parallel_merges: usize,
    pub junctions_elided: usize,
    pub outcome: Outcome,
}

impl fmt::Display for ReduceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            Outcome::Converged => "converged",
            Outcome::RoundLimit => "stopped at round limit",
        };
        write!(
            f,
            "{outcome} after {} round(s) ({} productive): {} series, {} parallel, {} junction(s) elided",
            self.rounds,
            self.productive_rounds,
            self.series_merges,
            self.parallel_merges,
            self.junctions_elided
        )
    }
}

/// The reduced graph and how it got there.
#[derive(Debug, Clone)]
pub struct Reduction {
    pub graph: Graph,
    pub report: ReduceReport,
}

/// Run one round: every pass once, in [`Pass::ROUND`] order.
pub fn reduce_round(graph: &mut Graph, options: &ReduceOptions) -> ReduceResult<RoundStats> {
    let mut stats = RoundStats::default();
    for pass in Pass::ROUND {
        let count = pass.run(graph)?;
        debug!(pass = pass.name(), count, components = graph.len(), "pass done");
        if options.check_invariants {
            graph.validate()?;
        }
        stats.record(pass, count);
    }
    Ok(stats)
}

/// Reduce a copy of `graph` until a round makes no change (or the round cap
/// is hit). The input is never mutated.
pub fn reduce(graph: &Graph, options: &ReduceOptions) -> ReduceResult<Reduction> {
    let mut work = graph.clone();
    let mut report = ReduceReport {
        rounds: 0,
        productive_rounds: 0,
        series_merges: 0,
        parallel_merges: 0,
        junctions_elided: 0,
        outcome: Outcome::Converged,
    };

    loop {
        if options.max_rounds.is_some_and(|cap| report.rounds >= cap) {
            report.outcome = Outcome::RoundLimit;
            break;
        }

        let stats = reduce_round(&mut work, options)?;
        report.rounds += 1;
        report.series_merges += stats.series;
        report.parallel_merges += stats.parallel;
        report.junctions_elided += stats.junctions;

        if !stats.changed() {
            break;
        }
        report.productive_rounds += 1;
        debug!(
            round = report.rounds,
            series = stats.series,
            parallel = stats.parallel,
            junctions = stats.junctions,
            "round done"
        );
    }

    info!(
        rounds = report.rounds,
        productive = report.productive_rounds,
        components = work.len(),
        resistors = work.resistor_count(),
        outcome = ?report.outcome,
        "reduction finished"
    );
    Ok(Reduction {
        graph: work,
        report,
    })
}
