//! on-reduce: structural reduction of resistor networks.
//!
//! Three passes rewrite the graph, each as a single scan over the component
//! table followed by a compaction:
//! - series: resistors chained terminal-to-terminal become one `R+n`
//! - parallel: resistors wired between the same two junctions become one `R|n`
//! - junction elision: pass-through junctions are removed
//!
//! [`reduce`] runs them in that order, round after round, until a round
//! changes nothing. It works on a clone; the caller's graph is untouched.
//!
//! ```
//! use on_graph::GraphBuilder;
//! use on_reduce::{ReduceOptions, reduce};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_junction("A");
//! let b = builder.add_junction("B");
//! builder.add_resistor_between("R1", 2.0, a, b);
//! builder.add_resistor_between("R2", 2.0, a, b);
//! let graph = builder.build().unwrap();
//!
//! let reduction = reduce(&graph, &ReduceOptions::default()).unwrap();
//! let r = reduction.graph.sole_resistor().unwrap();
//! assert_eq!(on_core::as_ohms(r.resistance), 1.0);
//! ```

pub mod collect;
pub mod driver;
pub mod error;
pub mod junction;
pub mod parallel;
pub mod series;

mod scratch;

pub use collect::{ParallelBundle, SeriesChain, collect_parallel, collect_series};
pub use driver::{Outcome, Pass, ReduceOptions, ReduceReport, Reduction, RoundStats, reduce, reduce_round};
pub use error::{ReduceError, ReduceResult};
pub use junction::reduce_junctions;
pub use parallel::reduce_parallel;
pub use series::reduce_series;
