//! on-graph: component graph for ohmnet.
//!
//! Provides:
//! - The component model (`Component` = junction | resistor) and `Graph`
//! - Adjacency mutation primitives and compaction under an index remap
//! - Invariant validation and an incremental builder
//! - A line-per-component renderer
//!
//! # Example
//!
//! ```
//! use on_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_junction("A");
//! let b = builder.add_junction("B");
//! builder.add_resistor_between("R1", 2.0, a, b);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.len(), 3);
//! assert_eq!(graph.resistor_count(), 1);
//! ```

pub mod adjacency;
pub mod builder;
pub mod compact;
pub mod error;
pub mod graph;
pub mod render;
pub mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use compact::Remap;
pub use error::{GraphError, GraphResult};
pub use graph::{Component, ComponentKind, Graph, Junction, Resistor};
