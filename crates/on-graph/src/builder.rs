//! Incremental graph builder.

use on_core::{CompId, ohms};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Component, Graph};

#[derive(Debug)]
enum Draft {
    Junction {
        name: String,
        adjacent: Vec<CompId>,
        port: bool,
    },
    Resistor {
        name: String,
        ohms: f64,
        terminals: [Option<CompId>; 2],
    },
}

/// Builder for constructing a graph incrementally.
///
/// Every `wire` records the connection on both ends, so the built graph is
/// symmetric by construction. Resistor terminals fill in wiring order.
/// Call `build()` to validate and produce a `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    drafts: Vec<Draft>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a junction and return its handle.
    pub fn add_junction(&mut self, name: impl Into<String>) -> CompId {
        self.push(Draft::Junction {
            name: name.into(),
            adjacent: Vec::new(),
            port: false,
        })
    }

    /// Add a port junction (an external terminal that is never elided).
    pub fn add_port(&mut self, name: impl Into<String>) -> CompId {
        self.push(Draft::Junction {
            name: name.into(),
            adjacent: Vec::new(),
            port: true,
        })
    }

    /// Add a resistor with both terminals still open.
    pub fn add_resistor(&mut self, name: impl Into<String>, ohms: f64) -> CompId {
        self.push(Draft::Resistor {
            name: name.into(),
            ohms,
            terminals: [None, None],
        })
    }

    /// Add a resistor and wire it to `a` (terminal1) and `b` (terminal2).
    pub fn add_resistor_between(
        &mut self,
        name: impl Into<String>,
        ohms: f64,
        a: CompId,
        b: CompId,
    ) -> CompId {
        let r = self.add_resistor(name, ohms);
        self.wire(r, a);
        self.wire(r, b);
        r
    }

    /// Connect two components. Errors (a resistor with no open terminal, a
    /// bad handle) surface from `build()`.
    pub fn wire(&mut self, a: CompId, b: CompId) {
        self.attach(a, b);
        self.attach(b, a);
    }

    /// Build and validate the graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut components = Vec::with_capacity(self.drafts.len());
        for draft in self.drafts {
            components.push(match draft {
                Draft::Junction {
                    name,
                    adjacent,
                    port,
                } => {
                    if port {
                        Component::port(name, adjacent)
                    } else {
                        Component::junction(name, adjacent)
                    }
                }
                Draft::Resistor {
                    name,
                    ohms: value,
                    terminals,
                } => {
                    let [Some(t1), Some(t2)] = terminals else {
                        return Err(GraphError::precond(
                            "build",
                            &name,
                            "resistor needs two wired terminals",
                        ));
                    };
                    on_core::ensure_nonnegative(value, "resistance")?;
                    Component::resistor(name, ohms(value), [t1, t2])
                }
            });
        }
        Graph::from_components(components)
    }

    fn push(&mut self, draft: Draft) -> CompId {
        let id = CompId::from_usize(self.drafts.len());
        self.drafts.push(draft);
        id
    }

    // An overfull resistor keeps a sentinel pointing at itself so build()
    // reports a self-loop instead of silently dropping the wire.
    fn attach(&mut self, at: CompId, target: CompId) {
        match self.drafts.get_mut(at.usize()) {
            Some(Draft::Junction { adjacent, .. }) => adjacent.push(target),
            Some(Draft::Resistor { terminals, .. }) => {
                match terminals.iter_mut().find(|t| t.is_none()) {
                    Some(slot) => *slot = Some(target),
                    None => terminals[1] = Some(at),
                }
            }
            None => {}
        }
    }
}
