//! Core graph data structures.

use on_core::{CompId, Resistance};

use crate::error::{GraphError, GraphResult};
use crate::validate;

/// Kind of a component, for display and quick tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Junction,
    Resistor,
}

/// A circuit node where zero or more resistors/junctions meet.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub name: String,
    /// Neighbours, in declaration order. A resistor with both terminals here
    /// appears twice.
    pub adjacent: Vec<CompId>,
    /// External terminal of the network (`IN`, `OUT`, or pinned). Never elided.
    pub port: bool,
}

/// A two-terminal element.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    pub name: String,
    pub resistance: Resistance,
    /// `[terminal1, terminal2]`.
    pub terminals: [CompId; 2],
}

impl Resistor {
    pub fn terminal1(&self) -> CompId {
        self.terminals[0]
    }

    pub fn terminal2(&self) -> CompId {
        self.terminals[1]
    }

    /// The terminal that is not `from`, or `None` if `from` is not a terminal.
    ///
    /// When both terminals equal `from` the answer is `from`.
    pub fn other_terminal(&self, from: CompId) -> Option<CompId> {
        if self.terminals[0] == from {
            Some(self.terminals[1])
        } else if self.terminals[1] == from {
            Some(self.terminals[0])
        } else {
            None
        }
    }
}

/// A node in the network graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Junction(Junction),
    Resistor(Resistor),
}

impl Component {
    pub fn junction(name: impl Into<String>, adjacent: Vec<CompId>) -> Self {
        Component::Junction(Junction {
            name: name.into(),
            adjacent,
            port: false,
        })
    }

    pub fn port(name: impl Into<String>, adjacent: Vec<CompId>) -> Self {
        Component::Junction(Junction {
            name: name.into(),
            adjacent,
            port: true,
        })
    }

    pub fn resistor(name: impl Into<String>, resistance: Resistance, terminals: [CompId; 2]) -> Self {
        Component::Resistor(Resistor {
            name: name.into(),
            resistance,
            terminals,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Junction(j) => &j.name,
            Component::Resistor(r) => &r.name,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Junction(_) => ComponentKind::Junction,
            Component::Resistor(_) => ComponentKind::Resistor,
        }
    }

    /// Adjacent component handles. A resistor always has exactly two.
    pub fn adjacencies(&self) -> &[CompId] {
        match self {
            Component::Junction(j) => &j.adjacent,
            Component::Resistor(r) => &r.terminals,
        }
    }

    pub fn is_junction(&self) -> bool {
        matches!(self, Component::Junction(_))
    }

    pub fn is_resistor(&self) -> bool {
        matches!(self, Component::Resistor(_))
    }

    pub fn as_resistor(&self) -> Option<&Resistor> {
        match self {
            Component::Resistor(r) => Some(r),
            Component::Junction(_) => None,
        }
    }

    pub fn as_junction(&self) -> Option<&Junction> {
        match self {
            Component::Junction(j) => Some(j),
            Component::Resistor(_) => None,
        }
    }
}

/// The network: an index-addressable component table.
///
/// Handles are dense (`0..len`) between passes. The synth counter only ever
/// grows, so names minted for merged resistors are never reused.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) components: Vec<Component>,
    pub(crate) next_synth: u32,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            components: Vec::new(),
            next_synth: 1,
        }
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a component table, checking every invariant.
    pub fn from_components(components: Vec<Component>) -> GraphResult<Self> {
        let graph = Self {
            components,
            ..Self::default()
        };
        validate::check_invariants(&graph)?;
        Ok(graph)
    }

    /// Return all components.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Handles of every component, in table order.
    pub fn ids(&self) -> impl Iterator<Item = CompId> + '_ {
        (0..self.components.len()).map(CompId::from_usize)
    }

    /// Get a component by handle (returns None if out of bounds).
    pub fn component(&self, id: CompId) -> Option<&Component> {
        self.components.get(id.usize())
    }

    /// Get a component by handle, failing if out of bounds.
    pub fn get(&self, id: CompId) -> GraphResult<&Component> {
        let len = self.components.len();
        self.components
            .get(id.usize())
            .ok_or(GraphError::NoSuchComponent { id, len })
    }

    pub fn get_mut(&mut self, id: CompId) -> GraphResult<&mut Component> {
        let len = self.components.len();
        self.components
            .get_mut(id.usize())
            .ok_or(GraphError::NoSuchComponent { id, len })
    }

    /// Get a resistor by handle, failing if the component is a junction.
    pub fn resistor(&self, id: CompId) -> GraphResult<&Resistor> {
        let comp = self.get(id)?;
        comp.as_resistor().ok_or_else(|| GraphError::NotAResistor {
            component: comp.name().to_string(),
        })
    }

    pub fn is_junction(&self, id: CompId) -> bool {
        self.component(id).is_some_and(Component::is_junction)
    }

    pub fn is_resistor(&self, id: CompId) -> bool {
        self.component(id).is_some_and(Component::is_resistor)
    }

    /// Name of a component, or `?` for a bad handle (diagnostics only).
    pub fn name_of(&self, id: CompId) -> &str {
        self.component(id).map_or("?", Component::name)
    }

    /// Look up a component by name.
    pub fn find(&self, name: &str) -> Option<CompId> {
        self.components
            .iter()
            .position(|c| c.name() == name)
            .map(CompId::from_usize)
    }

    pub fn resistor_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_resistor()).count()
    }

    pub fn junction_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_junction()).count()
    }

    /// The only resistor of a fully reduced network, if there is exactly one.
    pub fn sole_resistor(&self) -> Option<&Resistor> {
        let mut resistors = self.components.iter().filter_map(Component::as_resistor);
        let first = resistors.next()?;
        match resistors.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Overwrite the component at `id`, returning the previous occupant.
    pub fn replace(&mut self, id: CompId, component: Component) -> GraphResult<Component> {
        let slot = self.get_mut(id)?;
        Ok(std::mem::replace(slot, component))
    }

    /// Mark a junction as a port so reduction keeps it.
    pub fn pin(&mut self, id: CompId) -> GraphResult<()> {
        match self.get_mut(id)? {
            Component::Junction(j) => {
                j.port = true;
                Ok(())
            }
            Component::Resistor(r) => Err(GraphError::precond(
                "pin",
                &r.name,
                "only junctions can be ports",
            )),
        }
    }

    /// Mint the next synthesized name, e.g. `R+3` or `R|4`.
    pub fn mint_name(&mut self, op: char) -> String {
        let n = self.next_synth;
        self.next_synth += 1;
        format!("R{op}{n}")
    }
}
