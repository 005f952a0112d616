//! Line-per-component rendering for diagnostics.

use std::fmt;

use on_core::{as_ohms, format_value};

use crate::graph::{Component, Graph};

impl fmt::Display for Graph {
    /// One line per component: handle, name, kind, resistance, neighbours.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .components
            .iter()
            .map(|c| c.name().len())
            .max()
            .unwrap_or(0);

        for (id, comp) in self.ids().zip(&self.components) {
            let (kind, value) = match comp {
                Component::Junction(j) if j.port => ("port", String::new()),
                Component::Junction(_) => ("junction", String::new()),
                Component::Resistor(r) => {
                    ("resistor", format!("{}ohm", format_value(as_ohms(r.resistance))))
                }
            };
            let neighbours: Vec<&str> = comp
                .adjacencies()
                .iter()
                .map(|&a| self.name_of(a))
                .collect();
            writeln!(
                f,
                "{:>5} {:<width$} {:<8} {:>10}  -> {}",
                id.to_string(),
                comp.name(),
                kind,
                value,
                neighbours.join(", "),
            )?;
        }
        Ok(())
    }
}
