//! Three-pass netlist loader.
//!
//! 1. declare: one symbol per line, duplicates and unknown kinds rejected
//! 2. resolve: symbol references become component handles
//! 3. back-wire: junctions gain the entries that resistors (or other
//!    junctions) declared toward them
//!
//! The result is checked against every graph invariant before it is returned.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use on_core::{CompId, ensure_nonnegative, ohms, parse_value};
use on_graph::{Component, Graph};
use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::lexer::{TokenLine, tokenize};

/// Reserved junction symbols marking the network's external terminals.
pub const PORT_SYMBOLS: [&str; 2] = ["IN", "OUT"];

/// Characters only synthesized resistor names (`R+3`, `R|4`) may contain.
pub const RESERVED_CHARS: [char; 2] = ['+', '|'];

#[derive(Debug, Clone, Copy)]
enum DeclKind {
    Junction { port: bool },
    Resistor { ohms: f64 },
}

#[derive(Debug)]
struct Decl {
    line: usize,
    symbol: String,
    kind: DeclKind,
    refs: Vec<String>,
}

/// Read and load a netlist file.
pub fn load_file(path: &Path) -> LoadResult<Graph> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&text)
}

/// Load a netlist from text.
pub fn load_str(input: &str) -> LoadResult<Graph> {
    let decls = declare(tokenize(input))?;
    let mut components = resolve(&decls)?;
    back_wire(&mut components)?;

    let graph = Graph::from_components(components)?;
    debug!(
        components = graph.len(),
        resistors = graph.resistor_count(),
        "netlist loaded"
    );
    Ok(graph)
}

fn declare(lines: impl Iterator<Item = TokenLine>) -> LoadResult<Vec<Decl>> {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut decls = Vec::new();

    for tl in lines {
        let symbol = tl.symbol();
        if let Some(ch) = symbol.chars().find(|c| RESERVED_CHARS.contains(c)) {
            return Err(LoadError::ReservedSymbol {
                line: tl.line,
                symbol: symbol.to_string(),
                ch,
            });
        }
        if let Some(&first_line) = first_seen.get(symbol) {
            return Err(LoadError::DuplicateSymbol {
                line: tl.line,
                symbol: symbol.to_string(),
                first_line,
            });
        }
        first_seen.insert(symbol.to_string(), tl.line);
        decls.push(parse_decl(&tl)?);
    }

    debug!(symbols = decls.len(), "declared symbols");
    Ok(decls)
}

fn parse_decl(tl: &TokenLine) -> LoadResult<Decl> {
    let symbol = tl.symbol();
    let args = tl.args();

    let (kind, refs) = if PORT_SYMBOLS.iter().any(|p| *p == symbol) {
        (DeclKind::Junction { port: true }, args.to_vec())
    } else if symbol.starts_with('R') {
        let field = |idx: usize, what: &'static str| {
            args.get(idx).ok_or_else(|| LoadError::MissingField {
                line: tl.line,
                symbol: symbol.to_string(),
                field: what,
            })
        };
        let value = field(0, "resistance")?;
        let a = field(1, "first terminal")?;
        let b = field(2, "second terminal")?;
        if let Some(extra) = args.get(3) {
            return Err(LoadError::UnexpectedToken {
                line: tl.line,
                symbol: symbol.to_string(),
                token: extra.clone(),
            });
        }
        let ohms = parse_value(value)
            .and_then(|v| ensure_nonnegative(v, "resistance").ok())
            .ok_or_else(|| LoadError::InvalidValue {
                line: tl.line,
                symbol: symbol.to_string(),
                field: "resistance",
                value: value.clone(),
            })?;
        (DeclKind::Resistor { ohms }, vec![a.clone(), b.clone()])
    } else if symbol.starts_with('J') {
        (DeclKind::Junction { port: false }, args.to_vec())
    } else {
        return Err(LoadError::UnknownKind {
            line: tl.line,
            symbol: symbol.to_string(),
        });
    };

    Ok(Decl {
        line: tl.line,
        symbol: symbol.to_string(),
        kind,
        refs,
    })
}

fn resolve(decls: &[Decl]) -> LoadResult<Vec<Component>> {
    let index: HashMap<&str, CompId> = decls
        .iter()
        .enumerate()
        .map(|(i, d)| (d.symbol.as_str(), CompId::from_usize(i)))
        .collect();

    let mut components = Vec::with_capacity(decls.len());
    for (i, decl) in decls.iter().enumerate() {
        let mut adjacent = Vec::with_capacity(decl.refs.len());
        for target in &decl.refs {
            let id = *index
                .get(target.as_str())
                .ok_or_else(|| LoadError::UndeclaredSymbol {
                    line: decl.line,
                    symbol: decl.symbol.clone(),
                    target: target.clone(),
                })?;
            if id.usize() == i {
                return Err(LoadError::SelfReference {
                    line: decl.line,
                    symbol: decl.symbol.clone(),
                });
            }
            adjacent.push(id);
        }

        let name = decl.symbol.clone();
        components.push(match decl.kind {
            DeclKind::Junction { port: true } => Component::port(name, adjacent),
            DeclKind::Junction { port: false } => Component::junction(name, adjacent),
            DeclKind::Resistor { ohms: value } => {
                Component::resistor(name, ohms(value), [adjacent[0], adjacent[1]])
            }
        });
    }
    Ok(components)
}

/// Make adjacency symmetric by adding the entries junctions are missing.
///
/// Only junction lists can grow. A junction that lists a resistor more often
/// than the resistor names it, or a one-sided resistor-to-resistor link, is
/// an error.
fn back_wire(components: &mut [Component]) -> LoadResult<()> {
    let mut counts: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for (i, comp) in components.iter().enumerate() {
        for &target in comp.adjacencies() {
            *counts.entry((i, target.usize())).or_default() += 1;
        }
    }

    let mut added = 0usize;
    for (&(from, to), &forward) in &counts {
        let backward = counts.get(&(to, from)).copied().unwrap_or(0);
        if backward >= forward {
            continue;
        }
        if !components[to].is_junction() {
            return Err(LoadError::Asymmetric {
                from: components[from].name().to_string(),
                to: components[to].name().to_string(),
            });
        }
        for _ in backward..forward {
            components[to].add_adjacency(CompId::from_usize(from))?;
            added += 1;
        }
    }

    debug!(added, "back-wired junction entries");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use on_core::as_ohms;

    #[test]
    fn loads_series_chain_with_back_wiring() {
        let graph = load_str(
            "JA\n\
             R1 2 JA R2\n\
             R2 3 R1 R3\n\
             R3 5 R2 JB\n\
             JB\n",
        )
        .unwrap();

        assert_eq!(graph.len(), 5);
        let ja = graph.find("JA").unwrap();
        let r1 = graph.find("R1").unwrap();
        let r3 = graph.find("R3").unwrap();
        let jb = graph.find("JB").unwrap();
        assert_eq!(graph.get(ja).unwrap().adjacencies(), &[r1]);
        assert_eq!(graph.get(jb).unwrap().adjacencies(), &[r3]);
        assert_eq!(as_ohms(graph.resistor(r3).unwrap().resistance), 5.0);
    }

    #[test]
    fn explicit_junction_entries_are_not_doubled() {
        let graph = load_str("J1 R1\nR1 1 J1 J2\nJ2\n").unwrap();
        let j1 = graph.find("J1").unwrap();
        assert_eq!(graph.get(j1).unwrap().adjacencies().len(), 1);
    }

    #[test]
    fn junction_links_become_mutual() {
        let graph = load_str("J1 J2\nJ2\n").unwrap();
        let j1 = graph.find("J1").unwrap();
        let j2 = graph.find("J2").unwrap();
        assert_eq!(graph.get(j2).unwrap().adjacencies(), &[j1]);
    }

    #[test]
    fn ports_and_suffixes() {
        let graph = load_str("IN\nOUT\nR1 4.7k IN OUT\n").unwrap();
        let input = graph.find("IN").unwrap();
        assert!(graph.get(input).unwrap().as_junction().unwrap().port);
        let r1 = graph.find("R1").unwrap();
        assert!((as_ohms(graph.resistor(r1).unwrap().resistance) - 4700.0).abs() < 1e-9);
    }

    #[test]
    fn shorted_resistor_is_listed_twice() {
        let graph = load_str("J1\nR1 1 J1 J1\n").unwrap();
        let j1 = graph.find("J1").unwrap();
        assert_eq!(graph.get(j1).unwrap().adjacencies().len(), 2);
    }

    #[test]
    fn rejects_duplicate_symbol() {
        let err = load_str("J1\nR1 1 J1 J1\nJ1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::DuplicateSymbol {
                line: 3,
                first_line: 1,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = load_str("C1 1 A B\n").unwrap_err();
        assert!(matches!(err, LoadError::UnknownKind { .. }));
    }

    #[test]
    fn rejects_missing_and_invalid_fields() {
        assert!(matches!(
            load_str("J1\nR1 1 J1\n").unwrap_err(),
            LoadError::MissingField {
                field: "second terminal",
                ..
            }
        ));
        assert!(matches!(
            load_str("J1\nR1 lots J1 J1\n").unwrap_err(),
            LoadError::InvalidValue { .. }
        ));
        assert!(matches!(
            load_str("J1\nR1 -4 J1 J1\n").unwrap_err(),
            LoadError::InvalidValue { .. }
        ));
        assert!(matches!(
            load_str("J1\nR1 4 J1 J1 J1\n").unwrap_err(),
            LoadError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn rejects_undeclared_and_self_reference() {
        assert!(matches!(
            load_str("R1 1 J1 J2\nJ1\n").unwrap_err(),
            LoadError::UndeclaredSymbol { ref target, .. } if target == "J2"
        ));
        assert!(matches!(
            load_str("J1\nR1 1 J1 R1\n").unwrap_err(),
            LoadError::SelfReference { .. }
        ));
    }

    #[test]
    fn rejects_reserved_characters() {
        assert!(matches!(
            load_str("R+1 1 J1 J1\nJ1\n").unwrap_err(),
            LoadError::ReservedSymbol { ch: '+', .. }
        ));
    }

    #[test]
    fn rejects_one_sided_links() {
        // J1 claims R1, but R1 is wired elsewhere
        assert!(matches!(
            load_str("J1 R1\nJ2\nR1 1 J2 J2\n").unwrap_err(),
            LoadError::Asymmetric { .. }
        ));
        // R1 -> R2 with no link back
        assert!(matches!(
            load_str("J1\nR1 1 J1 R2\nR2 1 J1 J1\n").unwrap_err(),
            LoadError::Asymmetric { .. }
        ));
    }
}
