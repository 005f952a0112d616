mod config;
mod error;

use clap::{CommandFactory, Parser};
use on_core::{as_ohms, format_value};
use on_graph::Graph;
use on_reduce::{Outcome, ReduceOptions, reduce};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "ohmnet")]
#[command(about = "ohmnet - Resistor network reduction tool", long_about = None)]
struct Cli {
    /// Path to the netlist file
    netlist: Option<PathBuf>,
    /// YAML file with reduction options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop after this many rounds (overrides the config file)
    #[arg(long)]
    max_rounds: Option<usize>,
    /// Skip the invariant check after each pass
    #[arg(long)]
    no_check: bool,
    /// Keep this junction as a network terminal (repeatable)
    #[arg(long = "port", value_name = "NAME")]
    ports: Vec<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(netlist) = cli.netlist.as_deref() else {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    match run(&cli, netlist) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, netlist: &Path) -> CliResult<()> {
    let mut options = match &cli.config {
        Some(path) => config::load_options(path)?,
        None => ReduceOptions::default(),
    };
    if cli.max_rounds.is_some() {
        options.max_rounds = cli.max_rounds;
    }
    if cli.no_check {
        options.check_invariants = false;
    }
    debug!(?options, "reduction options");

    let mut graph = on_netlist::load_file(netlist)?;
    pin_ports(&mut graph, &cli.ports)?;
    println!("Loaded {} ({} components):", netlist.display(), graph.len());
    print!("{graph}");

    let reduction = reduce(&graph, &options)?;
    println!();
    println!("Reduced ({} components):", reduction.graph.len());
    print!("{}", reduction.graph);
    println!();
    println!("{}", reduction.report);

    print_equivalent(&reduction.graph);
    if reduction.report.outcome == Outcome::RoundLimit {
        println!("  (round limit reached; further reduction may be possible)");
    }
    Ok(())
}

fn pin_ports(graph: &mut Graph, names: &[String]) -> CliResult<()> {
    for name in names {
        let id = graph
            .find(name)
            .ok_or_else(|| CliError::UnknownPort { name: name.clone() })?;
        graph.pin(id)?;
        debug!(port = %name, "pinned");
    }
    Ok(())
}

fn print_equivalent(graph: &Graph) {
    match graph.sole_resistor() {
        Some(r) => println!(
            "Equivalent resistance {} - {}: {}ohm",
            graph.name_of(r.terminal1()),
            graph.name_of(r.terminal2()),
            format_value(as_ohms(r.resistance))
        ),
        None => println!(
            "Not fully reduced: {} resistors remain",
            graph.resistor_count()
        ),
    }
}
