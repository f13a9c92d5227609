//! gravity-trace: run a headless gravity simulation and print snapshots.
//!
//! Usage:
//!   gravity-trace run --scenario two-wells --ticks 600 --every 10
//!   gravity-trace run --scenario random:30 --seed 7 --config sim.json
//!   gravity-trace config > sim.json

use std::path::Path;
use std::process;

use log::info;

use gravity_core::commands::SimCommand;
use gravity_core::enums::ScenarioId;
use gravity_sim::{GravitySimulation, SimConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "config" => cmd_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "gravity-trace: headless gravity influence tracer\n\
         \n\
         Commands:\n\
         \n\
         run       Run a scenario and print one JSON snapshot per line\n\
         \n\
           --scenario <name>  two-wells | corridor | random:N (default: two-wells)\n\
           --ticks <N>        Ticks to run (default: 600)\n\
           --seed <N>         RNG seed (default: from config, else 42)\n\
           --every <N>        Print every Nth snapshot (default: 1)\n\
           --config <path>    JSON simulation config to start from\n\
         \n\
         config    Print the default simulation config as JSON\n\
         \n\
         Set RUST_LOG=debug to see selection and transition logs on stderr.\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number(args: &[String], flag: &str, default: u64) -> u64 {
    match flag_value(args, flag) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a non-negative integer, got '{raw}'");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn parse_scenario(raw: &str) -> Option<ScenarioId> {
    match raw {
        "two-wells" => Some(ScenarioId::TwoWells),
        "corridor" => Some(ScenarioId::Corridor),
        _ => {
            let count = raw.strip_prefix("random:")?.parse::<u32>().ok()?;
            Some(ScenarioId::RandomField { count })
        }
    }
}

fn load_config(path: &Path) -> SimConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let mut config = match flag_value(args, "--config") {
        Some(path) => load_config(Path::new(path)),
        None => SimConfig::default(),
    };

    if let Some(raw) = flag_value(args, "--scenario") {
        config.scenario = match parse_scenario(raw) {
            Some(s) => s,
            None => {
                eprintln!("Error: unknown scenario '{raw}'");
                process::exit(1);
            }
        };
    }
    config.seed = parse_number(args, "--seed", config.seed);
    let ticks = parse_number(args, "--ticks", 600);
    let every = parse_number(args, "--every", 1).max(1);

    let mut sim = match GravitySimulation::new(config.clone()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: invalid configuration: {e}");
            process::exit(1);
        }
    };
    info!(
        "tracing {:?} for {ticks} ticks (seed {})",
        config.scenario, config.seed
    );
    sim.queue_command(SimCommand::Start);

    for n in 0..ticks {
        let snapshot = sim.tick();
        // Transition ticks are always printed.
        if n % every != 0 && snapshot.transitions.is_empty() {
            continue;
        }
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    }
}

// --- Config command ---

fn cmd_config() {
    match serde_json::to_string_pretty(&SimConfig::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            process::exit(1);
        }
    }
}
