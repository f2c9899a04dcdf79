//! orbital-link: headless run of the fleet animator.
//!
//! Usage:
//!   orbital-link [--config <path.json>] [--ticks <n>] [--seed <n>]
//!
//! Logs a one-line fleet summary per simulated second and prints the final
//! snapshot as JSON on stdout. Log level comes from `ORBITAL_LOG`.

use std::env::{set_var, var};
use std::process;

use log::{error, info};

use orbital_app::animation_loop::{spawn_animation_loop_with, LoopOptions};
use orbital_app::config::load_config;
use orbital_sim::config::AnimatorConfig;
use orbital_sim::core::constants::TICK_RATE;

const LOG_VAR: &str = "ORBITAL_LOG";

/// Ten simulated seconds.
const DEFAULT_TICKS: u64 = 10 * TICK_RATE as u64;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    if var(LOG_VAR).is_err() {
        set_var(LOG_VAR, "INFO");
    }
    if pretty_env_logger::try_init_custom_env(LOG_VAR).is_err() {
        eprintln!("could not init logger");
    }

    let mut config = match parse_value(&args, "--config") {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                process::exit(1);
            }
        },
        None => AnimatorConfig::default(),
    };

    if let Some(seed) = parse_number(&args, "--seed") {
        config.seed = seed;
    }
    let ticks = parse_number(&args, "--ticks").unwrap_or(DEFAULT_TICKS);

    info!(
        "running {ticks} ticks, seed {}, viewport {}x{}",
        config.seed, config.viewport.width, config.viewport.height
    );

    let options = LoopOptions {
        max_ticks: Some(ticks),
        paced: true,
    };
    let handle = spawn_animation_loop_with(config, options, |snap| {
        if snap.clock.tick % TICK_RATE as u64 == 0 {
            let summary = &snap.summary;
            info!(
                "t={:>5.1}s rotation={:>7.1} satellites={} operational={} avg fuel={:.0}% avg health={:.0}%",
                snap.clock.elapsed_ms / 1000.0,
                snap.clock.rotation,
                summary.total,
                summary.operational,
                summary.average_fuel,
                summary.average_health,
            );
        }
    });
    let shared = handle.shared_snapshot();

    match handle.join() {
        Ok(stats) => info!("finished after {} ticks", stats.ticks),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }

    let Some(snapshot) = shared.latest() else {
        return;
    };
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!("could not serialize snapshot: {err}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "orbital-link: headless Orbital Link fleet animator

USAGE:
    orbital-link [--config <path.json>] [--ticks <n>] [--seed <n>]

OPTIONS:
    --config <path>   Animator config as JSON (missing fields take defaults)
    --ticks <n>       Number of 60Hz ticks to run (default {DEFAULT_TICKS})
    --seed <n>        Override the mock fleet seed

ENVIRONMENT:
    {LOG_VAR}       Log filter, e.g. debug (default info)"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number(args: &[String], flag: &str) -> Option<u64> {
    let value = parse_value(args, flag)?;
    match value.parse::<u64>() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("Error: {flag} expects a non-negative integer, got `{value}`");
            process::exit(1);
        }
    }
}
