//! Draw odds simulator CLI.
//!
//! Run Monte Carlo simulations of player sessions to check odds and pacing.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # Default: 1000 HOHOYKS runs
//!   cargo run --bin simulate -- -p klenko -d 80      # Klenko into hell mode
//!   cargo run --bin simulate -- --seed 42            # Reproducible run

use giftspin::profiles::PlayerProfile;
use giftspin::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GIFTSPIN ODDS SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Profile:        {}", config.profile.nickname());
    println!("  Runs:           {}", config.num_runs);
    println!("  Draws per Run:  {}", config.draws_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            std::process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}_{}.json",
            config.profile.id(),
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--profile" => {
                if i + 1 < args.len() {
                    match PlayerProfile::from_nickname(&args[i + 1]) {
                        Ok(profile) => config.profile = profile,
                        Err(e) => {
                            eprintln!("{e}");
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-d" | "--draws" => {
                if i + 1 < args.len() {
                    config.draws_per_run = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick(config.profile);
            }
            "--hell" => {
                config = SimConfig::hell_run();
            }
            "--marathon" => {
                config = SimConfig::marathon();
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Giftspin Odds Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -p, --profile <NAME>  Player nickname (default: HOHOYKS)");
    println!("    -n, --runs <N>        Number of simulated sessions (default: 1000)");
    println!("    -d, --draws <D>       Draws attempted per session (default: 60)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -v, --verbose         Print every run");
    println!("    -q, --quiet           Skip the text report");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick check (100 runs of the chosen profile)");
    println!("    --hell                Klenko sessions past the overdraft");
    println!("    --marathon            Long Moroz sessions");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                        # Default run");
    println!("    cargo run --bin simulate -- -p snegurka -n 50  # Capped profile");
    println!("    cargo run --bin simulate -- --seed 42          # Reproducible");
    println!("    cargo run --bin simulate -- --hell --json      # Hell mode with JSON");
}
