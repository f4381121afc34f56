//! Camel race odds CLI.
//!
//! Usage:
//!   camel-odds [OPTIONS]
//!
//! Examples:
//!   camel-odds                          # 10000 races from the standard opening
//!   camel-odds -n 50000 -b board.json   # custom board
//!   camel-odds --seed 42 --sequential   # reproducible run

use camel_odds::board::{standard_opening, GameState};
use camel_odds::build_info;
use camel_odds::simulator::{play_race, rounds_to_json, simulate, RandomDice, SimConfig};
use camel_odds::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

struct CliOptions {
    config: SimConfig,
    board_path: Option<PathBuf>,
    write_json: bool,
    colored: bool,
    trace_run: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            board_path: None,
            write_json: false,
            colored: true,
            trace_run: false,
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Run 'camel-odds --help' for usage.");
            std::process::exit(1);
        }
    };

    let default_filter = if options.config.verbosity >= 2 {
        "debug"
    } else {
        "warn"
    };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();

    if let Err(e) = run(&options) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(options: &CliOptions) -> Result<()> {
    let initial = match &options.board_path {
        Some(path) => GameState::load(path)?,
        None => standard_opening(),
    };

    if options.trace_run {
        let rng = match options.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut dice = RandomDice::new(rng);
        let rounds = play_race(&initial, &mut dice, options.config.max_legs)?;
        println!("{}", rounds_to_json(&rounds));
        return Ok(());
    }

    let output = simulate(&initial, &options.config)?;
    println!("{}", output.to_text(options.colored));

    if options.write_json {
        let filename = format!(
            "odds_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, output.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> std::result::Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--iterations" => {
                i += 1;
                options.config.iterations = parse_value(args, i, "--iterations")?;
            }
            "-s" | "--seed" => {
                i += 1;
                options.config.seed = Some(parse_value(args, i, "--seed")?);
            }
            "-b" | "--board" => {
                i += 1;
                let path = args.get(i).ok_or("--board requires a file path")?;
                options.board_path = Some(PathBuf::from(path));
            }
            "--sequential" => options.config.parallel = false,
            "--json" => options.write_json = true,
            "--no-color" => options.colored = false,
            "--trace-run" => options.trace_run = true,
            "-v" | "--verbose" => options.config.verbosity = 2,
            "--version" => {
                println!(
                    "camel-odds {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(options)
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: usize,
    flag: &str,
) -> std::result::Result<T, String> {
    args.get(i)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("{flag} requires a number"))
}

fn print_usage() {
    println!(
        "Camel Odds - Monte Carlo race predictor\n\
         \n\
         Usage: camel-odds [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -n, --iterations N  Races to simulate (default: 10000)\n\
         \x20 -s, --seed N        RNG seed for reproducible runs\n\
         \x20 -b, --board FILE    Load the board from a JSON file\n\
         \x20 --sequential        Run on a single thread\n\
         \x20 --json              Also write a JSON report\n\
         \x20 --no-color          Plain text output\n\
         \x20 --trace-run         Print one race leg by leg as JSON\n\
         \x20 -v, --verbose       Debug logging\n\
         \x20 --version           Show version information\n\
         \x20 -h, --help          Show this help message"
    );
}
