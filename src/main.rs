//! Checkerboard -- a draughts board service over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Log output goes to stderr.
//!
//! Usage:
//!   checkerboard [--config FILE] [--size N] [--log-level LEVEL]

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use log::{error, info};

use checkerboard::config::{load_config, EngineConfig};
use checkerboard::engine::Engine;
use checkerboard::logger::{self, LevelFilter};
use checkerboard::protocol::parser::{parse_command, Command};

fn print_usage() {
    eprintln!("Usage: checkerboard [--config FILE] [--size N] [--log-level LEVEL]");
}

/// Builds the configuration from the optional config file and flags.
/// Flags override values read from the file.
fn parse_args(args: &[String]) -> Result<EngineConfig, String> {
    let mut config = EngineConfig::default();
    let mut size: Option<usize> = None;
    let mut level: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--config", Some(path)) => {
                config = load_config(Path::new(path)).map_err(|e| e.to_string())?;
                i += 1;
            }
            ("--size", Some(v)) => {
                size = Some(v.parse().map_err(|_| format!("invalid --size value: '{}'", v))?);
                i += 1;
            }
            ("--log-level", Some(v)) => {
                level = Some(v.clone());
                i += 1;
            }
            ("--help", _) | ("-h", _) => {
                print_usage();
                process::exit(0);
            }
            (other, _) => return Err(format!("unknown or incomplete argument: {}", other)),
        }
        i += 1;
    }

    if let Some(size) = size {
        config.board_size = size;
    }
    if let Some(level) = level {
        config.log_level = level;
    }
    Ok(config)
}

/// Runs the main command loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            process::exit(1);
        }
    };

    let level = match config.level_filter() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}; falling back to info", e);
            LevelFilter::Info
        }
    };
    if let Err(e) = logger::init(level) {
        eprintln!("failed to init logger: {}", e);
    }
    info!("checkerboard starting, board size {}", config.board_size);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new(config);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        if cmd == Command::Quit {
            break;
        }

        if let Err(e) = engine.execute(cmd, &mut out) {
            error!("failed to write response: {}", e);
            break;
        }
    }

    let _ = out.flush();
}
