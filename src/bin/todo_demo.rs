//! Seeds a to-do list, processes every entry concurrently and prints stats.
//!
//! Run with: cargo run --bin todo_demo [config.toml]
//! Set RUST_LOG=debug to see task lifecycle logging on stderr.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use todo_fanout::{run, DemoConfig, DemoError};

fn load_config() -> Result<DemoConfig, DemoError> {
    match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            DemoConfig::load(&path)
        }
        None => Ok(DemoConfig::default()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out).await {
        Ok(summary) => {
            log::debug!("run finished: {:?}", summary.stats);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
