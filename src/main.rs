mod config;
mod domain;
mod engine;
mod ingestion;
mod output;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, engine::Engine, ingestion::LineReader, output::ConsoleOutput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging();

    // Set up the components
    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let input = LineReader::new(reader);
    let output = ConsoleOutput::new(io::stdout().lock(), config.currency);

    let mut engine = Engine::new(input, output);
    let mut customer = engine.open_session(config.name, config.customer_id)?;
    engine.process(&mut customer)?;

    Ok(())
}

/// Logs go to stderr so stdout carries only the dialogue. `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}
