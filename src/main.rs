//! # math-tutor
//!
//! Client-side core of the adaptive math tutor:
//! - answer canonicalization from math-editor markup to the backend's plain-text dialect
//! - rendering of mixed prose/math text to display-safe HTML
//! - the persisted answer input mode and the answer-submission request contract

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    let config = core::config::load();

    if let Err(e) = run::dispatch(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
