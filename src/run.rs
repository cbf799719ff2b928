//! Application run modes: logger init and subcommand dispatch.

use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args, Commands};
use crate::core;
use crate::core::cli::SubmitOptions;
use crate::core::config::Config;

/// Initialize env_logger on stderr so stdout stays clean for command output.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run the selected subcommand.
pub fn dispatch(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match &args.command {
        Commands::Canonicalize { input } => core::cli::run_canonicalize(input.as_deref()),
        Commands::Render { text, display } => core::cli::run_render(text.as_deref(), *display),
        Commands::Mode { mode, toggle } => core::cli::run_mode(config, *mode, *toggle),
        Commands::Submit {
            student,
            session,
            problem,
            placement,
            mode,
            answer,
        } => core::cli::run_submit(
            config,
            SubmitOptions {
                student,
                session: session.as_deref(),
                problem,
                placement: *placement,
                mode: *mode,
                answer: answer.as_deref(),
            },
        ),
        Commands::Feedback { file } => core::cli::run_feedback(file.as_deref()),
        Commands::Config => {
            core::cli::run_config(config);
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut io::stdout());
            Ok(())
        }
    }
}
