//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::input_mode::InputMode;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  math-tutor canonicalize '\\dfrac{3}{4}'        Print the answer the backend will grade
  echo '\\sqrt{16}' | math-tutor canonicalize    Read markup from stdin
  math-tutor render 'Compute $\\frac{1}{2}$'    Render mixed text to HTML
  math-tutor mode text                          Switch answer entry to plain text
  math-tutor submit --student s1 --session x --problem p3 '\\log_{2}8'
  math-tutor feedback result.json               Render a grading response
  math-tutor completions bash                   Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Math answer canonicalization and math-text rendering for the tutoring client",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert math-editor markup into the plain-text answer dialect
    Canonicalize {
        /// Markup to convert ('-' or omitted reads stdin)
        input: Option<String>,
    },
    /// Render text with embedded math to HTML
    Render {
        /// Text to render ('-' or omitted reads stdin)
        text: Option<String>,
        /// Typeset delimiter-free math in display mode
        #[arg(long)]
        display: bool,
    },
    /// Show or change the persisted answer input mode
    Mode {
        /// New mode: math or text
        mode: Option<InputMode>,
        /// Switch to the other mode
        #[arg(long, conflicts_with = "mode")]
        toggle: bool,
    },
    /// Prepare an answer and print the request that would submit it
    Submit {
        #[arg(long)]
        student: String,
        /// Practice session ID (not used for placement answers)
        #[arg(long, required_unless_present = "placement")]
        session: Option<String>,
        #[arg(long)]
        problem: String,
        /// Submit as a placement-test answer
        #[arg(long)]
        placement: bool,
        /// Override the persisted input mode for this answer
        #[arg(long)]
        mode: Option<InputMode>,
        /// Raw answer ('-' or omitted reads stdin)
        answer: Option<String>,
    },
    /// Render a grading response (JSON) as an HTML feedback panel
    Feedback {
        /// JSON file ('-' or omitted reads stdin)
        file: Option<String>,
    },
    /// Show config paths, API base, and input mode
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
