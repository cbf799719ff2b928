//! CLI commands: canonicalize, render, mode, submit, feedback, config.
//!
//! Each runner writes plain text (or HTML/JSON) to stdout and returns errors to `main`.

use std::error::Error;
use std::fs;
use std::io;

use crate::core::app;
use crate::core::canonicalize::canonicalize;
use crate::core::config::Config;
use crate::core::feedback::{AnswerResult, render_feedback};
use crate::core::input_mode::{InputMode, load_input_mode, save_input_mode};
use crate::core::persistence::FilePreferenceStore;
use crate::core::render::{MathMlTypesetter, render};
use crate::core::submission::{
    AnswerInput, CheckAnswerRequest, PlacementAnswerRequest, check_answer_request,
    placement_answer_request,
};

type CommandResult = Result<(), Box<dyn Error>>;

/// Read a positional argument, or stdin when it is `-` or absent.
/// One trailing newline from stdin is dropped so it does not render as a line break.
fn read_input(arg: Option<&str>) -> io::Result<String> {
    match arg {
        Some(s) if s != "-" => Ok(s.to_string()),
        _ => {
            let mut buf = io::read_to_string(io::stdin())?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

fn preference_store(config: &Config) -> FilePreferenceStore {
    FilePreferenceStore::new(config.config_dir.clone())
}

pub fn run_canonicalize(input: Option<&str>) -> CommandResult {
    let raw = read_input(input)?;
    println!("{}", canonicalize(&raw));
    Ok(())
}

pub fn run_render(text: Option<&str>, display: bool) -> CommandResult {
    let text = read_input(text)?;
    println!("{}", render(&text, display, &MathMlTypesetter));
    Ok(())
}

/// Show the current mode, set it, or toggle it.
pub fn run_mode(config: &Config, mode: Option<InputMode>, toggle: bool) -> CommandResult {
    let mut store = preference_store(config);
    let current = load_input_mode(&store);
    let mode = if toggle {
        AnswerInput::new(current).toggle_mode(&mut store)?
    } else if let Some(mode) = mode {
        save_input_mode(&mut store, mode)?;
        mode
    } else {
        current
    };
    println!("{}", mode);
    Ok(())
}

/// Arguments of the `submit` command.
pub struct SubmitOptions<'a> {
    pub student: &'a str,
    pub session: Option<&'a str>,
    pub problem: &'a str,
    pub placement: bool,
    pub mode: Option<InputMode>,
    pub answer: Option<&'a str>,
}

/// Prepare the answer and print the request as pretty JSON.
pub fn run_submit(config: &Config, opts: SubmitOptions<'_>) -> CommandResult {
    let mode = opts
        .mode
        .unwrap_or_else(|| load_input_mode(&preference_store(config)));
    let raw = read_input(opts.answer)?;
    let input = AnswerInput::new(mode);
    log::debug!("Preparing answer in {} mode", input.mode());
    let answer = input.prepare(&raw)?;

    let request = match (opts.placement, opts.session) {
        (false, Some(session)) => check_answer_request(
            config,
            &CheckAnswerRequest {
                student_id: opts.student.to_string(),
                session_id: session.to_string(),
                problem_id: opts.problem.to_string(),
                answer,
            },
        )?,
        (false, None) => return Err("--session is required for practice answers".into()),
        (true, _) => placement_answer_request(
            config,
            &PlacementAnswerRequest {
                student_id: opts.student.to_string(),
                problem_id: opts.problem.to_string(),
                answer,
            },
        )?,
    };
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

pub fn run_feedback(file: Option<&str>) -> CommandResult {
    let json = match file {
        Some(path) if path != "-" => fs::read_to_string(path)?,
        _ => read_input(None)?,
    };
    let result: AnswerResult = serde_json::from_str(&json)?;
    print!("{}", render_feedback(&result, &MathMlTypesetter).to_html());
    Ok(())
}

pub fn run_config(config: &Config) {
    let store = preference_store(config);
    let prefs = store
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());

    println!("Version:      {} {}", app::NAME, app::VERSION);
    println!("Preferences:  {}", prefs);
    println!("API base:     {}", config.api_base);
    println!("Input mode:   {}", load_input_mode(&store));
}
