mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use minisharp_checker::TypeError;
use minisharp_interpreter::{Evaluation, Value};
use minisharp_lexer::Lexer;
use minisharp_syntax::ast::Program;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::{render_error, render_fault, render_type_error};

#[derive(Parser, Debug)]
#[command(name = "minisharp", version, about = "Run a Minisharp program")]
struct Cli {
    /// Program source file
    file: PathBuf,

    /// Arguments bound to the program's parameters, in order
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Print the syntax tree before running
    #[arg(long, env = "MINISHARP_TREE")]
    tree: bool,

    /// Type check only; do not run the program
    #[arg(long)]
    check: bool,

    /// Refuse to run a program with type errors
    #[arg(long, env = "MINISHARP_STRICT")]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, env = "MINISHARP_FORMAT")]
    format: Format,

    /// Raise log verbosity (-v, -vv, -vvv); MINISHARP_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Machine-readable outcome for `--format json`.
#[derive(Serialize)]
struct Report<'a> {
    result: Option<&'a Value>,
    type_errors: Vec<String>,
    faults: Vec<String>,
}

impl<'a> Report<'a> {
    fn new(type_errors: &[TypeError], evaluation: Option<&'a Evaluation>) -> Self {
        Self {
            result: evaluation.and_then(|e| e.result.as_ref()),
            type_errors: type_errors.iter().map(ToString::to_string).collect(),
            faults: evaluation
                .map(|e| e.faults.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

fn init_logging(verbose: u8) {
    // Diagnostics are rendered by the driver; logging stays quiet unless asked.
    let default = match verbose {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("MINISHARP_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reads, lexes and parses `path`. Failures are rendered here.
fn load(path: &Path) -> Option<Program> {
    let src = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{}: {}",
                "error".red().bold(),
                format!("Failed to read {}: {}", path.display(), e).red()
            );
            return None;
        }
    };
    let tokens = match Lexer::new(&src).tokenize() {
        Ok(t) => t,
        Err(e) => {
            render_error("Lex error", &src, &e);
            return None;
        }
    };
    match minisharp_parser::Parser::new(tokens).parse_program() {
        Ok(program) => Some(program),
        Err(e) => {
            render_error("Parse error", &src, &e);
            None
        }
    }
}

fn emit(format: Format, type_errors: &[TypeError], evaluation: Option<&Evaluation>) {
    match format {
        Format::Json => {
            let report = Report::new(type_errors, evaluation);
            match serde_json::to_string(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("{}: {}", "error".red().bold(), e),
            }
        }
        Format::Text => {
            type_errors.iter().for_each(render_type_error);
            if let Some(evaluation) = evaluation {
                evaluation.faults.iter().for_each(render_fault);
                if let Some(result) = &evaluation.result {
                    println!("{}", result);
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(program) = load(&cli.file) else {
        return ExitCode::FAILURE;
    };
    if cli.tree {
        println!("{}", program);
    }

    let type_errors = minisharp_checker::check(&program);
    debug!(errors = type_errors.len(), "checked {}", cli.file.display());
    let rejected = cli.strict && !type_errors.is_empty();

    if cli.check || rejected {
        emit(cli.format, &type_errors, None);
        return if rejected {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    let evaluation = minisharp_interpreter::eval(&program, &cli.args);
    emit(cli.format, &type_errors, Some(&evaluation));
    ExitCode::SUCCESS
}
