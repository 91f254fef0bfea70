//! hmw CLI: Hindley-Milner type inference for a small lambda calculus.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hmw::diagnostics::print_error;
use hmw::driver::check_source;
use hmw::infer::{InferOptions, LetPolicy};

/// Infer the most general type of every statement in a program.
///
/// A program is a `;`-separated list of expressions and top-level
/// definitions (`let name = expr`). Definitions are generalized and can be
/// used by the statements that follow.
#[derive(ClapParser, Debug)]
#[command(name = "hmw")]
#[command(author, version, about)]
struct Cli {
    /// Source file, or `-` to read from stdin
    file: PathBuf,

    /// Do not generalize `let ... in` bindings inside expressions
    #[arg(long)]
    mono_let: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error setting up logging: {}", e);
        return ExitCode::from(1);
    }

    let (source, filename) = if cli.file.as_os_str() == "-" {
        let mut source = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::from(1);
        }
        (source, "<stdin>".to_string())
    } else {
        let filename = cli.file.display().to_string();
        match fs::read_to_string(&cli.file) {
            Ok(source) => (source, filename),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", filename, e);
                return ExitCode::from(1);
            }
        }
    };

    let let_policy = if cli.mono_let {
        LetPolicy::Monomorphic
    } else {
        LetPolicy::Generalize
    };
    let options = InferOptions::default().with_let_policy(let_policy);

    match check_source(options, &source) {
        Ok(judgements) => {
            for judgement in judgements {
                println!("{}", judgement);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            print_error(&filename, &source, &error);
            ExitCode::from(1)
        }
    }
}
