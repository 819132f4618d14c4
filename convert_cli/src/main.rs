//! # Unit Converter CLI
//!
//! Terminal front end for `convert_core`. Runs a single conversion from the
//! command line, or an interactive session with unit selection, swap and a
//! recent-conversions log.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use convert_core::{categories, convert, units, ConvertError, ConvertResult, Session, Settings};
use tracing::debug;

mod interactive;

/// Convert values between units of length, weight, temperature and more
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available categories
    Categories,
    /// List the units of a category
    Units {
        category: String,
    },
    /// Convert a single value
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Unit to convert from
        from: String,
        /// Unit to convert to
        to: String,
        /// Category both units belong to
        #[arg(short = 'k', long)]
        category: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive session (the default)
    Interactive,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            report_error(&e, false);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.command.unwrap_or(Command::Interactive) {
        Command::Categories => {
            for name in categories() {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Units { category } => print_units(&category),
        Command::Convert { value, from, to, category, json } => {
            return run_convert(value, &from, &to, &category, json, &settings);
        }
        Command::Interactive => run_interactive(&settings),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, false);
            ExitCode::FAILURE
        }
    }
}

fn load_settings(path: Option<&std::path::Path>) -> ConvertResult<Settings> {
    match path {
        Some(path) => Settings::load(path),
        None => {
            debug!("no config file given, using default settings");
            Ok(Settings::default())
        }
    }
}

fn print_units(category: &str) -> ConvertResult<()> {
    for name in units(category)? {
        println!("{}", name);
    }
    Ok(())
}

fn run_convert(value: f64, from: &str, to: &str, category: &str, json: bool, settings: &Settings) -> ExitCode {
    match convert(value, from, to, category) {
        Ok(result) => {
            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        report_error(&ConvertError::serialization(e.to_string()), false);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!(
                    "{} {} = {:.prec$} {}",
                    result.value,
                    result.from_unit,
                    result.result,
                    result.to_unit,
                    prec = settings.display_precision
                );
                println!("{}", result.explanation);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(settings: &Settings) -> ConvertResult<()> {
    let mut session = Session::new(settings)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Unit Converter - Interactive Session");
    println!("====================================");
    println!("Type 'help' for commands, 'quit' to exit.");
    println!();

    loop {
        print!(
            "[{}: {} -> {}] > ",
            session.category(),
            session.from_unit(),
            session.to_unit()
        );
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let command = interactive::parse_line(&line);
        if !interactive::execute(command, &mut session, settings, &mut stdout) {
            break;
        }
    }
    Ok(())
}

fn report_error(error: &ConvertError, json: bool) {
    eprintln!("Error: {}", error);
    if json {
        if let Ok(text) = serde_json::to_string_pretty(error) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", text);
        }
    }
}
