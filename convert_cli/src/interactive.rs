//! Interactive session commands.
//!
//! Each input line parses to a [`SessionCommand`]; [`execute`] applies it to
//! the session and writes any output. Input problems (empty or malformed
//! numbers, unknown names) are reported and the loop continues.

use std::io::Write;

use convert_core::{categories, ConvertError, Session, Settings};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Help,
    Quit,
    Categories,
    Units,
    Category(String),
    From(String),
    To(String),
    Swap,
    Convert(f64),
    History,
    Clear,
    /// Input that should have been a number but wasn't
    MissingValue,
    Unknown(String),
    Empty,
}

const HELP: &str = "\
Commands:
  categories          list categories
  units               list units of the current category
  category <name>     switch category
  from <unit>         set the unit to convert from
  to <unit>           set the unit to convert to
  swap                exchange from and to
  <number>            convert a value (also: convert <number>)
  history             show recent conversions
  clear               clear the history
  help                show this message
  quit                leave the session";

/// Parse one line of user input.
pub fn parse_line(line: &str) -> SessionCommand {
    let line = line.trim();
    if line.is_empty() {
        return SessionCommand::Empty;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        "categories" => SessionCommand::Categories,
        "units" => SessionCommand::Units,
        "swap" => SessionCommand::Swap,
        "history" => SessionCommand::History,
        "clear" => SessionCommand::Clear,
        "category" => SessionCommand::Category(rest.to_string()),
        "from" => SessionCommand::From(rest.to_string()),
        "to" => SessionCommand::To(rest.to_string()),
        "convert" => parse_value(rest),
        _ => match line.parse::<f64>() {
            Ok(value) => SessionCommand::Convert(value),
            Err(_) => SessionCommand::Unknown(line.to_string()),
        },
    }
}

fn parse_value(text: &str) -> SessionCommand {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => SessionCommand::Convert(value),
        _ => SessionCommand::MissingValue,
    }
}

/// Apply `command` to `session`. Returns `false` when the session should end.
pub fn execute<W: Write>(command: SessionCommand, session: &mut Session, settings: &Settings, out: &mut W) -> bool {
    let written = match command {
        SessionCommand::Quit => return false,
        SessionCommand::Empty => Ok(()),
        SessionCommand::Help => writeln!(out, "{}", HELP),
        SessionCommand::Categories => writeln!(out, "{}", categories().join(", ")),
        SessionCommand::Units => match session.unit_options() {
            Ok(names) => writeln!(out, "{}", names.join(", ")),
            Err(e) => write_error(out, &e),
        },
        SessionCommand::Category(name) => match session.select_category(&name) {
            Ok(()) => writeln!(out, "Category: {}", session.category()),
            Err(e) => write_error(out, &e),
        },
        SessionCommand::From(unit) => match session.select_from(&unit) {
            Ok(()) => Ok(()),
            Err(e) => write_error(out, &e),
        },
        SessionCommand::To(unit) => match session.select_to(&unit) {
            Ok(()) => Ok(()),
            Err(e) => write_error(out, &e),
        },
        SessionCommand::Swap => {
            session.swap();
            Ok(())
        }
        SessionCommand::Convert(value) => match session.convert(value) {
            Ok(result) => writeln!(
                out,
                "{} {} = {:.prec$} {}\n{}",
                result.value,
                result.from_unit,
                result.result,
                result.to_unit,
                result.explanation,
                prec = settings.display_precision
            ),
            Err(e) => write_error(out, &e),
        },
        SessionCommand::History => write_history(out, session, settings),
        SessionCommand::Clear => {
            session.clear_history();
            writeln!(out, "History cleared.")
        }
        SessionCommand::MissingValue => writeln!(out, "Please enter a value to convert."),
        SessionCommand::Unknown(text) => writeln!(out, "Unknown command '{}'. Type 'help' for commands.", text),
    };
    written.is_ok()
}

fn write_history<W: Write>(out: &mut W, session: &Session, settings: &Settings) -> std::io::Result<()> {
    if session.history().is_empty() {
        return writeln!(out, "No conversions yet.");
    }
    writeln!(out, "Recent Conversions")?;
    for entry in session.history().recent(settings.recent_count) {
        writeln!(out, "  {}", entry)?;
    }
    Ok(())
}

fn write_error<W: Write>(out: &mut W, error: &ConvertError) -> std::io::Result<()> {
    let hint = match error {
        ConvertError::UnknownUnit { .. } => " (type 'units' to list them)",
        ConvertError::UnknownCategory { .. } => " (type 'categories' to list them)",
        ConvertError::InvalidValue { .. } => " (please enter a finite number)",
        _ => "",
    };
    writeln!(out, "{}{}", error, hint)
}
