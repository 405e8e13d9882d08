//! Line commands understood by the interactive shell.
//!
//! The first word selects the command. Arguments are comma-separated so that
//! location labels may contain spaces:
//!
//! ```text
//! road UiTM Jasin, Melaka Sentral, 32.5
//! route UiTM Jasin, Melaka Sentral
//! ```

use crate::error::{AppError, AppResult};
use crate::form::RoadForm;

pub const HELP: &str = "\
Commands:
  road <from>, <to>, <distance>   add a two-way road
  network                         list every location and its roads
  locations                       list locations (sorted)
  view                            show the network as edges
  route <from>, <to>              compute the shortest route
  help                            show this help
  quit                            leave the session";

const ROUTE_USAGE: &str = "route <from>, <to>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Road(RoadForm),
    Network,
    Locations,
    View,
    Route { from: String, to: String },
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> AppResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "road" | "add" => Command::Road(RoadForm::from_fields(rest)?),
        "network" | "roads" => Command::Network,
        "locations" => Command::Locations,
        "view" | "visualize" => Command::View,
        "route" | "path" => match rest.split(',').map(str::trim).collect::<Vec<_>>()[..] {
            [from, to] if !from.is_empty() && !to.is_empty() => Command::Route {
                from: from.to_owned(),
                to: to.to_owned(),
            },
            _ => return Err(AppError::Usage(ROUTE_USAGE)),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(AppError::UnknownCommand(verb.to_owned())),
    };
    Ok(Some(command))
}
