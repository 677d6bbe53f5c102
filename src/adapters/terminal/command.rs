//! Slash commands typed at the prompt.

use thiserror::Error;

use crate::domain::plot::{PlotKind, UnknownPlotKind};

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text for the chat.
    Say(String),
    Choose(String),
    Upload(String),
    Plot(PlotKind),
    X(String),
    Y(String),
    Panel,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '/{0}'. Type /help for the list.")]
    Unknown(String),

    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    PlotKind(#[from] UnknownPlotKind),
}

impl Command {
    /// Parses a line; anything not starting with `/` goes to the chat.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let Some(rest) = line.trim_start().strip_prefix('/') else {
            return Ok(Self::Say(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest.trim(), ""),
        };

        let required = |command: &'static str| {
            if arg.is_empty() {
                Err(CommandError::MissingArgument(command))
            } else {
                Ok(arg.to_string())
            }
        };

        match name {
            "choose" => required("choose").map(Self::Choose),
            "upload" => required("upload").map(Self::Upload),
            "plot" => Ok(Self::Plot(required("plot")?.parse()?)),
            "x" => required("x").map(Self::X),
            "y" => required("y").map(Self::Y),
            "panel" => Ok(Self::Panel),
            "help" => Ok(Self::Help),
            "quit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  <text>            talk to the bot
  /choose <option>  click an upload option, e.g. /choose Upload CSV
  /upload <path>    upload a CSV file
  /plot <kind>      histogram, correlation, boxplot or scatter
  /x <column>       X axis column
  /y <column>       Y axis column
  /panel            show the results panel
  /quit             leave";
