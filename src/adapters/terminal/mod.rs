//! Terminal adapter - line commands in, plain text out.

mod command;
mod render;

pub use command::{Command, CommandError, HELP};
pub use render::{prompt, render_message, render_panel, render_table};
