//! Plain-text rendering of chat messages and the results panel.

use serde_json::Value;

use crate::application::handlers::PanelState;
use crate::domain::chat::{replies, BotMood, ChatMessage, MessageBody, Row};

fn mood_face(mood: BotMood) -> &'static str {
    match mood {
        BotMood::Hello => "(^_^)/",
        BotMood::Thinking => "(o_o)?",
        BotMood::Answering => "(^_^)",
    }
}

/// Prompt prefix showing the bot's mood.
pub fn prompt(mood: BotMood) -> String {
    format!("{} > ", mood_face(mood))
}

pub fn render_message(message: &ChatMessage) -> String {
    match message.body() {
        MessageBody::Bot { text } => format!("bot: {}", text),
        MessageBody::User { text } => format!("you: {}", text),
        MessageBody::Options { methods } => methods
            .iter()
            .enumerate()
            .map(|(i, m)| format!("  [{}] {}   (/choose {})", i + 1, m.label(), m.label()))
            .collect::<Vec<_>>()
            .join("\n"),
        MessageBody::Table { rows } => render_table(rows),
        MessageBody::MetricList { metrics, columns } => {
            let mut out: Vec<String> = metrics.iter().map(|m| format!("  - {}", m)).collect();
            if !columns.is_empty() {
                out.push(format!("  columns: {}", columns.join(", ")));
            }
            out.join("\n")
        }
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => replies::format_value(v),
    }
}

/// Aligned text table; the header comes from the first row's keys.
pub fn render_table(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return "  (no rows)".to_string();
    };
    let headers: Vec<&String> = first.keys().collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| headers.iter().map(|h| cell(row.get(h.as_str()))).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.iter().map(|h| h.to_string()).collect())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(body.into_iter().map(line));
    out.iter()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_panel(state: &PanelState) -> String {
    if !state.loaded {
        return "Results panel: upload a dataset to see plots.".to_string();
    }
    let selection = &state.selection;
    let axis = |column: &Option<String>| column.as_deref().unwrap_or("-").to_string();
    let mut header = format!("Plot: {}", selection.kind);
    if selection.kind.needs_columns() {
        header.push_str(&format!("  x={}", axis(&selection.x_column)));
    }
    if selection.kind.uses_y_axis() {
        header.push_str(&format!("  y={}", axis(&selection.y_column)));
    }
    let mut out = vec![header];
    if let Some(figure) = &state.figure {
        out.push(format!(
            "  figure: {} ({} traces)",
            figure.title().unwrap_or("untitled"),
            figure.trace_count()
        ));
    }
    if let Some(error) = &state.error {
        out.push(format!("  error: {}", error));
    }
    if let Some(o) = &state.overview {
        out.push(format!(
            "  rows: {}  columns: {}  missing values: {}  duplicate rows: {}",
            o.num_rows, o.num_columns, o.missing_values, o.duplicate_rows
        ));
    }
    out.join("\n")
}
