//! Pure transition function of the conversation.
//!
//! `transition(session, event)` decides the next stage and the ordered list of
//! effects the controller must carry out. It never performs I/O, so every
//! dialogue path can be checked without a runtime or collaborators.

use super::message::{MessageBody, Row};
use super::metric::{interpret_metric_line, MetricLineError, MetricRequest};
use super::replies;
use super::session::SessionState;
use super::stage::ConversationStage;
use super::upload::UploadMethod;

/// Something that happened to the conversation.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// The user submitted a line of text.
    TextSubmitted(String),
    /// The user clicked an upload option.
    UploadMethodChosen(String),
    /// The user picked a file to upload.
    FileSelected { file_name: String },
    /// The upload service accepted the file.
    UploadSucceeded {
        columns: Vec<String>,
        preview_rows: Vec<Row>,
    },
    /// The upload service rejected the file.
    UploadFailed { message: String },
    /// A collaborator asked for a fresh session.
    ResetRequested,
}

impl ChatEvent {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TextSubmitted(_) => "text_submitted",
            Self::UploadMethodChosen(_) => "upload_method_chosen",
            Self::FileSelected { .. } => "file_selected",
            Self::UploadSucceeded { .. } => "upload_succeeded",
            Self::UploadFailed { .. } => "upload_failed",
            Self::ResetRequested => "reset_requested",
        }
    }
}

/// An instruction for the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a message to the log.
    Say(MessageBody),
    /// Wait for the configured thinking delay.
    Pause,
    SetUserName(String),
    StoreColumns(Vec<String>),
    /// Clear name and columns and notify the reset collaborator.
    ResetSession,
    /// Tell the observer which columns the new dataset has.
    NotifyDatasetLoaded(Vec<String>),
    /// Drop every message in the log.
    ClearLog,
    /// Pass through an intermediate stage before `Transition::next`.
    EnterStage(ConversationStage),
    /// Call the metric service and report its answer.
    EvaluateMetric(MetricRequest),
}

impl Effect {
    fn bot(text: impl Into<String>) -> Self {
        Effect::Say(MessageBody::Bot { text: text.into() })
    }

    fn user(text: impl Into<String>) -> Self {
        Effect::Say(MessageBody::User { text: text.into() })
    }
}

/// Outcome of applying an event to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: ConversationStage,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: ConversationStage, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }

    /// Leaves the session untouched.
    fn ignore(stage: ConversationStage) -> Self {
        Self {
            next: stage,
            effects: Vec::new(),
        }
    }

    /// Returns true if the event changes nothing.
    pub fn is_noop(&self, current: ConversationStage) -> bool {
        self.effects.is_empty() && self.next == current
    }
}

/// Returns true if the line is the global exit command.
pub fn is_exit_command(line: &str) -> bool {
    line.trim().to_lowercase() == "exit"
}

/// Computes the next stage and effects for `event`.
pub fn transition(session: &SessionState, event: ChatEvent) -> Transition {
    let stage = session.stage();
    match event {
        ChatEvent::TextSubmitted(line) => on_text(session, &line),
        ChatEvent::UploadMethodChosen(label) => match UploadMethod::from_label(&label) {
            Some(method) if stage.accepts_upload_choice() => Transition::to(
                ConversationStage::AwaitingFile,
                vec![
                    Effect::user(method.label()),
                    Effect::bot(replies::upload_method_chosen(method)),
                ],
            ),
            _ => Transition::ignore(stage),
        },
        ChatEvent::FileSelected { file_name } if stage == ConversationStage::AwaitingFile => {
            Transition::to(stage, vec![Effect::bot(replies::file_received(&file_name))])
        }
        ChatEvent::UploadSucceeded {
            columns,
            preview_rows,
        } if stage == ConversationStage::AwaitingFile => Transition::to(
            ConversationStage::MetricSelection,
            vec![
                Effect::EnterStage(ConversationStage::PostUpload),
                Effect::StoreColumns(columns.clone()),
                Effect::NotifyDatasetLoaded(columns.clone()),
                Effect::Pause,
                Effect::bot(replies::ANALYSIS_COMPLETE),
                Effect::Say(MessageBody::Table { rows: preview_rows }),
                Effect::bot(replies::CHOOSE_AXES),
                Effect::bot(replies::OFFER_METRICS),
                Effect::Say(MessageBody::metric_list(columns)),
            ],
        ),
        ChatEvent::UploadFailed { message } if stage == ConversationStage::AwaitingFile => {
            Transition::to(
                ConversationStage::UploadChoice,
                vec![Effect::bot(replies::upload_failed(&message))],
            )
        }
        ChatEvent::ResetRequested => reset(Vec::new()),
        ChatEvent::FileSelected { .. }
        | ChatEvent::UploadSucceeded { .. }
        | ChatEvent::UploadFailed { .. } => Transition::ignore(stage),
    }
}

/// Back to `NameInput` with nothing but the reset confirmation in the log.
fn reset(mut effects: Vec<Effect>) -> Transition {
    effects.extend([
        Effect::ResetSession,
        Effect::EnterStage(ConversationStage::NameInput),
        Effect::Pause,
        Effect::ClearLog,
        Effect::bot(replies::RESET_CONFIRMATION),
    ]);
    Transition::to(ConversationStage::NameInput, effects)
}

fn on_text(session: &SessionState, line: &str) -> Transition {
    let stage = session.stage();
    let text = line.trim();
    if text.is_empty() {
        return Transition::ignore(stage);
    }

    if is_exit_command(text) {
        return reset(vec![Effect::user(text)]);
    }

    match stage {
        ConversationStage::NameInput => Transition::to(
            ConversationStage::UploadChoice,
            vec![
                Effect::user(text),
                Effect::SetUserName(text.to_string()),
                Effect::Pause,
                Effect::bot(replies::welcome(text)),
                Effect::bot(replies::EXIT_HINT),
                Effect::Say(MessageBody::options()),
            ],
        ),
        _ if stage.accepts_metric_requests() => {
            let mut effects = vec![Effect::user(text)];
            effects.extend(metric_line_effects(text, session.available_columns()));
            Transition::to(ConversationStage::AwaitingMetricInput, effects)
        }
        _ => Transition::to(
            stage,
            vec![
                Effect::user(text),
                Effect::Pause,
                Effect::bot(replies::NOT_UNDERSTOOD),
            ],
        ),
    }
}

/// Effects of a metric request line: a rejection message, or a wait message
/// followed by the service call.
pub fn metric_line_effects(line: &str, available_columns: &[String]) -> Vec<Effect> {
    match interpret_metric_line(line, available_columns) {
        Ok(request) => vec![
            Effect::bot(replies::PLEASE_WAIT),
            Effect::EvaluateMetric(request),
        ],
        Err(MetricLineError::Unrecognized) => vec![Effect::bot(replies::INVALID_METRIC)],
        Err(MetricLineError::UnknownColumn(column)) => {
            vec![Effect::bot(replies::column_not_found(&column))]
        }
    }
}
