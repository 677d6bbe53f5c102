//! Chat message entity.
//!
//! Messages are immutable records appended to the conversation log. The body
//! is a tagged variant: plain bot/user text, the upload options, a preview
//! table, or the metric catalogue.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metric::catalogue_names;
use super::upload::UploadMethod;
use crate::domain::foundation::{MessageId, Timestamp};

/// One row of a preview table, keyed by column name.
pub type Row = Map<String, Value>;

/// What a message shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageBody {
    /// Text from the assistant.
    Bot { text: String },
    /// Text typed or clicked by the user.
    User { text: String },
    /// Buttons for the available upload methods.
    Options { methods: Vec<UploadMethod> },
    /// Preview rows of the uploaded dataset.
    Table { rows: Vec<Row> },
    /// Catalogue of metric names plus the columns they can target.
    MetricList {
        metrics: Vec<String>,
        columns: Vec<String>,
    },
}

impl MessageBody {
    /// Buttons for every upload method.
    pub fn options() -> Self {
        Self::Options {
            methods: UploadMethod::ALL.to_vec(),
        }
    }

    /// The metric catalogue, offered for the given columns.
    pub fn metric_list(columns: Vec<String>) -> Self {
        Self::MetricList {
            metrics: catalogue_names(),
            columns,
        }
    }
}

/// An immutable message within the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    created_at: Timestamp,
    #[serde(flatten)]
    body: MessageBody,
}

impl ChatMessage {
    /// Creates a message with a fresh id and timestamp.
    pub fn new(body: MessageBody) -> Self {
        Self {
            id: MessageId::new(),
            created_at: Timestamp::now(),
            body,
        }
    }

    /// Creates a bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(MessageBody::Bot { text: text.into() })
    }

    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageBody::User { text: text.into() })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Display text, if the message carries any.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Bot { text } | MessageBody::User { text } => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.body, MessageBody::Bot { .. })
    }

    pub fn is_user(&self) -> bool {
        matches!(self.body, MessageBody::User { .. })
    }
}

/// Append-only, creation-ordered list of messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drops every message. Only a full conversation reset does this.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Messages appended at or after `index`.
    pub fn since(&self, index: usize) -> &[ChatMessage] {
        self.messages.get(index..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Text of every bot message, in order.
    pub fn bot_texts(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.is_bot())
            .filter_map(ChatMessage::text)
            .collect()
    }
}
