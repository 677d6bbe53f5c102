//! Conversation stage machine.
//!
//! Defines the discrete points of the guided dialogue and the valid hops
//! between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The stage of the guided dialogue.
///
/// - `NameInput`: waiting for the user's name
/// - `UploadChoice`: name known, waiting for an upload method
/// - `AwaitingFile`: method chosen, waiting for a file
/// - `PostUpload`: upload accepted, summary being shown
/// - `MetricSelection`: metric catalogue shown, no request yet
/// - `AwaitingMetricInput`: at least one metric request handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    #[default]
    NameInput,
    UploadChoice,
    AwaitingFile,
    PostUpload,
    MetricSelection,
    AwaitingMetricInput,
}

impl ConversationStage {
    /// Every stage, in dialogue order.
    pub const ALL: [ConversationStage; 6] = [
        Self::NameInput,
        Self::UploadChoice,
        Self::AwaitingFile,
        Self::PostUpload,
        Self::MetricSelection,
        Self::AwaitingMetricInput,
    ];

    /// Returns true if free text is interpreted as a metric request.
    pub fn accepts_metric_requests(&self) -> bool {
        matches!(self, Self::MetricSelection | Self::AwaitingMetricInput)
    }

    /// Returns true if an upload method may be (re)chosen.
    pub fn accepts_upload_choice(&self) -> bool {
        matches!(self, Self::UploadChoice | Self::AwaitingFile)
    }

    /// Returns true if the session may hold dataset columns in this stage.
    pub fn holds_dataset(&self) -> bool {
        matches!(
            self,
            Self::PostUpload | Self::MetricSelection | Self::AwaitingMetricInput
        )
    }
}

impl std::fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NameInput => "name_input",
            Self::UploadChoice => "upload_choice",
            Self::AwaitingFile => "awaiting_file",
            Self::PostUpload => "post_upload",
            Self::MetricSelection => "metric_selection",
            Self::AwaitingMetricInput => "awaiting_metric_input",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for ConversationStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationStage::*;
        matches!(
            (self, target),
            // exit is reachable from everywhere
            (_, NameInput) |
            (NameInput, UploadChoice) |
            (UploadChoice, AwaitingFile) |
            (AwaitingFile, AwaitingFile) |
            (AwaitingFile, PostUpload) |
            // upload failure
            (AwaitingFile, UploadChoice) |
            (PostUpload, MetricSelection) |
            (MetricSelection, AwaitingMetricInput) |
            (AwaitingMetricInput, AwaitingMetricInput)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationStage::*;
        match self {
            NameInput => vec![NameInput, UploadChoice],
            UploadChoice => vec![NameInput, AwaitingFile],
            AwaitingFile => vec![NameInput, AwaitingFile, PostUpload, UploadChoice],
            PostUpload => vec![NameInput, MetricSelection],
            MetricSelection => vec![NameInput, AwaitingMetricInput],
            AwaitingMetricInput => vec![NameInput, AwaitingMetricInput],
        }
    }
}

/// Avatar status shown next to the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotMood {
    Hello,
    Thinking,
    Answering,
}

impl BotMood {
    /// Derives the mood from the stage and whether a collaborator call is outstanding.
    pub fn for_stage(stage: ConversationStage, busy: bool) -> Self {
        if busy {
            return Self::Thinking;
        }
        match stage {
            ConversationStage::NameInput | ConversationStage::UploadChoice => Self::Hello,
            _ => Self::Answering,
        }
    }
}
