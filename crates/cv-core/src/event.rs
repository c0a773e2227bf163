use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EngineEvent {
    /// The active line or its options changed, including the change to "nothing active".
    LineUpdate,
    /// Position passed the last line. Fires once per conversation.
    End,
    Message {
        text: String,
    },
}

impl EngineEvent {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::LineUpdate => "lineUpdate",
            Self::End => "end",
            Self::Message { .. } => "message",
        }
    }
}

/// Snapshot of one event together with the engine state it was observed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TranscriptEntry {
    Line {
        speaker: String,
        text: String,
        options: Vec<String>,
    },
    Cleared,
    End,
    Message {
        text: String,
    },
}

impl TranscriptEntry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Cleared => "cleared",
            Self::End => "end",
            Self::Message { .. } => "message",
        }
    }
}
