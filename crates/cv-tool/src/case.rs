use cv_core::{Selection, TranscriptEntry};
use serde::{Deserialize, Serialize};

pub const TESTCASE_SCHEMA_V1: &str = "cv-tool-case.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub schema_version: String,
    #[serde(default)]
    pub actions: Vec<TestAction>,
    #[serde(default)]
    pub expected_events: Vec<ExpectedEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TestAction {
    Main,
    Option { index: usize },
}

impl TestAction {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Option { .. } => "option",
        }
    }
}

impl From<TestAction> for Selection {
    fn from(action: TestAction) -> Self {
        match action {
            TestAction::Main => Selection::Main,
            TestAction::Option { index } => Selection::Option { index },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExpectedEvent {
    Line {
        #[serde(default)]
        speaker: String,
        text: String,
        #[serde(default)]
        options: Vec<String>,
    },
    Cleared,
    End,
    Message {
        text: String,
    },
}

impl From<TranscriptEntry> for ExpectedEvent {
    fn from(entry: TranscriptEntry) -> Self {
        match entry {
            TranscriptEntry::Line {
                speaker,
                text,
                options,
            } => Self::Line {
                speaker,
                text,
                options,
            },
            TranscriptEntry::Cleared => Self::Cleared,
            TranscriptEntry::End => Self::End,
            TranscriptEntry::Message { text } => Self::Message { text },
        }
    }
}
