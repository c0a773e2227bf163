use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reserved jump target that always resolves to "past the last line".
pub const END_LABEL: &str = "end";

/// Returns the value only when it holds something other than whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub lines: Vec<LineDefinition>,
    #[serde(default)]
    pub end: EndDefinition,
}

impl Conversation {
    pub fn line(&self, index: usize) -> Option<&LineDefinition> {
        self.lines.get(index)
    }

    pub fn end_message(&self) -> Option<&str> {
        non_blank(self.end.message.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LineDefinition {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            speaker: None,
            label: None,
            message: None,
            text: text.into(),
            jump: None,
            options: Vec::new(),
            notes: None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        non_blank(self.label.as_deref())
    }

    pub fn jump(&self) -> Option<&str> {
        non_blank(self.jump.as_deref())
    }

    pub fn message(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }

    /// Speaker id, with the narrator represented by an empty string.
    pub fn speaker(&self) -> &str {
        self.speaker.as_deref().unwrap_or("")
    }

    pub fn is_branch_point(&self) -> bool {
        !self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDefinition {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OptionDefinition {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            jump: None,
            message: None,
        }
    }

    pub fn jump(&self) -> Option<&str> {
        non_blank(self.jump.as_deref())
    }

    pub fn message(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }
}

/// Which cursor of the current line a driver wants to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selection {
    Main,
    Option { index: usize },
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Option { index } => write!(f, "{}", index),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("main") {
            return Ok(Self::Main);
        }
        raw.parse::<usize>()
            .map(|index| Self::Option { index })
            .map_err(|_| format!("Invalid selection \"{}\", expected \"main\" or an option index.", raw))
    }
}
