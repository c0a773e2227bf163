use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversationError {
    #[error("Conversation document could not be parsed: {message}")]
    Parse { message: String },
    #[error("Label \"{label}\" on line {line_index} is already defined.")]
    DuplicateLabel { label: String, line_index: usize },
    #[error("Jump target \"{label}\" requested from line {origin_index} does not exist.")]
    UnresolvedJump { label: String, origin_index: usize },
    #[error("Cursor issued for line {origin_index} is no longer active.")]
    InvalidCursor { origin_index: usize },
    #[error("No conversation is active.")]
    NoActiveConversation,
    #[error("Option index {index} is out of range, line has {count} options.")]
    OptionIndexOutOfRange { index: usize, count: usize },
}

impl ConversationError {
    pub fn parse(error: impl Display) -> Self {
        Self::Parse {
            message: error.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "ENGINE_PARSE",
            Self::DuplicateLabel { .. } => "ENGINE_DUPLICATE_LABEL",
            Self::UnresolvedJump { .. } => "ENGINE_UNRESOLVED_JUMP",
            Self::InvalidCursor { .. } => "ENGINE_INVALID_CURSOR",
            Self::NoActiveConversation => "ENGINE_NOT_ACTIVE",
            Self::OptionIndexOutOfRange { .. } => "ENGINE_OPTION_INDEX",
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn codes_are_stable_per_variant() {
        assert_eq!(ConversationError::parse("bad").code(), "ENGINE_PARSE");
        assert_eq!(
            ConversationError::DuplicateLabel {
                label: "x".to_string(),
                line_index: 2,
            }
            .code(),
            "ENGINE_DUPLICATE_LABEL"
        );
        assert_eq!(
            ConversationError::UnresolvedJump {
                label: "nowhere".to_string(),
                origin_index: 0,
            }
            .code(),
            "ENGINE_UNRESOLVED_JUMP"
        );
        assert_eq!(
            ConversationError::InvalidCursor { origin_index: 1 }.code(),
            "ENGINE_INVALID_CURSOR"
        );
        assert_eq!(
            ConversationError::NoActiveConversation.code(),
            "ENGINE_NOT_ACTIVE"
        );
        assert_eq!(
            ConversationError::OptionIndexOutOfRange { index: 3, count: 2 }.code(),
            "ENGINE_OPTION_INDEX"
        );
    }

    #[test]
    fn messages_name_the_offending_label() {
        let error = ConversationError::UnresolvedJump {
            label: "nowhere".to_string(),
            origin_index: 4,
        };
        assert_eq!(
            error.to_string(),
            "Jump target \"nowhere\" requested from line 4 does not exist."
        );

        let error = ConversationError::parse("missing field `text`");
        assert!(error.to_string().contains("missing field `text`"));
    }
}
