use std::fmt::{self, Display};

use cv_core::ConversationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CliError {
    pub(crate) code: String,
    pub(crate) message: String,
}

impl CliError {
    pub(crate) fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl From<ConversationError> for CliError {
    fn from(error: ConversationError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

fn map_error(code: &str, error: impl Display) -> CliError {
    CliError::new(code, error.to_string())
}

pub(crate) fn json_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

pub(crate) fn emit_error(error: CliError) -> i32 {
    log::debug!("command failed with {}", error.code);
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!("ERROR_MSG_JSON:{}", json_string(&error.message));
    1
}

pub(crate) fn map_play_io(error: std::io::Error) -> CliError {
    map_error("PLAY_IO", error)
}

pub(crate) fn map_cli_source_path(error: std::io::Error) -> CliError {
    map_error("CLI_SOURCE_PATH", error)
}

pub(crate) fn map_cli_source_read(error: std::io::Error) -> CliError {
    map_error("CLI_SOURCE_READ", error)
}
