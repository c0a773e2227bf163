use std::path::PathBuf;

use cv_core::TranscriptEntry;

#[derive(Debug, Clone)]
pub(crate) struct LoadedConversation {
    pub(crate) path: PathBuf,
    pub(crate) title: String,
    pub(crate) source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunOutcome {
    pub(crate) entries: Vec<TranscriptEntry>,
    pub(crate) ended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineCommandAction {
    NotHandled,
    Continue,
    Restarted,
    Quit,
}
