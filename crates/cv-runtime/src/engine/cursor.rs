use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSlot {
    Main,
    Option(usize),
}

/// Handle to the main line or one option of the line that was active when it was issued.
///
/// Cursors are plain values stamped with the issuing engine and its epoch. Once the engine
/// moves on they stay readable but `advance` rejects them with `InvalidCursor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    engine_id: u64,
    epoch: u64,
    slot: CursorSlot,
    origin_index: usize,
    text: String,
    jump: Option<String>,
    message: Option<String>,
}

impl Cursor {
    pub(super) fn new(
        engine_id: u64,
        epoch: u64,
        slot: CursorSlot,
        origin_index: usize,
        text: &str,
        jump: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self {
            engine_id,
            epoch,
            slot,
            origin_index,
            text: text.to_string(),
            jump: jump.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slot(&self) -> CursorSlot {
        self.slot
    }

    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    pub fn jump(&self) -> Option<&str> {
        self.jump.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_valid(&self, engine: &DialogueEngine) -> bool {
        engine.is_cursor_valid(self)
    }

    pub fn advance(&self, engine: &mut DialogueEngine) -> Result<(), ConversationError> {
        engine.advance(self)
    }

    pub(super) fn issued_by(&self, engine_id: u64, epoch: u64) -> bool {
        self.engine_id == engine_id && self.epoch == epoch
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLine {
    pub main: Cursor,
    pub options: Vec<Cursor>,
}

impl CurrentLine {
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn option_texts(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| option.text().to_string())
            .collect()
    }
}
