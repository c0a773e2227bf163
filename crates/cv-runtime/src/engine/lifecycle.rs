use std::fmt;

use super::*;

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DialogueEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogueEngine")
            .field("instance_id", &self.instance_id)
            .field("line_count", &self.line_count())
            .field("current_index", &self.current_index)
            .field("epoch", &self.epoch)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl DialogueEngine {
    pub fn new() -> Self {
        Self {
            instance_id: next_engine_id(),
            conversation: None,
            jump_table: HashMap::new(),
            current_index: None,
            epoch: 0,
            active_main: None,
            active_options: Vec::new(),
            subscribers: Vec::new(),
            subscription_counter: 0,
        }
    }

    /// Abandons whatever is running, then starts `conversation` at line 0.
    ///
    /// On `DuplicateLabel` the engine is left with no active conversation.
    pub fn load(&mut self, conversation: Conversation) -> Result<(), ConversationError> {
        self.reset();
        let jump_table = build_jump_table(&conversation)?;
        log::debug!(
            "loaded conversation: {} lines, {} labels",
            conversation.lines.len(),
            jump_table.len() - 1
        );
        self.jump_table = jump_table;
        self.conversation = Some(conversation);
        self.activate_line(0);
        Ok(())
    }

    /// Invalidates every issued cursor and drops the loaded script. Emits nothing.
    pub fn reset(&mut self) {
        self.invalidate_cursors();
        self.current_index = None;
        self.jump_table.clear();
        self.conversation = None;
    }

    pub fn is_active(&self) -> bool {
        self.current_index.is_some()
    }

    pub fn get_current_line(&self) -> Option<CurrentLine> {
        self.current_index?;
        let main = self.active_main.clone()?;
        Some(CurrentLine {
            main,
            options: self.active_options.clone(),
        })
    }

    /// `None` when nothing is active, `Some("")` for narrator lines.
    pub fn get_current_speaker(&self) -> Option<&str> {
        let index = self.current_index?;
        self.conversation
            .as_ref()
            .and_then(|conversation| conversation.line(index))
            .map(|line| line.speaker())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn line_count(&self) -> usize {
        self.conversation
            .as_ref()
            .map(|conversation| conversation.lines.len())
            .unwrap_or(0)
    }

    pub fn conversation(&self) -> Option<&Conversation> {
        self.conversation.as_ref()
    }

    pub fn is_cursor_valid(&self, cursor: &Cursor) -> bool {
        self.current_index == Some(cursor.origin_index())
            && cursor.issued_by(self.instance_id, self.epoch)
    }

    pub(super) fn invalidate_cursors(&mut self) {
        self.epoch += 1;
        self.active_main = None;
        self.active_options.clear();
    }
}

fn build_jump_table(conversation: &Conversation) -> Result<HashMap<String, usize>, ConversationError> {
    let mut table = HashMap::new();
    table.insert(END_LABEL.to_string(), conversation.lines.len());

    for (line_index, line) in conversation.lines.iter().enumerate() {
        let Some(label) = line.label() else {
            continue;
        };
        if table.contains_key(label) {
            return Err(ConversationError::DuplicateLabel {
                label: label.to_string(),
                line_index,
            });
        }
        table.insert(label.to_string(), line_index);
    }

    Ok(table)
}
