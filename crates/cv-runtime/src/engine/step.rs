use super::*;

impl DialogueEngine {
    /// Moves past the line `cursor` was issued for.
    ///
    /// Order of effects: old cursors are invalidated, the target line is activated (emitting
    /// `LineUpdate` and the target's own message, or the end sequence), then the cursor's own
    /// message is emitted. On error nothing has changed.
    pub fn advance(&mut self, cursor: &Cursor) -> Result<(), ConversationError> {
        if !self.is_cursor_valid(cursor) {
            log::warn!(
                "rejected stale cursor for line {} ({:?})",
                cursor.origin_index(),
                cursor.slot()
            );
            return Err(ConversationError::InvalidCursor {
                origin_index: cursor.origin_index(),
            });
        }

        let target = self.resolve_next(cursor.origin_index(), cursor.jump())?;
        let departing_message = cursor.message().map(str::to_string);
        self.activate_line(target);
        self.emit_message(departing_message);
        Ok(())
    }

    pub fn advance_main(&mut self) -> Result<(), ConversationError> {
        let current = self
            .get_current_line()
            .ok_or(ConversationError::NoActiveConversation)?;
        self.advance(&current.main)
    }

    pub fn choose_option(&mut self, index: usize) -> Result<(), ConversationError> {
        let current = self
            .get_current_line()
            .ok_or(ConversationError::NoActiveConversation)?;
        let option = current
            .options
            .get(index)
            .ok_or(ConversationError::OptionIndexOutOfRange {
                index,
                count: current.options.len(),
            })?;
        self.advance(option)
    }

    pub fn select(&mut self, selection: Selection) -> Result<(), ConversationError> {
        match selection {
            Selection::Main => self.advance_main(),
            Selection::Option { index } => self.choose_option(index),
        }
    }

    fn resolve_next(&self, origin_index: usize, jump: Option<&str>) -> Result<usize, ConversationError> {
        let Some(label) = jump.filter(|label| !label.trim().is_empty()) else {
            return Ok(origin_index + 1);
        };

        match self.jump_table.get(label) {
            Some(target) => Ok(*target),
            None => {
                log::warn!("unresolved jump \"{}\" from line {}", label, origin_index);
                Err(ConversationError::UnresolvedJump {
                    label: label.to_string(),
                    origin_index,
                })
            }
        }
    }

    pub(super) fn activate_line(&mut self, target: usize) {
        self.invalidate_cursors();

        let Some(line) = self
            .conversation
            .as_ref()
            .and_then(|conversation| conversation.line(target))
            .cloned()
        else {
            self.finish_conversation();
            return;
        };

        log::debug!("activating line {}", target);
        self.current_index = Some(target);
        self.active_main = Some(Cursor::new(
            self.instance_id,
            self.epoch,
            CursorSlot::Main,
            target,
            &line.text,
            line.jump(),
            None,
        ));
        self.active_options = line
            .options
            .iter()
            .enumerate()
            .map(|(option_index, option)| {
                Cursor::new(
                    self.instance_id,
                    self.epoch,
                    CursorSlot::Option(option_index),
                    target,
                    &option.text,
                    option.jump(),
                    option.message(),
                )
            })
            .collect();

        self.emit(EngineEvent::LineUpdate);
        self.emit_message(line.message().map(str::to_string));
    }

    fn finish_conversation(&mut self) {
        log::debug!("conversation ended");
        self.current_index = None;
        let end_message = self
            .conversation
            .as_ref()
            .and_then(|conversation| conversation.end_message())
            .map(str::to_string);

        self.emit(EngineEvent::LineUpdate);
        self.emit(EngineEvent::End);
        self.emit_message(end_message);
    }
}
