use std::cell::RefCell;
use std::rc::Rc;

use cv_core::{Conversation, ConversationError, EngineEvent, TranscriptEntry};
use cv_runtime::{DialogueEngine, SubscriptionId};

pub fn parse_conversation_json(source: &str) -> Result<Conversation, ConversationError> {
    serde_json::from_str(source).map_err(ConversationError::parse)
}

/// Resets `engine` before decoding, so a malformed document leaves nothing active.
pub fn load_conversation_from_json(
    engine: &mut DialogueEngine,
    source: &str,
) -> Result<(), ConversationError> {
    engine.reset();
    let conversation = parse_conversation_json(source).map_err(|error| {
        log::warn!("conversation document rejected: {}", error);
        error
    })?;
    engine.load(conversation)
}

pub fn create_engine_from_json(source: &str) -> Result<DialogueEngine, ConversationError> {
    let mut engine = DialogueEngine::new();
    load_conversation_from_json(&mut engine, source)?;
    Ok(engine)
}

/// Describes `event` against the state `engine` is in while the event is delivered.
pub fn transcript_entry(engine: &DialogueEngine, event: &EngineEvent) -> TranscriptEntry {
    match event {
        EngineEvent::LineUpdate => match engine.get_current_line() {
            Some(current) => TranscriptEntry::Line {
                speaker: engine.get_current_speaker().unwrap_or("").to_string(),
                text: current.main.text().to_string(),
                options: current.option_texts(),
            },
            None => TranscriptEntry::Cleared,
        },
        EngineEvent::End => TranscriptEntry::End,
        EngineEvent::Message { text } => TranscriptEntry::Message { text: text.clone() },
    }
}

/// Shared handle to the entries collected by a recorder subscribed with [`record_transcript`].
#[derive(Debug, Clone)]
pub struct Transcript {
    subscription: SubscriptionId,
    entries: Rc<RefCell<Vec<TranscriptEntry>>>,
}

impl Transcript {
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.borrow().clone()
    }

    pub fn drain(&self) -> Vec<TranscriptEntry> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

pub fn record_transcript(engine: &mut DialogueEngine) -> Transcript {
    let entries = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&entries);
    let subscription = engine.subscribe(move |engine, event| {
        sink.borrow_mut().push(transcript_entry(engine, event));
    });
    Transcript {
        subscription,
        entries,
    }
}
