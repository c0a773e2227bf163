mod engine;

pub use engine::{CurrentLine, Cursor, CursorSlot, DialogueEngine, EventHandler, SubscriptionId};
