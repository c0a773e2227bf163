use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use cv_core::{Conversation, ConversationError, EngineEvent, Selection, END_LABEL};

mod cursor;
mod lifecycle;
mod step;
mod subscribers;

pub use cursor::{CurrentLine, Cursor, CursorSlot};
pub use subscribers::{EventHandler, SubscriptionId};

static NEXT_ENGINE_ID: AtomicU64 = AtomicU64::new(1);

fn next_engine_id() -> u64 {
    NEXT_ENGINE_ID.fetch_add(1, Ordering::Relaxed)
}

struct Subscriber {
    id: SubscriptionId,
    handler: EventHandler,
}

/// Walks one conversation at a time. Created once and reused; `load` is the reset boundary.
pub struct DialogueEngine {
    instance_id: u64,
    conversation: Option<Conversation>,
    jump_table: HashMap<String, usize>,
    current_index: Option<usize>,
    // Bumped whenever cursors are invalidated. Cursors stamped with an older value are stale.
    epoch: u64,
    active_main: Option<Cursor>,
    active_options: Vec<Cursor>,

    subscribers: Vec<Subscriber>,
    subscription_counter: u64,
}
