pub mod error;
pub mod event;
pub mod types;

pub use error::ConversationError;
pub use event::*;
pub use types::*;
