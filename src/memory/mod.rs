//! Session memory
//!
//! Small key/value store for facts the user shares during one conversation.

mod session;

pub use session::{MemoryKey, SessionMemory};
