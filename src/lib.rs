//! CyberBuddy - Cybersecurity Awareness Chatbot
//!
//! A rule-based terminal assistant that answers questions about phishing,
//! passwords, scams, privacy and safe browsing.
//!
//! # Architecture
//!
//! - **dispatcher**: input sanitizing, intent classification, reply generation
//! - **knowledge**: keyword tables (built-in or loaded from TOML)
//! - **quiz**, **tasks**, **memory**, **activity**: per-session state
//! - **cli** / **repl**: command line, configuration and the interactive loop

pub mod errors;
pub mod activity;
pub mod knowledge;
pub mod memory;
pub mod quiz;
pub mod tasks;
pub mod dispatcher;

// Interface layer
pub mod cli;
pub mod repl;

// Re-export commonly used types
pub use errors::{BotError, Result};
pub use activity::{ActivityEntry, ActivityLog};
pub use dispatcher::{sanitize, Chatbot, Dispatcher};
pub use knowledge::KnowledgeBase;
pub use memory::{MemoryKey, SessionMemory};
pub use quiz::{Quiz, QuizQuestion};
pub use tasks::{Task, TaskId, TaskListing, TaskStore};
