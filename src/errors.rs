//! Error types for CyberBuddy
//!
//! User mistakes never surface here: they are turned into guidance replies by the
//! dispatcher. These variants cover contract violations and load-time failures.

use thiserror::Error;

/// Main error type for the CyberBuddy core
#[derive(Error, Debug)]
pub enum BotError {
    /// A question was requested or answered after the last one
    #[error("Quiz has no remaining questions ({answered}/{total} answered)")]
    QuizExhausted { answered: usize, total: usize },

    /// Final feedback was requested before every question was answered
    #[error("Quiz still in progress: {remaining} question(s) remaining")]
    QuizInProgress { remaining: usize },

    /// Knowledge base tables failed validation
    #[error("Invalid knowledge base: {0}")]
    InvalidKnowledge(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, BotError>;

impl BotError {
    /// True for quiz-state misuse by the caller (as opposed to bad data or I/O)
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            BotError::QuizExhausted { .. } | BotError::QuizInProgress { .. }
        )
    }
}
