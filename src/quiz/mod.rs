//! Multiple-choice quiz state machine
//!
//! The session is modelled by `(index, total)`:
//! - `InProgress { index }` while `index < total`
//! - `Finished` once every question has been answered
//!
//! Answers always advance the index, right or wrong. Invariant:
//! `0 <= score <= index <= total`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BotError, Result};

/// One question with its options and the 0-based index of the right one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: Vec<String>, correct: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct,
        }
    }

    /// Check the question is answerable
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        if self.options.len() < 2 {
            return Err(format!("needs at least 2 options, found {}", self.options.len()));
        }
        if self.correct >= self.options.len() {
            return Err(format!(
                "correct index {} is out of range for {} options",
                self.correct,
                self.options.len()
            ));
        }
        Ok(())
    }

    /// Text of the right option; `None` when `correct` is out of range
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }
}

/// Where the quiz currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress { index: usize },
    Finished,
}

/// Read-only view of the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// 1-based position in the quiz
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [String],
}

impl fmt::Display for QuestionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "❓ Question {}/{}: {}", self.number, self.total, self.prompt)?;
        for (i, option) in self.options.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, option)?;
        }
        write!(f, "\nType 'answer [number]' to respond.")
    }
}

/// Result of answering one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub feedback: String,
}

/// Sequential quiz with scoring
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    index: usize,
    score: usize,
}

impl Quiz {
    /// Build a quiz, rejecting questions that could not be answered
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        for (i, question) in questions.iter().enumerate() {
            question.validate().map_err(|reason| {
                BotError::InvalidKnowledge(format!("quiz question {}: {}", i + 1, reason))
            })?;
        }

        Ok(Quiz {
            questions,
            index: 0,
            score: 0,
        })
    }

    /// Start over from the first question
    pub fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
    }

    pub fn has_next(&self) -> bool {
        self.index < self.questions.len()
    }

    pub fn state(&self) -> QuizState {
        if self.has_next() {
            QuizState::InProgress { index: self.index }
        } else {
            QuizState::Finished
        }
    }

    /// The current question. Does not advance.
    pub fn next(&self) -> Result<QuestionView<'_>> {
        let question = self.questions.get(self.index).ok_or(BotError::QuizExhausted {
            answered: self.index,
            total: self.questions.len(),
        })?;

        Ok(QuestionView {
            number: self.index + 1,
            total: self.questions.len(),
            prompt: &question.prompt,
            options: &question.options,
        })
    }

    /// Whether a 1-based choice names an option of the current question
    pub fn is_valid_choice(&self, choice: usize) -> bool {
        self.questions
            .get(self.index)
            .map(|q| (1..=q.options.len()).contains(&choice))
            .unwrap_or(false)
    }

    /// Answer the current question with a 1-based choice and advance.
    ///
    /// Callers are expected to check `is_valid_choice` first; an out-of-range
    /// choice is simply scored as wrong.
    pub fn answer(&mut self, choice: usize) -> Result<AnswerOutcome> {
        let question = self.questions.get(self.index).ok_or(BotError::QuizExhausted {
            answered: self.index,
            total: self.questions.len(),
        })?;

        let right = question.correct_option().ok_or_else(|| {
            BotError::InvalidKnowledge(format!(
                "quiz question {} has no option {}",
                self.index + 1,
                question.correct + 1
            ))
        })?;

        let correct = choice.checked_sub(1) == Some(question.correct);
        let feedback = if correct {
            "✅ Correct!".to_string()
        } else {
            format!("❌ Incorrect. The right answer was: '{}'", right)
        };

        if correct {
            self.score += 1;
        }
        self.index += 1;

        Ok(AnswerOutcome { correct, feedback })
    }

    /// Score summary, only once every question has been answered
    pub fn final_feedback(&self) -> Result<String> {
        if self.has_next() {
            return Err(BotError::QuizInProgress {
                remaining: self.questions.len() - self.index,
            });
        }

        let total = self.questions.len();
        let message = if self.score * 2 >= total {
            "🎉 You are a PRO!! Keep going!"
        } else {
            "🧠 Try harder!"
        };
        Ok(format!("You scored {}/{}. {}", self.score, total, message))
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}
