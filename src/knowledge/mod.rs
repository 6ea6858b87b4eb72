//! Knowledge base: the read-only response tables
//!
//! Every table is an ordered `Vec`. Matching walks a table front to back and the
//! first key contained in the input wins, so table order is part of behavior.
//!
//! Tables are built once at startup, either from the built-in content or from a
//! TOML file, and then shared immutably with the dispatcher.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::dispatcher::sanitize;
use crate::errors::{BotError, Result};
use crate::quiz::QuizQuestion;

/// Anything matched by substring against sanitized input
pub trait Keyed {
    fn key(&self) -> &str;
}

/// A cybersecurity topic with its response variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub key: String,
    pub responses: Vec<String>,
}

/// A keyword or phrase mapped to one fixed reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedReply {
    pub key: String,
    pub reply: String,
}

/// What a free phrase does when it matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseAction {
    /// Answer with fixed text
    Reply(String),
    /// Render the help menu
    ShowMenu,
}

/// A free-form phrase trigger, lower priority than topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseTrigger {
    pub key: String,
    pub action: PhraseAction,
}

impl Keyed for TopicEntry {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for KeyedReply {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for PhraseTrigger {
    fn key(&self) -> &str {
        &self.key
    }
}

/// First entry whose key is contained in `input`, in table order
pub fn first_match<'a, T: Keyed>(entries: &'a [T], input: &str) -> Option<&'a T> {
    entries.iter().find(|entry| input.contains(entry.key()))
}

/// On-disk layout of a knowledge file
#[derive(Debug, Default, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    topics: Vec<TopicEntry>,
    #[serde(default)]
    casual: Vec<KeyedReply>,
    #[serde(default)]
    sentiments: Vec<KeyedReply>,
    #[serde(default)]
    phrases: Vec<PhraseTrigger>,
    #[serde(default)]
    quiz: Vec<QuizQuestion>,
}

/// Immutable response tables
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    topics: Vec<TopicEntry>,
    casual: Vec<KeyedReply>,
    sentiments: Vec<KeyedReply>,
    phrases: Vec<PhraseTrigger>,
    quiz: Vec<QuizQuestion>,
}

impl KnowledgeBase {
    /// Build from tables, normalizing keys and validating every entry
    pub fn from_parts(
        topics: Vec<TopicEntry>,
        casual: Vec<KeyedReply>,
        sentiments: Vec<KeyedReply>,
        phrases: Vec<PhraseTrigger>,
        quiz: Vec<QuizQuestion>,
    ) -> Result<Self> {
        let mut kb = Self {
            topics,
            casual,
            sentiments,
            phrases,
            quiz,
        };
        kb.normalize_keys();
        kb.validate()?;
        Ok(kb)
    }

    /// The tables shipped with the binary
    pub fn builtin() -> Self {
        Self::from_parts(
            builtin::topics(),
            builtin::casual(),
            builtin::sentiments(),
            builtin::phrases(),
            builtin::quiz(),
        )
        .expect("built-in knowledge tables must validate")
    }

    /// Parse a TOML knowledge document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: KnowledgeFile = toml::from_str(contents).map_err(|e| {
            BotError::InvalidKnowledge(format!("Failed to parse knowledge file: {}", e))
        })?;

        Self::from_parts(
            file.topics,
            file.casual,
            file.sentiments,
            file.phrases,
            file.quiz,
        )
    }

    /// Load a TOML knowledge file from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            topics = kb.topics.len(),
            questions = kb.quiz.len(),
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    fn normalize_keys(&mut self) {
        for topic in &mut self.topics {
            topic.key = sanitize(&topic.key);
        }
        for reply in self.casual.iter_mut().chain(self.sentiments.iter_mut()) {
            reply.key = sanitize(&reply.key);
        }
        for phrase in &mut self.phrases {
            phrase.key = sanitize(&phrase.key);
        }
    }

    /// Validate table contents
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for topic in &self.topics {
            if topic.key.is_empty() {
                return Err(BotError::InvalidKnowledge("topic key must not be empty".to_string()));
            }
            if !seen.insert(topic.key.as_str()) {
                return Err(BotError::InvalidKnowledge(format!(
                    "duplicate topic key '{}'",
                    topic.key
                )));
            }
            if topic.responses.iter().all(|r| r.trim().is_empty()) {
                return Err(BotError::InvalidKnowledge(format!(
                    "topic '{}' needs at least one response",
                    topic.key
                )));
            }
        }

        let keyed = self
            .casual
            .iter()
            .map(|r| ("casual question", r.key.as_str()))
            .chain(self.sentiments.iter().map(|r| ("sentiment", r.key.as_str())))
            .chain(self.phrases.iter().map(|p| ("phrase", p.key.as_str())));
        for (table, key) in keyed {
            if key.is_empty() {
                return Err(BotError::InvalidKnowledge(format!("{} key must not be empty", table)));
            }
        }

        for (i, question) in self.quiz.iter().enumerate() {
            question.validate().map_err(|reason| {
                BotError::InvalidKnowledge(format!("quiz question {}: {}", i + 1, reason))
            })?;
        }

        Ok(())
    }

    pub fn match_topic(&self, input: &str) -> Option<&TopicEntry> {
        first_match(&self.topics, input)
    }

    pub fn match_sentiment(&self, input: &str) -> Option<&KeyedReply> {
        first_match(&self.sentiments, input)
    }

    pub fn match_casual(&self, input: &str) -> Option<&KeyedReply> {
        first_match(&self.casual, input)
    }

    pub fn match_phrase(&self, input: &str) -> Option<&PhraseTrigger> {
        first_match(&self.phrases, input)
    }

    /// Exact topic lookup by key
    pub fn topic(&self, key: &str) -> Option<&TopicEntry> {
        self.topics.iter().find(|t| t.key == key)
    }

    pub fn topics(&self) -> &[TopicEntry] {
        &self.topics
    }

    pub fn casual(&self) -> &[KeyedReply] {
        &self.casual
    }

    pub fn sentiments(&self) -> &[KeyedReply] {
        &self.sentiments
    }

    pub fn phrases(&self) -> &[PhraseTrigger] {
        &self.phrases
    }

    pub fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    pub fn topic_keys(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.key.as_str())
    }

    pub fn casual_keys(&self) -> impl Iterator<Item = &str> {
        self.casual.iter().map(|c| c.key.as_str())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
