//! Session memory: facts the user tells the bot during one run
//!
//! Holds the user's name and favourite topic. Nothing here outlives the process.

use std::collections::HashMap;

/// Keys the bot knows how to remember
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryKey {
    Name,
    Favorite,
}

impl MemoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryKey::Name => "name",
            MemoryKey::Favorite => "favorite",
        }
    }
}

/// Per-session key/value store
#[derive(Debug, Clone, Default)]
pub struct SessionMemory {
    values: HashMap<MemoryKey, String>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, trimming surrounding whitespace. Blank values are ignored.
    ///
    /// Returns true if the value was stored.
    pub fn remember(&mut self, key: MemoryKey, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.values.insert(key, value.to_string());
        true
    }

    pub fn recall(&self, key: MemoryKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Recall a value or fall back to the given text
    pub fn recall_or<'a>(&'a self, key: MemoryKey, fallback: &'a str) -> &'a str {
        self.recall(key).unwrap_or(fallback)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.recall(MemoryKey::Name)
    }

    pub fn favorite_topic(&self) -> Option<&str> {
        self.recall(MemoryKey::Favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_memory() {
        let memory = SessionMemory::new();
        assert!(memory.user_name().is_none());
        assert!(memory.favorite_topic().is_none());
        assert_eq!(memory.recall_or(MemoryKey::Name, "friend"), "friend");
    }

    #[test]
    fn test_remember_and_recall() {
        let mut memory = SessionMemory::new();
        assert!(memory.remember(MemoryKey::Name, "  Alice "));
        assert!(memory.remember(MemoryKey::Favorite, "privacy"));

        assert_eq!(memory.user_name(), Some("Alice"));
        assert_eq!(memory.favorite_topic(), Some("privacy"));
    }

    #[test]
    fn test_blank_values_ignored() {
        let mut memory = SessionMemory::new();
        memory.remember(MemoryKey::Favorite, "scams");
        assert!(!memory.remember(MemoryKey::Favorite, "   "));
        assert_eq!(memory.favorite_topic(), Some("scams"));
    }

    #[test]
    fn test_overwrite() {
        let mut memory = SessionMemory::new();
        memory.remember(MemoryKey::Favorite, "scams");
        memory.remember(MemoryKey::Favorite, "phishing");
        assert_eq!(memory.favorite_topic(), Some("phishing"));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(MemoryKey::Name.as_str(), "name");
        assert_eq!(MemoryKey::Favorite.as_str(), "favorite");
    }
}
