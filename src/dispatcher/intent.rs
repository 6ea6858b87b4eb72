//! Intent classification
//!
//! Turns one utterance into exactly one [`Intent`]. Rule groups are tried in a
//! fixed priority order and the first group that claims the input wins:
//!
//! 1. quiz commands
//! 2. task commands
//! 3. special commands (menu, activity log)
//! 4. sentiment keywords
//! 5. memory features
//! 6. casual questions
//! 7. topics, then "tell me more" follow-ups
//! 8. free phrases
//!
//! Anything left over is `Unrecognized`.

use chrono::NaiveTime;

use super::sanitize::{rsplit_once_ci, strip_command, Utterance};
use crate::knowledge::{KeyedReply, KnowledgeBase, PhraseTrigger, TopicEntry};

const FAVORITE_STATEMENTS: [&str; 2] = ["my favourite topic is", "my favorite topic is"];
const FAVORITE_QUESTIONS: [&str; 4] = [
    "what's my favourite",
    "what is my favourite",
    "what's my favorite",
    "what is my favorite",
];
const SUGGEST_TRIGGERS: [&str; 2] = ["suggest something", "recommend something"];
const NAME_QUESTIONS: [&str; 2] = ["what's my name", "what is my name"];
const FOLLOW_UP_TRIGGERS: [&str; 2] = ["tell me more", "more info"];
const ACTIVITY_TRIGGERS: [&str; 2] = ["show activity log", "what have you done"];

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Intent<'kb> {
    /// Nothing left after sanitizing
    Empty,
    Exit,

    StartQuiz,
    /// `answer <n>`; `None` when `<n>` is not a number
    AnswerQuiz(Option<usize>),

    AddTask(String),
    CompleteTask(String),
    DeleteTask(String),
    ShowTasks,
    /// `remind me to <desc> at <HH:MM>`; `time` is `None` when missing or unreadable
    RemindTask {
        description: String,
        time: Option<NaiveTime>,
    },

    Menu,
    ShowActivity,

    Sentiment(&'kb KeyedReply),

    StoreFavorite(String),
    RecallFavorite,
    Suggest,
    RecallName,

    Casual(&'kb KeyedReply),
    Topic(&'kb TopicEntry),
    FollowUp,
    Phrase(&'kb PhraseTrigger),

    Unrecognized,
}

impl<'kb> Intent<'kb> {
    /// Classify one utterance against the knowledge base
    pub fn classify(utterance: &Utterance, knowledge: &'kb KnowledgeBase) -> Self {
        let text = utterance.normalized.as_str();

        if text.is_empty() {
            return Intent::Empty;
        }
        if text == "exit" {
            return Intent::Exit;
        }

        Self::quiz_command(text)
            .or_else(|| Self::task_command(&utterance.cleaned))
            .or_else(|| Self::special_command(text))
            .or_else(|| knowledge.match_sentiment(text).map(Intent::Sentiment))
            .or_else(|| Self::memory_feature(text))
            .or_else(|| knowledge.match_casual(text).map(Intent::Casual))
            .or_else(|| Self::topic(text, knowledge))
            .or_else(|| knowledge.match_phrase(text).map(Intent::Phrase))
            .unwrap_or(Intent::Unrecognized)
    }

    fn quiz_command(text: &str) -> Option<Self> {
        if text == "quiz" {
            return Some(Intent::StartQuiz);
        }
        let arg = strip_command(text, "answer")?;
        if arg.is_empty() {
            return None;
        }
        let choice = if arg.bytes().all(|b| b.is_ascii_digit()) {
            arg.parse().ok()
        } else {
            None
        };
        Some(Intent::AnswerQuiz(choice))
    }

    /// Task commands read the case-preserving text so descriptions keep their case
    fn task_command(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("show tasks") {
            return Some(Intent::ShowTasks);
        }
        if let Some(desc) = strip_command(text, "add task") {
            return Some(Intent::AddTask(desc.to_string()));
        }
        if let Some(desc) = strip_command(text, "complete task") {
            return Some(Intent::CompleteTask(desc.to_string()));
        }
        if let Some(desc) = strip_command(text, "delete task") {
            return Some(Intent::DeleteTask(desc.to_string()));
        }
        if let Some(rest) = strip_command(text, "remind me to") {
            let (description, time) = if let Some(time) = strip_command(rest, "at") {
                ("", parse_time(time))
            } else {
                match rsplit_once_ci(rest, " at ") {
                    Some((desc, time)) => (desc.trim(), parse_time(time)),
                    None => (rest, None),
                }
            };
            return Some(Intent::RemindTask {
                description: description.to_string(),
                time,
            });
        }
        None
    }

    fn special_command(text: &str) -> Option<Self> {
        if text == "menu" {
            return Some(Intent::Menu);
        }
        if contains_any(text, &ACTIVITY_TRIGGERS) {
            return Some(Intent::ShowActivity);
        }
        None
    }

    fn memory_feature(text: &str) -> Option<Self> {
        for statement in FAVORITE_STATEMENTS {
            if let Some(pos) = text.find(statement) {
                let favorite = text[pos + statement.len()..].trim();
                return Some(Intent::StoreFavorite(favorite.to_string()));
            }
        }
        if contains_any(text, &FAVORITE_QUESTIONS) {
            return Some(Intent::RecallFavorite);
        }
        if contains_any(text, &SUGGEST_TRIGGERS) {
            return Some(Intent::Suggest);
        }
        if contains_any(text, &NAME_QUESTIONS) {
            return Some(Intent::RecallName);
        }
        None
    }

    fn topic(text: &str, knowledge: &'kb KnowledgeBase) -> Option<Self> {
        if let Some(topic) = knowledge.match_topic(text) {
            return Some(Intent::Topic(topic));
        }
        if contains_any(text, &FOLLOW_UP_TRIGGERS) {
            return Some(Intent::FollowUp);
        }
        None
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify<'kb>(input: &str, kb: &'kb KnowledgeBase) -> Intent<'kb> {
        Intent::classify(&Utterance::new(input), kb)
    }

    #[test]
    fn test_empty_and_exit() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(classify("   ", &kb), Intent::Empty);
        assert_eq!(classify("?!", &kb), Intent::Empty);
        assert_eq!(classify("EXIT!", &kb), Intent::Exit);
        assert_ne!(classify("exit now", &kb), Intent::Exit);
    }

    #[test]
    fn test_quiz_commands() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(classify("Quiz", &kb), Intent::StartQuiz);
        assert_eq!(classify("answer 2", &kb), Intent::AnswerQuiz(Some(2)));
        assert_eq!(classify("answer two", &kb), Intent::AnswerQuiz(None));
        assert_eq!(classify("answer -1", &kb), Intent::AnswerQuiz(None));
    }

    #[test]
    fn test_answer_needs_plain_digits() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(classify("answer +2", &kb), Intent::AnswerQuiz(None));
        assert_eq!(classify("answer 3", &kb), Intent::AnswerQuiz(Some(3)));
        assert_eq!(classify("answer", &kb), Intent::Unrecognized);
        assert_eq!(classify("Answer!", &kb), Intent::Unrecognized);
    }

    #[test]
    fn test_quiz_beats_topics() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(classify("answer phishing", &kb), Intent::AnswerQuiz(None));
    }

    #[test]
    fn test_task_commands_keep_case() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(classify("add task Buy milk", &kb), Intent::AddTask("Buy milk".into()));
        assert_eq!(
            classify("Complete Task Buy Milk.", &kb),
            Intent::CompleteTask("Buy Milk".into())
        );
        assert_eq!(classify("delete task x", &kb), Intent::DeleteTask("x".into()));
        assert_eq!(classify("show tasks", &kb), Intent::ShowTasks);
        assert_eq!(classify("add task", &kb), Intent::AddTask(String::new()));
    }

    #[test]
    fn test_task_beats_topic_keywords() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            classify("add task change my password", &kb),
            Intent::AddTask("change my password".into())
        );
    }

    #[test]
    fn test_remind_command() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            classify("Remind me to do homework at 18:00", &kb),
            Intent::RemindTask {
                description: "do homework".into(),
                time: NaiveTime::from_hms_opt(18, 0, 0),
            }
        );
        assert_eq!(
            classify("remind me to do homework at teatime", &kb),
            Intent::RemindTask {
                description: "do homework".into(),
                time: None,
            }
        );
        assert_eq!(
            classify("remind me to at 18:00", &kb),
            Intent::RemindTask {
                description: String::new(),
                time: NaiveTime::from_hms_opt(18, 0, 0),
            }
        );
        assert_eq!(
            classify("remind me to attend training at 09:15", &kb),
            Intent::RemindTask {
                description: "attend training".into(),
                time: NaiveTime::from_hms_opt(9, 15, 0),
            }
        );
        assert_eq!(
            classify("remind me to do homework", &kb),
            Intent::RemindTask {
                description: "do homework".into(),
                time: None,
            }
        );
    }

    #[test]
    fn test_special_commands() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(classify("menu", &kb), Intent::Menu);
        assert_eq!(classify("please show activity log", &kb), Intent::ShowActivity);
        assert_eq!(classify("What have you done?", &kb), Intent::ShowActivity);
        assert_eq!(classify("show me the menu", &kb), Intent::Unrecognized);
    }

    #[test]
    fn test_sentiment_beats_topic() {
        let kb = KnowledgeBase::builtin();
        match classify("I'm worried about scams", &kb) {
            Intent::Sentiment(reply) => assert_eq!(reply.key, "worried"),
            other => panic!("expected sentiment, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_features() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            classify("My favourite topic is Privacy", &kb),
            Intent::StoreFavorite("privacy".into())
        );
        assert_eq!(
            classify("my favorite topic is", &kb),
            Intent::StoreFavorite(String::new())
        );
        assert_eq!(classify("what is my favourite", &kb), Intent::RecallFavorite);
        assert_eq!(classify("What's my favorite topic?", &kb), Intent::RecallFavorite);
        assert_eq!(classify("can you suggest something", &kb), Intent::Suggest);
        assert_eq!(classify("what is my name", &kb), Intent::RecallName);
        assert_eq!(classify("What\u{2019}s my name?", &kb), Intent::RecallName);
    }

    #[test]
    fn test_casual_beats_topic() {
        let kb = KnowledgeBase::builtin();
        match classify("What can I ask about phishing?", &kb) {
            Intent::Casual(reply) => assert_eq!(reply.key, "what can i ask"),
            other => panic!("expected casual question, got {:?}", other),
        }
    }

    #[test]
    fn test_topics_and_follow_up() {
        let kb = KnowledgeBase::builtin();
        match classify("Tell me about PASSWORD safety", &kb) {
            Intent::Topic(topic) => assert_eq!(topic.key, "password"),
            other => panic!("expected topic, got {:?}", other),
        }
        assert_eq!(classify("tell me more", &kb), Intent::FollowUp);
        assert_eq!(classify("more info please", &kb), Intent::FollowUp);
    }

    #[test]
    fn test_phrases() {
        let kb = KnowledgeBase::builtin();
        match classify("give me advice", &kb) {
            Intent::Phrase(phrase) => assert_eq!(phrase.key, "give me advice"),
            other => panic!("expected phrase, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(classify("xyzzy nonsense", &kb), Intent::Unrecognized);
    }
}
