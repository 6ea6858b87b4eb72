//! Dispatcher: one line in, one reply out
//!
//! The dispatcher owns every piece of session state (memory, activity log, quiz,
//! task list, last topic) and borrows the knowledge base through an `Arc`.
//! Each call to [`Dispatcher::process`] classifies the input into an [`Intent`],
//! runs the matching handler and records one activity entry.
//!
//! All methods take `&mut self`, so only one turn can be in flight. Hosts that
//! share a bot across threads wrap it in a `Mutex`.

pub mod intent;
pub mod menu;
pub mod sanitize;

use chrono::{Local, NaiveTime, Timelike};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub use intent::Intent;
pub use menu::render_menu;
pub use sanitize::{clean, sanitize, Utterance};

use crate::activity::ActivityLog;
use crate::errors::Result;
use crate::knowledge::{KnowledgeBase, PhraseAction, TopicEntry};
use crate::memory::{MemoryKey, SessionMemory};
use crate::quiz::Quiz;
use crate::tasks::{TaskListing, TaskStore};

/// Name used until the user introduces themselves
pub const DEFAULT_FALLBACK_NAME: &str = "friend";

const CLARIFY_REPLY: &str = "I didn't quite understand that. Could you rephrase?";
const FALLBACK_REPLY: &str = "I'm not sure I understand. Try asking something else, or type 'menu'.";
const INVALID_ANSWER_REPLY: &str = "Invalid answer format. Use 'answer 1', 'answer 2', etc.";

/// What every front-end needs from a bot
pub trait Chatbot {
    /// Handle one line of user input
    fn process(&mut self, input: &str) -> String;

    /// Remember the user's name; returns a welcome line
    fn set_name(&mut self, name: &str) -> String;

    /// Time-of-day greeting
    fn greeting(&self) -> String;
}

/// Greeting for an hour of the day (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Rule-based response dispatcher
pub struct Dispatcher<R = StdRng> {
    knowledge: Arc<KnowledgeBase>,
    memory: SessionMemory,
    activity: ActivityLog,
    quiz: Quiz,
    tasks: TaskStore,
    last_topic: Option<String>,
    fallback_name: String,
    rng: R,
}

impl Dispatcher<StdRng> {
    /// Dispatcher with an entropy-seeded RNG
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_rng(knowledge, StdRng::from_entropy())
    }

    /// Dispatcher whose variant choices are reproducible
    pub fn with_seed(knowledge: Arc<KnowledgeBase>, seed: u64) -> Self {
        Self::with_rng(knowledge, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dispatcher<R> {
    pub fn with_rng(knowledge: Arc<KnowledgeBase>, rng: R) -> Self {
        let quiz = Quiz::new(knowledge.quiz_questions().to_vec()).unwrap_or_else(|err| {
            warn!(%err, "Quiz disabled");
            Quiz::default()
        });
        Self {
            knowledge,
            memory: SessionMemory::new(),
            activity: ActivityLog::new(),
            quiz,
            tasks: TaskStore::new(),
            last_topic: None,
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
            rng,
        }
    }

    /// Override the name used before `set_name` is called
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.fallback_name = name.trim().to_string();
        }
        self
    }

    /// Handle one line of user input and return the reply
    pub fn process(&mut self, raw: &str) -> String {
        let utterance = Utterance::new(raw);
        let knowledge = Arc::clone(&self.knowledge);
        let intent = Intent::classify(&utterance, &knowledge);
        debug!(input = %utterance.normalized, ?intent, "Classified input");

        match intent {
            Intent::Empty => CLARIFY_REPLY.to_string(),
            Intent::Exit => format!("Thanks for chatting, {}! Stay safe online 👋", self.user_name()),

            Intent::StartQuiz => self.start_quiz(),
            Intent::AnswerQuiz(choice) => self.answer_quiz(choice),

            Intent::AddTask(description) => self.add_task(&description),
            Intent::CompleteTask(description) => self.complete_task(&description),
            Intent::DeleteTask(description) => self.delete_task(&description),
            Intent::ShowTasks => self.show_tasks(),
            Intent::RemindTask { description, time } => self.remind(&description, time),

            Intent::Menu => {
                self.log("Displayed the help menu");
                render_menu(&knowledge)
            }
            // Rendered before anything is logged so the snapshot is not self-referential
            Intent::ShowActivity => self.activity.render(),

            Intent::Sentiment(entry) => {
                self.log(format!("Detected sentiment: {}", entry.key));
                entry.reply.clone()
            }

            Intent::StoreFavorite(topic) => self.store_favorite(&topic),
            Intent::RecallFavorite => self.recall_favorite(),
            Intent::Suggest => self.suggest(&knowledge),
            Intent::RecallName => self.recall_name(),

            Intent::Casual(entry) => {
                self.log(format!("Answered casual question: {}", entry.key));
                entry.reply.clone()
            }
            Intent::Topic(topic) => {
                self.last_topic = Some(topic.key.clone());
                self.log(format!("Responded to topic: {}", topic.key));
                self.pick_variant(topic)
            }
            Intent::FollowUp => self.follow_up(&knowledge),
            Intent::Phrase(phrase) => {
                self.log(format!("Executed phrase command: {}", phrase.key));
                match &phrase.action {
                    PhraseAction::Reply(text) => text.clone(),
                    PhraseAction::ShowMenu => render_menu(&knowledge),
                }
            }

            Intent::Unrecognized => {
                self.log("Input not recognized.");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Remember the user's name. Blank names keep the fallback.
    pub fn set_name(&mut self, name: &str) -> String {
        if !self.memory.remember(MemoryKey::Name, name) {
            warn!("Ignoring blank user name");
            return format!(
                "I didn't catch your name, so I'll call you {}. Ask me anything about cybersecurity or type 'menu'.",
                self.fallback_name
            );
        }

        let name = self.user_name().to_string();
        info!(%name, "User introduced themselves");
        self.log(format!("Greeted user: {}", name));
        format!(
            "Nice to meet you, {}! Ask me anything about cybersecurity or type 'menu'.",
            name
        )
    }

    /// Greeting for the current local time
    pub fn greeting(&self) -> String {
        self.greeting_at(Local::now().hour())
    }

    /// Greeting for a given hour of the day
    pub fn greeting_at(&self, hour: u32) -> String {
        format!(
            "{}, {}! I'm here to help you with cybersecurity. Ask me anything or type 'menu'.",
            greeting_for_hour(hour),
            self.user_name()
        )
    }

    /// The user's name, or the fallback when none was given
    pub fn user_name(&self) -> &str {
        self.memory.recall_or(MemoryKey::Name, &self.fallback_name)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    pub fn last_topic(&self) -> Option<&str> {
        self.last_topic.as_deref()
    }

    fn log(&mut self, message: impl Into<String>) {
        self.activity.record(message);
    }

    fn pick_variant(&mut self, topic: &TopicEntry) -> String {
        let variants: Vec<&String> = topic
            .responses
            .iter()
            .filter(|r| !r.trim().is_empty())
            .collect();
        variants
            .choose(&mut self.rng)
            .map(|r| r.to_string())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }

    fn start_quiz(&mut self) -> String {
        self.quiz.reset();
        match self.quiz.next() {
            Ok(question) => {
                let rendered = question.to_string();
                info!(total = self.quiz.total(), "Quiz started");
                self.log("Started the quiz");
                rendered
            }
            Err(_) => {
                self.log("Quiz requested but no questions are loaded");
                "No quiz questions are available right now.".to_string()
            }
        }
    }

    fn answer_quiz(&mut self, choice: Option<usize>) -> String {
        if !self.quiz.has_next() {
            self.log("Quiz answer received with no question pending");
            return "There's no question waiting for an answer. Type 'quiz' to start a new round."
                .to_string();
        }

        let choice = match choice.filter(|c| self.quiz.is_valid_choice(*c)) {
            Some(choice) => choice,
            None => {
                warn!("Rejected quiz answer");
                self.log("Rejected quiz answer: invalid format");
                return INVALID_ANSWER_REPLY.to_string();
            }
        };

        self.score_answer(choice).unwrap_or_else(|err| {
            if err.is_contract_violation() {
                warn!(%err, "Quiz state error");
            } else {
                error!(%err, "Quiz data error");
            }
            self.log("Quiz state error");
            "Something went wrong with the quiz. Type 'quiz' to start again.".to_string()
        })
    }

    fn score_answer(&mut self, choice: usize) -> Result<String> {
        let number = self.quiz.index() + 1;
        let outcome = self.quiz.answer(choice)?;

        if self.quiz.has_next() {
            let next = self.quiz.next()?.to_string();
            let verdict = if outcome.correct { "correct" } else { "incorrect" };
            self.log(format!("Answered quiz question {} ({})", number, verdict));
            Ok(format!("{}\n\n{}", outcome.feedback, next))
        } else {
            let summary = self.quiz.final_feedback()?;
            info!(score = self.quiz.score(), total = self.quiz.total(), "Quiz finished");
            self.log(format!(
                "Finished the quiz: {}/{}",
                self.quiz.score(),
                self.quiz.total()
            ));
            Ok(format!("{}\n\n{}", outcome.feedback, summary))
        }
    }

    fn add_task(&mut self, description: &str) -> String {
        match self.tasks.add(description) {
            Some(id) => {
                info!(%id, description, "Task added");
                self.log(format!("Added task: {}", description));
                format!("✅ Task added: {}", description)
            }
            None => {
                self.log("Rejected task without a description");
                "Please describe the task, e.g. 'add task update my passwords'.".to_string()
            }
        }
    }

    fn complete_task(&mut self, description: &str) -> String {
        let found = self.tasks.find_by_description(description).map(|t| t.id);
        match found.and_then(|id| self.tasks.complete(id)) {
            Some(task) => {
                let reply = format!("✅ Marked as completed: {}", task.description);
                self.log(format!("Completed task: {}", description));
                reply
            }
            None => self.task_not_found(description),
        }
    }

    fn delete_task(&mut self, description: &str) -> String {
        let found = self.tasks.find_by_description(description).map(|t| t.id);
        match found.and_then(|id| self.tasks.delete(id)) {
            Some(task) => {
                self.log(format!("Deleted task: {}", task.description));
                format!("🗑️ Deleted task: {}", task.description)
            }
            None => self.task_not_found(description),
        }
    }

    fn task_not_found(&mut self, description: &str) -> String {
        if description.is_empty() {
            self.log("Task command without a description");
            return "Which task? Try 'complete task [description]' or 'show tasks'.".to_string();
        }
        self.log(format!("Task not found: {}", description));
        "❌ Task not found.".to_string()
    }

    fn show_tasks(&mut self) -> String {
        match self.tasks.list() {
            TaskListing::Empty => {
                self.log("Listed tasks: none");
                "📭 No tasks found.".to_string()
            }
            TaskListing::Items(items) => {
                self.log(format!("Listed {} task(s)", items.len()));
                let mut out = String::from("📋 Your tasks:");
                for item in items {
                    out.push_str("\n• ");
                    out.push_str(&item);
                }
                out
            }
        }
    }

    fn remind(&mut self, description: &str, time: Option<NaiveTime>) -> String {
        if description.is_empty() {
            self.log("Reminder without a description");
            return "What should I remind you about? Try 'remind me to update my antivirus at 18:00'."
                .to_string();
        }
        let Some(time) = time else {
            self.log("Reminder with an unreadable time");
            return format!(
                "I couldn't read the time. Use HH:MM, e.g. 'remind me to {} at 18:00'.",
                description
            );
        };

        let when = Local::now().date_naive().and_time(time);
        let existing = self.tasks.find_by_description(description).map(|t| t.id);
        let id = existing.or_else(|| self.tasks.add(description));
        let task = id.and_then(|id| self.tasks.set_reminder(id, when));

        match task {
            Some(task) => {
                let reply = format!(
                    "⏰ Reminder set: '{}' at {}",
                    task.description,
                    when.format("%H:%M")
                );
                info!(description, %when, "Reminder set");
                self.log(format!("Set reminder: {} at {}", description, when.format("%H:%M")));
                reply
            }
            None => self.task_not_found(description),
        }
    }

    fn store_favorite(&mut self, topic: &str) -> String {
        if !self.memory.remember(MemoryKey::Favorite, topic) {
            self.log("Favourite topic statement without a topic");
            return "Which topic is your favourite? Try 'My favourite topic is privacy'.".to_string();
        }
        self.log(format!("Stored favourite topic: {}", topic));
        format!("Great! I'll remember that you're interested in {}.", topic)
    }

    fn recall_favorite(&mut self) -> String {
        self.log("Recalled favourite topic");
        match self.memory.favorite_topic() {
            Some(topic) => format!("You told me your favourite topic is {}.", topic),
            None => "I don't think you've told me your favourite topic yet.".to_string(),
        }
    }

    fn suggest(&mut self, knowledge: &KnowledgeBase) -> String {
        let Some(favorite) = self.memory.favorite_topic().map(str::to_string) else {
            self.log("Suggestion requested without a favourite topic");
            return "Let me know your favourite topic first by saying: 'My favourite topic is ...'"
                .to_string();
        };

        self.log(format!("Suggested something about: {}", favorite));
        match knowledge.match_topic(&favorite) {
            Some(topic) => {
                self.last_topic = Some(topic.key.clone());
                let tip = self.pick_variant(topic);
                format!("Since you're interested in {}, here's a tip: {}", favorite, tip)
            }
            None => format!(
                "Since you're interested in {}, check your settings on that today.",
                favorite
            ),
        }
    }

    fn recall_name(&mut self) -> String {
        self.log("Recalled user name");
        match self.memory.user_name() {
            Some(name) => format!("Your name is {}.", name),
            None => "You haven't told me your name yet.".to_string(),
        }
    }

    fn follow_up(&mut self, knowledge: &KnowledgeBase) -> String {
        let topic = self
            .last_topic
            .as_deref()
            .and_then(|key| knowledge.topic(key));

        match topic {
            Some(topic) => {
                self.log(format!("Provided more info on: {}", topic.key));
                self.pick_variant(topic)
            }
            None => {
                self.log("Asked which topic to expand on");
                "Could you please tell me what topic you'd like to hear more about?".to_string()
            }
        }
    }
}

impl<R: Rng> Chatbot for Dispatcher<R> {
    fn process(&mut self, input: &str) -> String {
        Dispatcher::process(self, input)
    }

    fn set_name(&mut self, name: &str) -> String {
        Dispatcher::set_name(self, name)
    }

    fn greeting(&self) -> String {
        Dispatcher::greeting(self)
    }
}
