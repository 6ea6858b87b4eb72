//! Help menu text

use std::fmt::Write;

use crate::knowledge::KnowledgeBase;

const TASK_COMMANDS: [&str; 5] = [
    "add task [description]",
    "complete task [description]",
    "delete task [description]",
    "remind me to [description] at [HH:MM]",
    "show tasks",
];

const QUIZ_COMMANDS: [&str; 2] = [
    "quiz — Start the cybersecurity quiz",
    "answer [number] — Answer a quiz question",
];

const EXAMPLE_PHRASES: [&str; 5] = [
    "'I'm worried about scams'",
    "'My favourite topic is privacy'",
    "'Tell me more'",
    "'Remind me to update my antivirus at 18:00'",
    "'Show activity log'",
];

/// Render the help menu: every topic and casual question, then the commands
pub fn render_menu(knowledge: &KnowledgeBase) -> String {
    let mut out = String::from("📚 Here are some things you can ask me about:\n");

    section(&mut out, "🔐 Cybersecurity Topics:", knowledge.topic_keys());
    section(&mut out, "💬 Casual Questions:", knowledge.casual_keys());
    section(&mut out, "🛠️ Task Commands:", TASK_COMMANDS);
    section(&mut out, "🎮 Fun & Interactive:", QUIZ_COMMANDS);
    section(&mut out, "💡 Example Phrases:", EXAMPLE_PHRASES);

    out.push_str("\nType 'exit' to leave.");
    out
}

fn section<'a>(out: &mut String, title: &str, items: impl IntoIterator<Item = &'a str>) {
    let _ = writeln!(out, "\n{}", title);
    for item in items {
        let _ = writeln!(out, "• {}", item);
    }
}
