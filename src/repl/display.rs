//! Display manager for the chat terminal UI

use colored::*;
use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

const BANNER_WIDTH: usize = 64;

/// Formats and prints everything the chat loop shows
pub struct DisplayManager {
    bot_name: String,
    show_banner: bool,
}

impl DisplayManager {
    pub fn new(bot_name: impl Into<String>) -> Self {
        DisplayManager {
            bot_name: bot_name.into(),
            show_banner: true,
        }
    }

    /// Toggle the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Banner lines, uncolored
    pub fn banner_lines(&self) -> Vec<String> {
        let inner = BANNER_WIDTH - 2;
        let center = |text: &str| {
            let len = text.chars().count();
            let left = inner.saturating_sub(len) / 2;
            let right = inner.saturating_sub(len + left);
            format!("║{}{}{}║", " ".repeat(left), text, " ".repeat(right))
        };

        vec![
            format!("╔{}╗", "═".repeat(inner)),
            center(""),
            center(&format!("WELCOME TO {}", self.bot_name.to_uppercase())),
            center("your cybersecurity awareness assistant"),
            center(""),
            center("Ask cybersecurity questions, get safe browsing tips,"),
            center("and learn how to protect your digital life better!"),
            center(""),
            format!("╚{}╝", "═".repeat(inner)),
        ]
    }

    /// Show welcome banner
    pub fn show_welcome(&self) {
        if !self.show_banner {
            return;
        }
        let _ = self.clear_screen();
        println!();
        for line in self.banner_lines() {
            println!("{}", line.cyan().bold());
        }
        println!();
    }

    /// Show a bot reply; multi-line replies keep their layout
    pub fn show_reply(&self, reply: &str) {
        println!("\n{} {}\n", format!("{}:", self.bot_name).green().bold(), reply);
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!("  {} {}", "•".cyan(), text);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(40).cyan());
    }

    /// Prompt string for a user. Left plain so rustyline measures it correctly.
    pub fn user_prompt(&self, name: &str) -> String {
        format!("{}: ", name)
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lines_share_width() {
        let display = DisplayManager::new("CyberBuddy");
        let lines = display.banner_lines();
        assert!(lines.iter().any(|l| l.contains("WELCOME TO CYBERBUDDY")));
        for line in &lines {
            assert_eq!(line.chars().count(), BANNER_WIDTH, "{}", line);
        }
    }

    #[test]
    fn test_long_bot_name_does_not_panic() {
        let display = DisplayManager::new("x".repeat(200));
        assert!(!display.banner_lines().is_empty());
    }

    #[test]
    fn test_user_prompt_contains_name() {
        let display = DisplayManager::new("CyberBuddy");
        assert_eq!(display.user_prompt("Alice"), "Alice: ");
    }
}
