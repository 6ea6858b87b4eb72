//! Interactive chat loop
//!
//! Asks for the user's name, prints the greeting, then runs
//! `read -> process -> display` until `exit`, Ctrl-D or Ctrl-C.

pub mod display;
pub mod input;

use anyhow::Result;
use tracing::{debug, info};

use crate::dispatcher::{sanitize, Chatbot};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputEvent, InputHandler};

/// Result of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Show the reply and keep reading
    Continue(String),
    /// Show the reply and stop
    Exit(String),
}

impl Turn {
    pub fn reply(&self) -> &str {
        match self {
            Turn::Continue(reply) | Turn::Exit(reply) => reply,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Turn::Exit(_))
    }
}

/// Chat session coordinator
pub struct ChatSession<B: Chatbot> {
    bot: B,
    display: DisplayManager,
    turns: usize,
}

impl<B: Chatbot> ChatSession<B> {
    pub fn new(bot: B, display: DisplayManager) -> Self {
        ChatSession {
            bot,
            display,
            turns: 0,
        }
    }

    /// Feed one line to the bot
    pub fn handle_line(&mut self, line: &str) -> Turn {
        self.turns += 1;
        let reply = self.bot.process(line);
        if sanitize(line) == "exit" {
            Turn::Exit(reply)
        } else {
            Turn::Continue(reply)
        }
    }

    /// Set the user's name and return the welcome plus greeting
    pub fn introduce(&mut self, name: &str) -> String {
        let welcome = self.bot.set_name(name);
        format!("{}\n{}", welcome, self.bot.greeting())
    }

    /// Run the interactive loop on the terminal
    pub fn run(&mut self, known_name: Option<&str>) -> Result<()> {
        let mut input = InputHandler::new()?;
        self.display.show_welcome();

        let name = match known_name {
            Some(name) => name.to_string(),
            None => match input.ask("What's your name? ")? {
                InputEvent::Line(name) => name,
                InputEvent::Eof | InputEvent::Interrupted => return Ok(()),
            },
        };
        let intro = self.introduce(&name);
        self.display.show_reply(&intro);

        let prompt_name = if name.trim().is_empty() { "You" } else { name.trim() };
        input.set_prompt(self.display.user_prompt(prompt_name));
        info!("Chat session started");

        loop {
            let line = match input.read_line()? {
                InputEvent::Line(line) => line,
                InputEvent::Eof | InputEvent::Interrupted => {
                    debug!("Input closed");
                    let farewell = self.handle_line("exit");
                    self.display.show_reply(farewell.reply());
                    break;
                }
            };

            let turn = self.handle_line(&line);
            self.display.show_reply(turn.reply());
            if turn.is_exit() {
                break;
            }
        }

        info!(turns = self.turns, "Chat session ended");
        Ok(())
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn turns(&self) -> usize {
        self.turns
    }
}
