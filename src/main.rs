//! CyberBuddy - Main CLI Entry Point

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

use cyberbuddy::{
    cli::{Args, Commands, Config},
    repl::{ChatSession, DisplayManager},
    Dispatcher, KnowledgeBase,
};

fn main() {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.verbosity().log_filter()));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", args);

    if let Err(err) = run(&args) {
        eprintln!("Oops! Something went wrong while running the chatbot.");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Err(msg) = args.validate() {
        bail!(msg);
    }

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    match args.command() {
        Commands::Chat => run_chat(args, &config),
        Commands::Ask { lines } => run_ask(args, &config, &lines),
        Commands::Topics => show_topics(&config),
        Commands::Config { init } => {
            if init {
                init_config(args)
            } else {
                show_config(args, &config)
            }
        }
    }
}

fn load_knowledge(config: &Config) -> Result<Arc<KnowledgeBase>> {
    let knowledge = match config.knowledge_path() {
        Some(path) => KnowledgeBase::load_from_file(&path)
            .with_context(|| format!("Failed to load knowledge file {}", path.display()))?,
        None => KnowledgeBase::builtin(),
    };
    Ok(Arc::new(knowledge))
}

fn build_bot(args: &Args, config: &Config) -> Result<Dispatcher> {
    let knowledge = load_knowledge(config)?;
    let bot = match args.seed.or(config.session.seed) {
        Some(seed) => Dispatcher::with_seed(knowledge, seed),
        None => Dispatcher::new(knowledge),
    };
    Ok(bot.with_fallback_name(config.bot.fallback_user_name.as_str()))
}

/// Interactive chat on the terminal
fn run_chat(args: &Args, config: &Config) -> Result<()> {
    let bot = build_bot(args, config)?;
    let display = DisplayManager::new(config.bot.name.as_str())
        .with_banner(config.display.show_banner && args.verbosity().show_banner());

    let mut session = ChatSession::new(bot, display);
    session.run(args.name.as_deref())
}

/// One-shot mode: every argument is one line of input
fn run_ask(args: &Args, config: &Config, lines: &[String]) -> Result<()> {
    let mut bot = build_bot(args, config)?;
    if let Some(name) = &args.name {
        bot.set_name(name);
    }

    for line in lines {
        println!("{}\n", bot.process(line));
        if cyberbuddy::sanitize(line) == "exit" {
            break;
        }
    }
    Ok(())
}

fn show_topics(config: &Config) -> Result<()> {
    let knowledge = load_knowledge(config)?;
    let display = DisplayManager::new(config.bot.name.as_str());

    display.show_section("Cybersecurity topics");
    for key in knowledge.topic_keys() {
        display.show_bullet(key);
    }
    display.show_section("Casual questions");
    for key in knowledge.casual_keys() {
        display.show_bullet(key);
    }
    println!();
    display.show_info(&format!(
        "{} quiz question(s) loaded",
        knowledge.quiz_questions().len()
    ));
    Ok(())
}

fn config_path(args: &Args) -> Result<PathBuf> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => Config::default_path().context("Could not determine the home directory"),
    }
}

fn init_config(args: &Args) -> Result<()> {
    let path = config_path(args)?;
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    Config::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    println!("CyberBuddy Configuration");
    match config_path(args) {
        Ok(path) if path.exists() => println!("  File: {}", path.display()),
        _ => println!("  File: (none, using defaults)"),
    }
    println!();

    println!("Bot:");
    println!("  Name:           {}", config.bot.name);
    println!("  Fallback user:  {}", config.bot.fallback_user_name);
    println!();

    println!("Session:");
    match args.seed.or(config.session.seed) {
        Some(seed) => println!("  Seed:           {}", seed),
        None => println!("  Seed:           random"),
    }
    println!();

    println!("Knowledge:");
    match config.knowledge_path() {
        Some(path) => println!("  File:           {}", path.display()),
        None => println!("  File:           built-in"),
    }
    println!();

    println!("Display:");
    println!("  Color output:   {}", if config.display.color_output && !args.no_color { "enabled" } else { "disabled" });
    println!("  Banner:         {}", if config.display.show_banner { "enabled" } else { "disabled" });
    println!("  Verbosity:      {}", args.verbosity().as_str());
    println!();

    Ok(())
}
