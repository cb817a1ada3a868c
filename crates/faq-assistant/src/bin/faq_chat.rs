//! Terminal chat front-end for the FAQ assistant
//!
//! Run with: cargo run -p faq-assistant --bin faq-chat -- --kb-path knowledge_data.json

use anyhow::Context;
use clap::Parser;
use console::style;
use faq_assistant::{
    AssistantConfig, ChatHistory, ChatTurn, KnowledgeBase, KnowledgeStore, Responder, Speaker,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CLEARED_NOTICE: &str = "Chat history cleared. How can I assist you now?";

#[derive(Debug, Parser)]
#[command(name = "faq-chat", version, about = "Banking FAQ assistant in the terminal")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Knowledge file path (overrides the configuration)
    #[arg(long)]
    kb_path: Option<PathBuf>,
}

/// What a slash command asks the chat loop to do
enum CommandOutcome {
    Handled,
    Ask(String),
    Quit,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faq_assistant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let mut config = AssistantConfig::load(args.config.as_deref())?;
    if let Some(kb_path) = args.kb_path {
        config.store.path = kb_path;
    }

    let store = KnowledgeStore::new(&config.store.path);
    let mut kb = store
        .load()
        .with_context(|| format!("loading knowledge from {}", config.store.path.display()))?;

    let stats = kb.stats();
    tracing::info!("Knowledge loaded");
    tracing::info!("  - Store: {}", store.path().display());
    tracing::info!("  - Entries: {} ({} topics)", stats.total_entries, stats.topics);

    let responder = Responder::new(store);
    let mut history = ChatHistory::with_greeting(config.chat.greeting.clone());
    history.iter().for_each(print_turn);
    println!("{}", style("Type /help for commands.").dim());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("{} ", style(">").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let question = match line.strip_prefix('/') {
            Some(command) => match run_command(command, &config, &mut history, &kb) {
                CommandOutcome::Handled => continue,
                CommandOutcome::Quit => break,
                CommandOutcome::Ask(topic) => {
                    print_turn(&ChatTurn::user(topic.clone()));
                    topic
                }
            },
            None => line.to_string(),
        };
        history.push(ChatTurn::user(question.clone()));

        let response = responder.respond(&question, kb)?;
        kb = response.knowledge;

        let reply = ChatTurn::assistant(response.reply.render());
        print_turn(&reply);
        history.push(reply);

        if response.intent.ends_session() {
            println!("{}", style("Session ended.").dim());
            break;
        }
    }

    Ok(())
}

fn run_command(
    command: &str,
    config: &AssistantConfig,
    history: &mut ChatHistory,
    kb: &KnowledgeBase,
) -> CommandOutcome {
    let mut parts = command.split_whitespace();
    match (parts.next().unwrap_or_default(), parts.next()) {
        ("faq", None) => {
            for (i, topic) in config.chat.quick_faqs.iter().enumerate() {
                println!("  {}. {}", i + 1, title_case(topic));
            }
            println!("{}", style("Use /faq <number> to ask one.").dim());
            CommandOutcome::Handled
        }
        ("faq", Some(n)) => {
            let topic = n
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| config.chat.quick_faqs.get(i));
            match topic {
                Some(topic) => CommandOutcome::Ask(topic.clone()),
                None => {
                    println!("No quick FAQ numbered '{}'.", n);
                    CommandOutcome::Handled
                }
            }
        }
        ("clear", _) => {
            history.clear(CLEARED_NOTICE);
            history.iter().for_each(print_turn);
            CommandOutcome::Handled
        }
        ("history", _) => {
            history.iter().for_each(print_turn);
            CommandOutcome::Handled
        }
        ("stats", _) => {
            let stats = kb.stats();
            println!(
                "{} entries: {} facts, {} topics",
                stats.total_entries, stats.facts, stats.topics
            );
            CommandOutcome::Handled
        }
        ("quit", _) | ("exit", _) => CommandOutcome::Quit,
        ("help", _) => {
            println!("  /faq            list quick FAQ topics");
            println!("  /faq <number>   ask a quick FAQ topic");
            println!("  /clear          clear chat history");
            println!("  /history        show chat history");
            println!("  /stats          knowledge statistics");
            println!("  /quit           leave");
            println!("  learn question: answer   teach a new fact");
            CommandOutcome::Handled
        }
        (other, _) => {
            println!("Unknown command '/{}'. Type /help for commands.", other);
            CommandOutcome::Handled
        }
    }
}

fn print_turn(turn: &ChatTurn) {
    let label = match turn.speaker {
        Speaker::Assistant => style(turn.speaker.to_string()).green().bold(),
        Speaker::User => style(turn.speaker.to_string()).blue().bold(),
    };
    if turn.text.contains('\n') {
        println!("{}:\n{}", label, turn.text);
    } else {
        println!("{}: {}", label, turn.text);
    }
}

fn title_case(topic: &str) -> String {
    topic
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
