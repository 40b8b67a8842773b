use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chat_script::summary::summarize_speakers;
use chat_script::{ConversationParser, Roster};

#[derive(Parser)]
#[command(
    name = "chat-script",
    version,
    about = "Turn 'Speaker: message' scripts into chat conversations"
)]
struct Cli {
    /// JSON file overriding the color palette, avatars or narrator color
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a script and report what it contains
    Check {
        /// Script file path ('-' for stdin)
        script: PathBuf,
    },
    /// Print the conversation as it would be displayed
    Show {
        /// Script file path ('-' for stdin)
        script: PathBuf,
    },
    /// Print the parsed messages as JSON
    Parse {
        /// Script file path ('-' for stdin)
        script: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the identity each speaker name resolves to
    Speaker {
        /// Speaker names as they would appear in a script
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let cli = Cli::parse();

    let roster = match &cli.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::default(),
    };
    let parser = ConversationParser::new(roster);

    match cli.command {
        Commands::Check { script } => {
            let content = read_script(&script)?;
            let conversation = parser.parse_script(&content);
            let speakers = summarize_speakers(&conversation.messages);
            println!(
                "Script '{}' is valid: {} messages, {} speakers",
                script.display(),
                conversation.messages.len(),
                speakers.len()
            );
            if let Some(title) = &conversation.front_matter.title {
                println!("Title: {title}");
            }
            Ok(())
        }
        Commands::Show { script } => {
            let content = read_script(&script)?;
            let conversation = parser.parse_script(&content);

            match &conversation.front_matter.title {
                Some(title) => println!("=== {title} ===\n"),
                None => println!("=== {} ===\n", script.display()),
            }
            if conversation.messages.is_empty() {
                println!("(no messages)");
                return Ok(());
            }

            for (i, msg) in conversation.messages.iter().enumerate() {
                print!("--- {} {} [{}] {}", i + 1, msg.name, msg.initials, msg.color);
                match &msg.avatar {
                    Some(avatar) => println!(" {avatar}"),
                    None => println!(),
                }
                for line in msg.message.lines() {
                    println!("  | {line}");
                }
                println!();
            }

            println!("Speakers:");
            for speaker in summarize_speakers(&conversation.messages) {
                println!(
                    "  {} ({}) {} turn{}",
                    speaker.identity.name,
                    speaker.identity.color,
                    speaker.turns,
                    if speaker.turns == 1 { "" } else { "s" }
                );
            }
            Ok(())
        }
        Commands::Parse { script, pretty } => {
            let content = read_script(&script)?;
            let messages = parser.parse(&content);
            let json = if pretty {
                serde_json::to_string_pretty(&messages)?
            } else {
                serde_json::to_string(&messages)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Speaker { names } => {
            let identities: Vec<_> = names
                .iter()
                .map(|name| parser.deriver().derive(name.trim()))
                .collect();
            println!("{}", serde_json::to_string_pretty(&identities)?);
            Ok(())
        }
    }
}

fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read script from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script '{}'", path.display()))
}
