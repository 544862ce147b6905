use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Input;
use docreview::{
    chat::{ChatSession, KeywordResponder, Role},
    config::Config,
    logging,
    models::UploadedFile,
};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docreview-chat")]
#[command(about = "Ask questions about a document")]
#[command(version)]
struct Cli {
    /// PDF document to attach
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    logging::init(&config.logging)?;

    let mut session = ChatSession::from_config(&config, Arc::new(KeywordResponder::new()));

    if let Some(path) = cli.file {
        let file = UploadedFile::from_path(&path)?;
        match session.attach(file) {
            Ok(document) => println!("📄 {} ({} bytes)", document.name, document.size),
            Err(e) => eprintln!("{}", e),
        }
    }

    println!("Ask anything about your documents (empty line to quit).");

    loop {
        let question: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read user input")?;

        if question.trim().is_empty() {
            break;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        let reply = session.send(&question).await?.cloned();
        spinner.finish_and_clear();

        if let Some(message) = reply {
            if message.role == Role::Assistant {
                println!("assistant: {}", message.content);
            }
        }
    }

    Ok(())
}
