use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Select};
use docreview::{
    config::Config,
    logging,
    models::{RecordValue, UploadedFile, WorkflowVariant},
    records::FixtureSource,
    review::{table, ReviewWorkflow},
    submission::{LogSink, SubmitOutcome},
    utils,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docreview")]
#[command(about = "Upload a PDF, review the extracted fields and submit corrections")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the fields extracted for a document kind
    Fields {
        /// Document kind
        #[arg(long, value_enum)]
        variant: WorkflowVariant,
    },
    /// Review a document non-interactively
    Review {
        /// Document kind
        #[arg(long, value_enum)]
        variant: WorkflowVariant,
        /// PDF file to review
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Toggle the selection of every row (header click)
        #[arg(long)]
        all: bool,
        /// Toggle the selection of a row, applied after --all
        #[arg(long = "select", value_name = "KEY")]
        select: Vec<String>,
        /// Override a value: KEY=VALUE or KEY:FIELD=VALUE
        #[arg(long = "set", value_name = "OVERRIDE")]
        overrides: Vec<String>,
        /// Submit the selection and overrides
        #[arg(long)]
        submit: bool,
    },
    /// Review a document with interactive prompts
    Interactive {
        /// Document kind
        #[arg(long, value_enum)]
        variant: WorkflowVariant,
        /// PDF file to review
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration (falls back to defaults if not found)
    let config = Config::load().unwrap_or_default();
    logging::init(&config.logging)?;

    match cli.command {
        Commands::Fields { variant } => {
            println!("{} fields:", variant);
            for (i, record) in FixtureSource::records_for(variant).iter().enumerate() {
                println!("{}. {}: {}", i + 1, record.key, record.display_value());
            }
        }
        Commands::Review {
            variant,
            file,
            all,
            select,
            overrides,
            submit,
        } => {
            let mut workflow = open_workflow(variant, &config, &file).await?;

            if all {
                workflow.toggle_all();
            }
            for key in &select {
                workflow.toggle(key)?;
            }
            for arg in &overrides {
                let (key, field, value) = utils::parse_override(arg)?;
                workflow.set_override(&key, field.as_deref(), value)?;
            }

            println!("{}", table::render(&workflow));

            if submit {
                report_submission(workflow.submit().await?);
            }
        }
        Commands::Interactive { variant, file } => {
            let mut workflow = open_workflow(variant, &config, &file).await?;
            run_interactive(&mut workflow).await?;
        }
    }

    Ok(())
}

/// Build the workflow, accept the file and wait for processing to finish
async fn open_workflow(variant: WorkflowVariant, config: &Config, file: &Path) -> Result<ReviewWorkflow> {
    let mut workflow =
        ReviewWorkflow::from_config(variant, config, &FixtureSource::new(), Arc::new(LogSink::new()))
            .await
            .context("Failed to set up review")?;

    let upload = UploadedFile::from_path(file)?;
    let name = workflow.accept_file(upload)?.name.clone();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message(format!("Processing {}...", name));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let status = workflow.wait_processed().await?;
    if status.is_processed() {
        spinner.finish_with_message(format!("{} successfully processed", name));
    } else {
        spinner.abandon_with_message(format!("{} could not be processed", name));
        anyhow::bail!("Processing did not complete for {}", name);
    }

    Ok(workflow)
}

fn report_submission(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Delivered => println!("Data submitted successfully!"),
        SubmitOutcome::Skipped => println!("Nothing selected, nothing submitted."),
    }
}

async fn run_interactive(workflow: &mut ReviewWorkflow) -> Result<()> {
    const ACTIONS: &[&str] = &["Toggle row", "Toggle all rows", "Edit value", "Submit", "Quit"];

    loop {
        println!("\n{}", table::render(workflow));

        let action = Select::new()
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact()
            .context("Failed to read user input")?;

        match action {
            0 => {
                if let Some(key) = pick_record(workflow)? {
                    workflow.toggle(&key)?;
                }
            }
            1 => {
                workflow.toggle_all();
            }
            2 => {
                if let Some(key) = pick_record(workflow)? {
                    edit_record(workflow, &key)?;
                }
            }
            3 => {
                if !workflow.can_submit() {
                    println!("Select at least one row before submitting.");
                    continue;
                }
                let proceed = Confirm::new()
                    .with_prompt(format!("Submit {} selected rows?", workflow.selection().len()))
                    .default(true)
                    .interact()
                    .context("Failed to read user input")?;
                if proceed {
                    report_submission(workflow.submit().await?);
                }
            }
            _ => return Ok(()),
        }
    }
}

fn pick_record(workflow: &ReviewWorkflow) -> Result<Option<String>> {
    let keys: Vec<&str> = workflow.visible_records().iter().map(|r| r.key.as_str()).collect();
    if keys.is_empty() {
        return Ok(None);
    }

    let index = Select::new()
        .with_prompt("Row")
        .items(&keys)
        .default(0)
        .interact()
        .context("Failed to read user input")?;

    Ok(keys.get(index).map(|k| k.to_string()))
}

fn edit_record(workflow: &mut ReviewWorkflow, key: &str) -> Result<()> {
    let field_names: Vec<String> = match workflow.records().iter().find(|r| r.key == key) {
        Some(record) => match &record.value {
            RecordValue::Fields(fields) => fields.iter().map(|f| f.name.clone()).collect(),
            RecordValue::Single(_) | RecordValue::List(_) => Vec::new(),
        },
        None => return Ok(()),
    };

    let field = if field_names.is_empty() {
        None
    } else {
        let shape = workflow.shape();
        let labels: Vec<String> = field_names
            .iter()
            .map(|name| {
                shape
                    .columns
                    .iter()
                    .find(|(column, _)| *column == name.as_str())
                    .map(|(_, label)| label.to_string())
                    .unwrap_or_else(|| name.clone())
            })
            .collect();
        let index = Select::new()
            .with_prompt("Field")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read user input")?;
        field_names.get(index).cloned()
    };

    let current = workflow.resolve(key, field.as_deref())?;
    let value: String = Input::new()
        .with_prompt(format!("{} value", key))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read user input")?;

    workflow.set_override(key, field.as_deref(), value)?;
    Ok(())
}
