use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trivit::{
    Answer, Conversion, ConversionRequest, JsonFileStore, QuestionEditor, QuestionStore,
    QuestionType, TypeChange, convert, load_questions_from_json, registry,
};
use uuid::Uuid;

/// Exit status when a lossy change was not confirmed.
const EXIT_NEEDS_CONFIRMATION: u8 = 2;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding the stored questions
    #[arg(short, long, global = true, env = "TRIVIT_STORE", default_value = "questions.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List question types with their labels and choice editors
    Types,

    /// Convert an answer between types and print the outcome as JSON
    Convert {
        #[arg(long)]
        from: QuestionType,
        #[arg(long)]
        to: QuestionType,
        /// The answer as JSON: a string, a boolean or an array of choices
        #[arg(long)]
        answer: String,
    },

    /// List an owner's questions
    List {
        #[arg(long, env = "TRIVIT_OWNER")]
        owner: String,
    },

    /// Copy every question from a JSON file into the store
    Import { file: PathBuf },

    /// Change the type of a stored question
    Retype {
        #[arg(long, env = "TRIVIT_OWNER")]
        owner: String,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        to: QuestionType,
        /// Accept a change that discards part of the answer
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut store = JsonFileStore::new(args.store);

    match args.command {
        Command::Types => {
            for descriptor in registry::descriptors() {
                let capability = descriptor
                    .choice_capability
                    .map(|c| c.as_str())
                    .unwrap_or("-");
                println!(
                    "{:<12} {:<38} {}",
                    descriptor.question_type, descriptor.display, capability
                );
            }
        }
        Command::Convert { from, to, answer } => {
            let answer: Answer = serde_json::from_str(&answer).context("answer is not valid JSON")?;
            let conversion = convert(&ConversionRequest {
                from_type: from,
                to_type: to,
                answer: &answer,
            })?;
            println!("{}", serde_json::to_string_pretty(&conversion)?);
        }
        Command::List { owner } => {
            let questions = store.load_questions(&owner)?;
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        Command::Import { file } => {
            let questions = load_questions_from_json(&file)?;
            for question in &questions {
                store.save_question(question)?;
            }
            println!("imported {} questions into {}", questions.len(), store.path().display());
        }
        Command::Retype { owner, id, to, yes } => {
            let question = store
                .load_question(&owner, id)?
                .with_context(|| format!("no question {} for owner {}", id, owner))?;

            let mut editor = QuestionEditor::new(question);
            if let TypeChange::NeedsConfirmation { proposed } = editor.change_type(to)? {
                if !yes {
                    println!("{}", serde_json::to_string_pretty(&Conversion::lossy(proposed))?);
                    eprintln!("changing to {} discards part of the answer; rerun with --yes to accept", to);
                    return Ok(ExitCode::from(EXIT_NEEDS_CONFIRMATION));
                }
                editor.confirm()?;
            }

            store.save_question(editor.question())?;
            println!("{}", serde_json::to_string_pretty(editor.question())?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
