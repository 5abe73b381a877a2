//! RescueTalk command-line entry point.
//!
//! Logs go to stderr so listings and transcriptions on stdout stay pipeable.

mod commands;
mod settings;
mod state;
mod storage;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use commands::{PhraseListing, SpeakTarget};
use rescue_talk_core::{Phrase, SuggestionStatus, TranscriptionDraft};
use settings::default_data_dir;
use state::AppState;
use tokio::task::JoinHandle;
use tracing::info;

const INSTALL_HINT: &str = "Tip: add RescueTalk to your PATH so it is available offline on every shift. \
Run `rescue-talk dismiss-install` to hide this hint.";

#[derive(Debug, Parser)]
#[command(name = "rescue-talk", version, about = "Russian-English phrasebook for emergency responders")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding settings.json and the phrase database
    /// (defaults to $RESCUE_TALK_DATA_DIR, then the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the phrase categories.
    Categories,
    /// List phrases, optionally filtered by category and search text.
    List {
        /// `all` or a category id; defaults to the saved selection.
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive match against Russian and English text.
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Save the category used by `list` when none is given.
    Select { category: String },
    /// Add a custom phrase.
    Add {
        #[arg(long)]
        russian: String,
        #[arg(long)]
        english: String,
        /// Generated from the English text when omitted.
        #[arg(long)]
        transcription: Option<String>,
    },
    /// Remove a custom phrase.
    Remove { id: String },
    /// Speak a phrase's English text aloud.
    Speak {
        /// Phrase id to speak.
        #[arg(required_unless_present = "text", conflicts_with = "text")]
        id: Option<String>,
        /// Speak free English text instead of a phrase.
        #[arg(long)]
        text: Option<String>,
    },
    /// Print the Russian-reader transcription of English text.
    Transcribe {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Stop showing the install hint.
    DismissInstall,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "rescue_talk=debug"
    } else {
        "rescue_talk=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let state = AppState::open(&data_dir)
        .with_context(|| format!("opening data directory {}", data_dir.display()))?;
    info!(data_dir = %data_dir.display(), backend = state.speech.name(), "RescueTalk ready");

    run(&cli, &state).await.map_err(|e| anyhow!(e))
}

async fn run(cli: &Cli, state: &AppState) -> Result<(), String> {
    match &cli.command {
        Command::Categories => {
            let categories = commands::get_categories();
            if cli.json {
                print_json(&categories)?;
            } else {
                for c in &categories {
                    println!("{:<12} {}", c.id.as_str(), c.name);
                }
            }
        }
        Command::List { category, query } => {
            let listing = commands::list_phrases(state, category.clone(), query.clone())?;
            if cli.json {
                print_json(&listing)?;
            } else {
                print_listing(&listing);
            }
            if commands::install_hint_visible(state) {
                eprintln!("\n{INSTALL_HINT}");
            }
        }
        Command::Select { category } => {
            let selected = commands::set_selected_category(state, category)?;
            println!("Selected category: {selected}");
        }
        Command::Add {
            russian,
            english,
            transcription,
        } => {
            let seq_before = state.draft.latest_seq();
            let progress = (!cli.json).then(|| spawn_progress(&state.draft));
            let added =
                commands::add_phrase(state, russian.clone(), english.clone(), transcription.clone())
                    .await;
            if let Some(task) = progress {
                if state.draft.latest_seq() != seq_before {
                    // The final event is already queued; let the task print it.
                    let _ = task.await;
                } else {
                    task.abort();
                }
            }
            let added = added?;
            if cli.json {
                print_json(&added)?;
            } else {
                println!("Added phrase {}", added.id);
                print_phrase(&added);
            }
        }
        Command::Remove { id } => {
            commands::delete_phrase(state, id)?;
            println!("Removed phrase {id}");
        }
        Command::Speak { id, text } => {
            let target = match (id, text) {
                (_, Some(text)) => SpeakTarget::Text(text.clone()),
                (Some(id), None) => SpeakTarget::Phrase(id.clone()),
                (None, None) => return Err("nothing to speak".into()),
            };
            let spoken = commands::speak(state, target)?;
            println!("Spoke: {spoken}");
        }
        Command::Transcribe { words } => {
            let text = words.join(" ");
            let transcription = commands::transcribe(&text);
            if cli.json {
                print_json(&serde_json::json!({ "text": text, "transcription": transcription }))?;
            } else {
                println!("{transcription}");
            }
        }
        Command::DismissInstall => {
            commands::dismiss_install_prompt(state)?;
            println!("Install hint hidden.");
        }
    }
    Ok(())
}

/// Mirror draft events to stderr until one suggestion settles.
///
/// Resolves to the suggested transcription, or `None` if it was discarded.
fn spawn_progress(draft: &TranscriptionDraft) -> JoinHandle<Option<String>> {
    let mut rx = draft.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match event.status {
                SuggestionStatus::Generating => eprintln!("generating transcription…"),
                SuggestionStatus::Ready => {
                    if let Some(t) = &event.transcription {
                        eprintln!("suggested: {t}");
                    }
                    return event.transcription;
                }
                SuggestionStatus::Discarded => return None,
            }
        }
        None
    })
}

fn print_listing(listing: &PhraseListing) {
    if listing.phrases.is_empty() {
        println!("No phrases found.");
        return;
    }
    for phrase in &listing.phrases {
        print_phrase(phrase);
    }
}

fn print_phrase(phrase: &Phrase) {
    println!("[{}] {:<10} {}", phrase.id, phrase.category.as_str(), phrase.russian);
    println!("    {}  {}", phrase.english, phrase.transcription);
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn progress_task_reports_the_ready_suggestion() {
        let draft = TranscriptionDraft::with_delay(Duration::from_millis(1));
        let task = spawn_progress(&draft);

        let suggested = draft.suggest("Stay calm").await;
        assert!(suggested.is_some());
        assert_eq!(task.await.unwrap(), suggested);
    }

    #[tokio::test]
    async fn progress_task_finishes_when_suggestion_is_superseded() {
        let draft = TranscriptionDraft::with_delay(Duration::from_millis(20));
        let task = spawn_progress(&draft);

        let (first, second) = tokio::join!(draft.suggest("water"), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            draft.suggest("fire escape").await
        });
        assert!(first.is_none());
        assert!(second.is_some());
        // The task settles on the first request's discard event.
        assert_eq!(task.await.unwrap(), None);
    }
}
