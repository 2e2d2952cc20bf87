//! Voice Search - policyholder search by voice command
//!
//! Terminal front end: typed lines stand in for recognizer transcripts.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voice_search::config::Config;
use voice_search::grammar::{GrammarTable, RecognitionContext};
use voice_search::i18n::Translations;
use voice_search::recognition::{ChannelRecognizer, RecognitionEvent};
use voice_search::search::SearchPanel;
use voice_search::{audit, FailureKind, Language, RecognitionOutcome, RecognitionService};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Recognition language (en, fr)
    #[arg(short, long)]
    lang: Option<Language>,

    /// Interpret a single transcript and exit
    #[arg(short, long)]
    transcript: Option<String>,

    /// Print the recognizer grammar and exit
    #[arg(long)]
    grammar: bool,
}

/// Everything the front end needs between sessions
struct App {
    config: Config,
    translations: Translations,
    events: mpsc::Sender<RecognitionEvent>,
    service: RecognitionService,
    panel: SearchPanel,
}

impl App {
    fn say(&self, key: &str) {
        println!("{}", self.translations.tr(self.panel.language(), key));
    }

    fn grammar(&self) -> String {
        GrammarTable::builtin()
            .lookup(self.panel.language(), RecognitionContext::PersonSearch)
            .map(|entry| entry.to_jsgf())
            .unwrap_or_default()
    }

    /// Feed events to the recognizer and run one session
    async fn search(&mut self, events: Vec<RecognitionEvent>) -> Result<RecognitionOutcome> {
        for event in events {
            self.events
                .send(event)
                .await
                .context("recognizer channel closed")?;
        }
        self.say("listening");
        let outcome = self.panel.listen(&mut self.service).await;
        self.report(&outcome);
        Ok(outcome)
    }

    fn report(&self, outcome: &RecognitionOutcome) {
        let lang = self.panel.language();
        match outcome {
            RecognitionOutcome::Success(filter) => {
                let id = filter.policyholder_id.to_string();
                println!(
                    "{}",
                    self.translations.tr_with(lang, "recognized", &[("id", id.as_str())])
                );
                if self.config.audit_enabled {
                    let entry = format!("Policyholder search: {} ({})", id, lang);
                    if let Err(e) = audit::log(&entry) {
                        warn!("Could not write audit log: {}", e);
                    }
                }
            }
            RecognitionOutcome::Failure { kind } => match kind {
                FailureKind::NoMatch => self.say("no_match"),
                FailureKind::PlatformError => self.say("platform_error"),
            },
        }
    }

    /// Handle one stdin line; returns false when the user quits
    async fn handle_line(&mut self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        let Some(command) = line.strip_prefix(':') else {
            self.search(vec![
                RecognitionEvent::SpeechEnd,
                RecognitionEvent::Result {
                    transcript: line.to_string(),
                },
            ])
            .await?;
            return Ok(true);
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit"), _) | (Some("q"), _) => return Ok(false),
            (Some("reset"), _) => {
                self.panel.reset();
                self.say("reset");
            }
            (Some("lang"), Some(code)) => match code.parse::<Language>() {
                Ok(lang) => {
                    self.panel.set_language(lang);
                    println!(
                        "{}",
                        self.translations
                            .tr_with(lang, "language_changed", &[("lang", lang.code())])
                    );
                }
                Err(e) => warn!("{}", e),
            },
            (Some("grammar"), _) => println!("{}", self.grammar()),
            (Some("nomatch"), _) => {
                self.search(vec![RecognitionEvent::NoMatch]).await?;
            }
            (Some("error"), _) => {
                self.search(vec![RecognitionEvent::Error {
                    message: "simulated".to_string(),
                }])
                .await?;
            }
            _ => warn!("Unknown command: {}", line),
        }
        Ok(true)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🔎 Voice Search v{} starting...", env!("CARGO_PKG_VERSION"));

    let language = args.lang.unwrap_or(config.language);
    let translations = Translations::load(config.locale_dir.as_deref());
    let (events, recognizer) = ChannelRecognizer::channel(8);
    let service = RecognitionService::with_config(Box::new(recognizer), &config);

    let mut app = App {
        config,
        translations,
        events,
        service,
        panel: SearchPanel::new(language),
    };

    if !app.service.is_available() {
        app.say("unavailable");
        return Ok(ExitCode::FAILURE);
    }

    if args.grammar {
        println!("{}", app.grammar());
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(transcript) = args.transcript {
        let outcome = app
            .search(vec![
                RecognitionEvent::SpeechEnd,
                RecognitionEvent::Result { transcript },
            ])
            .await?;
        return Ok(if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    app.say("ready");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !app.handle_line(&line).await? {
            break;
        }
    }

    info!("👋 Voice Search stopped");
    Ok(ExitCode::SUCCESS)
}
