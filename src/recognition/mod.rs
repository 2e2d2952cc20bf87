//! Speech Recognition Module
//!
//! The platform recognizer is external; this module drives one listening
//! session on it and turns its events into a [`RecognitionOutcome`].

pub mod channel;

use crate::config::Config;
use crate::error::VoiceResult;
use crate::grammar::{GrammarTable, RecognitionContext};
use crate::interpreter::{interpret_in, FailureKind, SearchPolicyholderFilter};
use crate::language::Language;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use channel::ChannelRecognizer;

/// Event emitted by the platform recognizer during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecognitionEvent {
    /// Final transcript of the best alternative
    Result { transcript: String },
    /// The engine heard speech it could not match
    NoMatch,
    /// The engine failed
    Error { message: String },
    /// The user stopped speaking
    SpeechEnd,
}

/// Tagged result of a listening session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecognitionOutcome {
    Success(SearchPolicyholderFilter),
    Failure { kind: FailureKind },
}

impl RecognitionOutcome {
    pub fn failure(kind: FailureKind) -> Self {
        RecognitionOutcome::Failure { kind }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RecognitionOutcome::Success(_))
    }
}

/// Settings applied to the recognizer before a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// JSGF grammar string
    pub grammar: String,
    /// Language code, e.g. "en"
    pub lang: String,
    pub continuous: bool,
    pub interim_results: bool,
    pub max_alternatives: u32,
}

/// Trait for platform speech recognizers
#[async_trait]
pub trait SpeechRecognizer: Send {
    /// Begin a listening session
    async fn start(&mut self, settings: &SessionSettings) -> VoiceResult<()>;

    /// Wait for the next event; `None` once the session can produce no more
    async fn next_event(&mut self) -> Option<RecognitionEvent>;

    /// Stop capturing audio; pending results are still delivered
    async fn stop(&mut self) -> VoiceResult<()>;

    /// Whether the platform offers speech recognition at all
    fn is_available(&self) -> bool {
        true
    }
}

/// Runs listening sessions on a recognizer
pub struct RecognitionService {
    recognizer: Box<dyn SpeechRecognizer>,
    grammars: GrammarTable,
    continuous: bool,
    interim_results: bool,
    max_alternatives: u32,
}

impl RecognitionService {
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer,
            grammars: GrammarTable::builtin(),
            continuous: false,
            interim_results: false,
            max_alternatives: 1,
        }
    }

    /// Build a service with session flags taken from config
    pub fn with_config(recognizer: Box<dyn SpeechRecognizer>, config: &Config) -> Self {
        Self {
            continuous: config.continuous,
            interim_results: config.interim_results,
            max_alternatives: config.max_alternatives.max(1),
            ..Self::new(recognizer)
        }
    }

    pub fn is_available(&self) -> bool {
        self.recognizer.is_available()
    }

    /// Settings for a session in the given context and language
    pub fn session_settings(
        &self,
        context: RecognitionContext,
        language: Language,
    ) -> Option<SessionSettings> {
        let entry = self.grammars.lookup(language, context)?;
        Some(SessionSettings {
            grammar: entry.to_jsgf(),
            lang: language.code().to_string(),
            continuous: self.continuous,
            interim_results: self.interim_results,
            max_alternatives: self.max_alternatives,
        })
    }

    /// Run one listening session and report its outcome
    pub async fn listen(
        &mut self,
        context: RecognitionContext,
        language: Language,
    ) -> RecognitionOutcome {
        if !self.recognizer.is_available() {
            warn!("⚠️ Speech recognition is not available");
            return RecognitionOutcome::failure(FailureKind::PlatformError);
        }

        let Some(settings) = self.session_settings(context, language) else {
            warn!("No grammar for {:?} in '{}'", context, language);
            return RecognitionOutcome::failure(FailureKind::NoMatch);
        };

        if let Err(e) = self.recognizer.start(&settings).await {
            warn!("❌ Failed to start recognizer: {}", e);
            return RecognitionOutcome::failure(FailureKind::PlatformError);
        }
        info!("🎙️ Listening ({})", language);

        while let Some(event) = self.recognizer.next_event().await {
            match event {
                RecognitionEvent::SpeechEnd => {
                    debug!("Speech ended, stopping recognizer");
                    if let Err(e) = self.recognizer.stop().await {
                        warn!("Failed to stop recognizer: {}", e);
                    }
                }
                RecognitionEvent::Result { transcript } => {
                    info!("📝 Heard: '{}'", transcript);
                    return match interpret_in(&self.grammars, context, &transcript, language) {
                        Ok(policyholder_id) => {
                            info!("🎯 Policyholder search: {}", policyholder_id);
                            RecognitionOutcome::Success(SearchPolicyholderFilter {
                                policyholder_id,
                            })
                        }
                        Err(kind) => RecognitionOutcome::failure(kind),
                    };
                }
                RecognitionEvent::NoMatch => {
                    debug!("Recognizer reported no match");
                    return RecognitionOutcome::failure(FailureKind::NoMatch);
                }
                RecognitionEvent::Error { message } => {
                    warn!("❌ Recognizer error: {}", message);
                    return RecognitionOutcome::failure(FailureKind::PlatformError);
                }
            }
        }

        warn!("Recognizer closed the session without a result");
        RecognitionOutcome::failure(FailureKind::PlatformError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn service_with(events: Vec<RecognitionEvent>) -> RecognitionService {
        let (tx, rx) = mpsc::channel(16);
        for event in events {
            tx.try_send(event).unwrap();
        }
        RecognitionService::new(Box::new(ChannelRecognizer::new(rx)))
    }

    #[test]
    fn test_session_settings() {
        let service = service_with(vec![]);
        let settings = service
            .session_settings(RecognitionContext::PersonSearch, Language::Fr)
            .unwrap();
        assert_eq!(settings.lang, "fr");
        assert!(settings.grammar.contains("recherche | par"));
        assert!(!settings.continuous);
        assert!(!settings.interim_results);
        assert_eq!(settings.max_alternatives, 1);
    }

    #[tokio::test]
    async fn test_listen_success() {
        let mut service = service_with(vec![
            RecognitionEvent::SpeechEnd,
            RecognitionEvent::Result {
                transcript: "search by five".into(),
            },
        ]);
        let outcome = service
            .listen(RecognitionContext::PersonSearch, Language::En)
            .await;
        assert_eq!(
            outcome,
            RecognitionOutcome::Success(SearchPolicyholderFilter { policyholder_id: 5 })
        );
    }

    #[tokio::test]
    async fn test_listen_closed_without_result() {
        let mut service = service_with(vec![RecognitionEvent::SpeechEnd]);
        let outcome = service
            .listen(RecognitionContext::PersonSearch, Language::En)
            .await;
        assert_eq!(outcome, RecognitionOutcome::failure(FailureKind::PlatformError));
    }

    #[test]
    fn test_outcome_serialize() {
        let json = serde_json::to_string(&RecognitionOutcome::failure(FailureKind::NoMatch))
            .unwrap();
        assert!(json.contains("\"type\":\"failure\""));
        assert!(json.contains("no_match"));
    }
}
