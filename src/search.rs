//! Search Panel
//!
//! State behind the policyholder search form: selected language, the
//! current identifier, and whether a listening session is running.

use crate::grammar::RecognitionContext;
use crate::language::Language;
use crate::recognition::{RecognitionOutcome, RecognitionService};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SearchPanel {
    language: Language,
    current_policyholder_id: Option<u64>,
    is_listening: bool,
}

impl SearchPanel {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            info!("🌐 Language set to: {}", language);
        }
        self.language = language;
    }

    pub fn current_policyholder_id(&self) -> Option<u64> {
        self.current_policyholder_id
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    /// Mark a session as started; returns the context and language to listen with
    pub fn begin_listening(&mut self) -> (RecognitionContext, Language) {
        self.is_listening = true;
        (RecognitionContext::PersonSearch, self.language)
    }

    /// Apply the outcome of a session
    pub fn apply(&mut self, outcome: &RecognitionOutcome) {
        self.is_listening = false;
        if let RecognitionOutcome::Success(filter) = outcome {
            self.current_policyholder_id = Some(filter.policyholder_id);
        }
    }

    /// Clear the search field
    pub fn reset(&mut self) {
        self.current_policyholder_id = None;
    }

    /// Listen once and update the panel with the outcome
    pub async fn listen(&mut self, service: &mut RecognitionService) -> RecognitionOutcome {
        let (context, language) = self.begin_listening();
        let outcome = service.listen(context, language).await;
        self.apply(&outcome);
        outcome
    }
}
