//! Recognition Grammars
//!
//! Restricted vocabulary and command phrase for each (language, context)
//! pair. The table is static and read-only.

use crate::language::Language;
use serde::Serialize;

/// What the user is trying to do when listening starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecognitionContext {
    PersonSearch,
}

/// Grammar for one language within one recognition context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarEntry {
    pub context: RecognitionContext,
    pub language: Language,
    /// Keywords the recognizer is constrained to
    pub recognized_words: &'static [&'static str],
    /// Phrase a transcript must start with
    pub initial_command: &'static str,
}

impl GrammarEntry {
    /// Render as a JSGF grammar string for the platform recognizer
    pub fn to_jsgf(&self) -> String {
        format!(
            "#JSGF V1.0; grammar test; public <test> = {} ;",
            self.recognized_words.join(" | ")
        )
    }
}

const BUILTIN: &[GrammarEntry] = &[
    GrammarEntry {
        context: RecognitionContext::PersonSearch,
        language: Language::Fr,
        recognized_words: &["recherche", "par"],
        initial_command: "recherche par",
    },
    GrammarEntry {
        context: RecognitionContext::PersonSearch,
        language: Language::En,
        recognized_words: &["search", "by"],
        initial_command: "search by",
    },
];

/// Lookup table of grammar entries
#[derive(Debug, Clone, Copy)]
pub struct GrammarTable {
    entries: &'static [GrammarEntry],
}

impl Default for GrammarTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GrammarTable {
    /// The built-in en/fr table
    pub const fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// Find the entry for a language and context
    pub fn lookup(
        &self,
        language: Language,
        context: RecognitionContext,
    ) -> Option<&'static GrammarEntry> {
        self.entries
            .iter()
            .find(|e| e.language == language && e.context == context)
    }

    pub fn entries(&self) -> &'static [GrammarEntry] {
        self.entries
    }
}
