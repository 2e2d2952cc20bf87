//! Command Interpreter
//!
//! Maps a recognized transcript to a policyholder identifier.

use crate::core::text_normalizer::TextNormalizer;
use crate::grammar::{GrammarTable, RecognitionContext};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Why a listening session produced no search filter
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The transcript did not match the command grammar
    #[error("command not recognized")]
    NoMatch,
    /// The recognition engine reported an error
    #[error("speech recognition error")]
    PlatformError,
}

impl FailureKind {
    /// Failure flag as surfaced to the form: true for engine errors only
    pub fn is_error(self) -> bool {
        matches!(self, FailureKind::PlatformError)
    }
}

/// Filter produced by a successful voice search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPolicyholderFilter {
    pub policyholder_id: u64,
}

/// Interpret a transcript in the person-search context
pub fn interpret(transcript: &str, language: Language) -> Result<u64, FailureKind> {
    interpret_in(
        &GrammarTable::builtin(),
        RecognitionContext::PersonSearch,
        transcript,
        language,
    )
}

/// Interpret a transcript against an explicit grammar table and context
pub fn interpret_in(
    grammars: &GrammarTable,
    context: RecognitionContext,
    transcript: &str,
    language: Language,
) -> Result<u64, FailureKind> {
    let entry = grammars
        .lookup(language, context)
        .ok_or(FailureKind::NoMatch)?;

    let command = transcript.trim().to_lowercase();
    let Some(remainder) = command.strip_prefix(entry.initial_command) else {
        debug!(
            "No '{}' prefix in transcript: '{}'",
            entry.initial_command, transcript
        );
        return Err(FailureKind::NoMatch);
    };

    let digits = TextNormalizer::new(language).normalize(remainder);
    digits.parse::<u64>().map_err(|_| {
        debug!("Remainder '{}' is not numeric", digits);
        FailureKind::NoMatch
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::text_normalizer::number_words;

    #[test]
    fn test_interpret_basic() {
        assert_eq!(interpret("search by five", Language::En), Ok(5));
        assert_eq!(interpret("recherche par deux", Language::Fr), Ok(2));
    }

    #[test]
    fn test_interpret_no_match() {
        assert_eq!(interpret("search by", Language::En), Err(FailureKind::NoMatch));
        assert_eq!(interpret("hello world", Language::En), Err(FailureKind::NoMatch));
        assert_eq!(interpret("", Language::En), Err(FailureKind::NoMatch));
        assert_eq!(
            interpret("search by banana", Language::En),
            Err(FailureKind::NoMatch)
        );
    }

    #[test]
    fn test_interpret_wrong_language() {
        assert_eq!(
            interpret("search by five", Language::Fr),
            Err(FailureKind::NoMatch)
        );
        assert_eq!(
            interpret("recherche par deux", Language::En),
            Err(FailureKind::NoMatch)
        );
    }

    #[test]
    fn test_interpret_multi_digit() {
        assert_eq!(interpret("search by one two three", Language::En), Ok(123));
        assert_eq!(interpret("search by 4 2", Language::En), Ok(42));
        assert_eq!(interpret("recherche par neuf zero", Language::Fr), Ok(90));
    }

    #[test]
    fn test_interpret_case_and_padding() {
        assert_eq!(interpret("  Search by Seven ", Language::En), Ok(7));
    }

    #[test]
    fn test_number_words_round_trip() {
        let grammars = GrammarTable::builtin();
        for lang in Language::ALL {
            let entry = grammars
                .lookup(lang, RecognitionContext::PersonSearch)
                .unwrap();
            for (digit, word) in number_words(lang).iter().enumerate() {
                let transcript = format!("{} {}", entry.initial_command, word);
                assert_eq!(interpret(&transcript, lang), Ok(digit as u64), "{}", transcript);
            }
        }
    }

    #[test]
    fn test_failure_flag() {
        assert!(!FailureKind::NoMatch.is_error());
        assert!(FailureKind::PlatformError.is_error());
    }
}
