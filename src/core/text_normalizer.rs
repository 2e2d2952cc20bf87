//! Text Normalization
//!
//! Turns the spoken remainder of a command into a digit string.

use crate::language::Language;

static EN_NUMBERS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

static FR_NUMBERS: [&str; 10] = [
    "zero", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

/// Number words for a language; the index of each word is its digit
pub fn number_words(language: Language) -> &'static [&'static str; 10] {
    match language {
        Language::En => &EN_NUMBERS,
        Language::Fr => &FR_NUMBERS,
    }
}

/// Normalizes a transcript remainder for a single language
pub struct TextNormalizer {
    number_words: &'static [&'static str; 10],
}

impl TextNormalizer {
    /// Create a normalizer for the given language
    pub fn new(language: Language) -> Self {
        Self {
            number_words: number_words(language),
        }
    }

    /// Remove all whitespace
    pub fn strip_whitespace(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Replace number words with digits.
    ///
    /// Each word is substituted at most once, in table order, as a plain
    /// substring (no tokenization). A word repeated in the input keeps its
    /// later occurrences.
    pub fn replace_number_words(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (digit, word) in self.number_words.iter().enumerate() {
            result = result.replacen(word, &digit.to_string(), 1);
        }
        result
    }

    /// Strip whitespace, then replace number words
    pub fn normalize(&self, text: &str) -> String {
        self.replace_number_words(&Self::strip_whitespace(text))
    }
}
