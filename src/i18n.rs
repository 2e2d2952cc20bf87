//! Internationalization (i18n) Support
//!
//! User-facing messages in each recognition language. Built-in strings can
//! be overridden from `<locale_dir>/<lang>/messages.json`.

use crate::language::Language;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const EN: &[(&str, &str)] = &[
    ("ready", "Say \"search by <number>\" (type it, or :quit)"),
    ("listening", "Listening..."),
    ("recognized", "Policyholder {id}"),
    ("no_match", "Sorry, that command was not recognized"),
    ("platform_error", "Speech recognition failed"),
    ("reset", "Search cleared"),
    ("language_changed", "Language: {lang}"),
    ("unavailable", "Speech recognition is not available"),
];

const FR: &[(&str, &str)] = &[
    ("ready", "Dites \"recherche par <numéro>\" (tapez-le, ou :quit)"),
    ("listening", "Écoute..."),
    ("recognized", "Assuré {id}"),
    ("no_match", "Désolé, la commande n'a pas été reconnue"),
    ("platform_error", "La reconnaissance vocale a échoué"),
    ("reset", "Recherche effacée"),
    ("language_changed", "Langue : {lang}"),
    ("unavailable", "La reconnaissance vocale n'est pas disponible"),
];

fn builtin(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Fr => FR,
    }
}

/// Message catalog for all languages
#[derive(Debug, Clone, Default)]
pub struct Translations {
    overrides: HashMap<Language, HashMap<String, String>>,
}

impl Translations {
    /// Built-in messages plus any overrides found under `locale_dir`
    pub fn load(locale_dir: Option<&Path>) -> Self {
        let mut translations = Self::default();
        let Some(dir) = locale_dir else {
            return translations;
        };

        for lang in Language::ALL {
            let path = dir.join(lang.code()).join("messages.json");
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(map) => {
                    debug!("Loaded {} translations for '{}'", map.len(), lang);
                    translations.overrides.insert(lang, map);
                }
                Err(e) => debug!("Ignoring {}: {}", path.display(), e),
            }
        }
        translations
    }

    /// Translate a key, falling back to the key itself
    pub fn tr(&self, language: Language, key: &str) -> String {
        if let Some(value) = self.overrides.get(&language).and_then(|m| m.get(key)) {
            return value.clone();
        }
        builtin(language)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate and substitute `{name}` placeholders
    pub fn tr_with(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.tr(language, key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}
