//! Internationalization store.
//!
//! One translation table per session, loaded once. The table maps canonical
//! (default-language) strings to their translation in the one alternate
//! language. Lookups degrade to the raw key - before the table loads, for
//! the default language, and for missing entries - and never error.

use crate::persistence;
use serde::{Deserialize, Serialize};
use simbioset_core::Language;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const LANG_QUERY_KEY: &str = "lang";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LanguagePrefs {
    language: Option<Language>,
}

#[derive(Debug)]
pub struct I18n {
    language: Language,
    default_language: Language,
    table: HashMap<String, String>,
    loaded: bool,
    prefs_path: PathBuf,
}

impl I18n {
    /// Resolve the active language in priority order: explicit URL query
    /// parameter, persisted preference, fixed default.
    pub fn resolve_language(
        url_param: Option<&str>,
        persisted: Option<Language>,
        default: Language,
    ) -> Language {
        if let Some(param) = url_param {
            if let Ok(lang) = param.parse::<Language>() {
                return lang;
            }
        }
        persisted.unwrap_or(default)
    }

    /// Construct the store, reading the persisted preference from disk.
    pub fn init(prefs_path: &Path, url_param: Option<&str>, default: Language) -> Self {
        let prefs: LanguagePrefs = persistence::load_or_default(prefs_path);
        let language = Self::resolve_language(url_param, prefs.language, default);
        Self {
            language,
            default_language: default,
            table: HashMap::new(),
            loaded: false,
            prefs_path: prefs_path.to_path_buf(),
        }
    }

    /// Load the translation table. Called once per session; a missing or
    /// corrupt file becomes an empty table, logged, never an error.
    pub fn load_table(&mut self, path: &Path) {
        self.table = persistence::load_or_default(path);
        self.loaded = true;
    }

    pub fn current_language(&self) -> Language {
        self.language
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Translate a canonical string. Silent fallback to the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if !self.loaded || self.language == self.default_language {
            return key;
        }
        self.table.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Switch the language: persist the choice and update in-memory state.
    /// The table is not re-fetched, only re-indexed against the new language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        let prefs = LanguagePrefs {
            language: Some(language),
        };
        if let Err(err) = persistence::save(&self.prefs_path, &prefs) {
            tracing::warn!(error = %err, "failed to persist language preference");
        }
    }

    /// The URL query parameter advertising the language. `None` for the
    /// default language so default URLs stay canonical.
    pub fn url_query_param(&self) -> Option<(&'static str, &'static str)> {
        if self.language == self.default_language {
            None
        } else {
            Some((LANG_QUERY_KEY, self.language.as_str()))
        }
    }
}
