//! Not translated check.
//!
//! Flags translations that are identical to their source string, unless the
//! string is one that is usually left alone: numbers, copyright notices,
//! single characters, acronyms, placeholders, addresses, or a word from the
//! same-word list.

pub mod blacklist;
pub mod strip;

use std::collections::HashSet;

use super::Check;
use crate::cache::CacheSlot;
use crate::unit::TranslationUnit;
use crate::utils::{char_len, is_upper};

use blacklist::is_blacklisted;
pub use strip::{Strip, Stripper, strip_string};

/// Characters trimmed before the "nothing but a number" test (`1:4`, `1/2`).
const NUMERIC_CHARS: &str = "0123456789:/,.";

/// Languages whose translations are expected to match the source.
pub const DEFAULT_SOURCE_LANGUAGES: &[&str] = &["en"];

/// Check for not translated entries.
#[derive(Debug, Clone)]
pub struct SameCheck<S = Stripper> {
    source_languages: Vec<String>,
    extra_words: HashSet<String>,
    stripper: S,
}

impl SameCheck {
    pub fn new() -> Self {
        Self::with_stripper(Stripper)
    }
}

impl Default for SameCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Strip> SameCheck<S> {
    /// Build the check around a custom stripping step.
    pub fn with_stripper(stripper: S) -> Self {
        Self {
            source_languages: DEFAULT_SOURCE_LANGUAGES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            extra_words: HashSet::new(),
            stripper,
        }
    }

    /// Replace the languages that are never flagged.
    pub fn with_source_languages<I, L>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.source_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Add words treated like same-word list entries.
    ///
    /// Words go through the same lowercasing and stripping as sources, so
    /// `"Kubernetes!"` is stored as `kubernetes`.
    pub fn with_extra_words<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        for word in words {
            let word = self.stripper.strip(&word.as_ref().to_lowercase(), None);
            if !word.is_empty() {
                self.extra_words.insert(word);
            }
        }
        self
    }

    pub fn source_languages(&self) -> &[String] {
        &self.source_languages
    }

    /// The translatable residue of `source` for `unit`.
    pub fn stripped(&self, source: &str, unit: &dyn TranslationUnit) -> String {
        self.stripper.strip(&source.to_lowercase(), unit.flags().format())
    }

    /// Whether `source` contains nothing worth translating.
    ///
    /// The result is read from and stored into `cache_slot`.
    pub fn should_ignore(
        &self,
        source: &str,
        unit: &dyn TranslationUnit,
        cache_slot: &mut dyn CacheSlot,
    ) -> bool {
        if let Some(result) = cache_slot.get() {
            return result;
        }

        let lower_source = source.to_lowercase();

        // Special things like 1:4, 1/2 or copyright
        let result = if char_len(source.trim_matches(|c: char| NUMERIC_CHARS.contains(c))) <= 1
            || lower_source.contains("(c) copyright")
            || source.contains('©')
        {
            true
        } else {
            let stripped = self.stripper.strip(&lower_source, unit.flags().format());
            stripped.is_empty() || self.is_same_word(&stripped)
        };

        log::trace!("same: should_ignore({:?}) = {}", source, result);
        cache_slot.set(result);

        result
    }

    fn is_same_word(&self, word: &str) -> bool {
        is_blacklisted(word) || self.extra_words.contains(word)
    }

    fn is_source_language(&self, unit: &dyn TranslationUnit) -> bool {
        let codes: Vec<&str> = self.source_languages.iter().map(String::as_str).collect();
        unit.language_in(&codes)
    }
}

impl<S: Strip> Check for SameCheck<S> {
    fn check_id(&self) -> &'static str {
        "same"
    }

    fn name(&self) -> &'static str {
        "Not translated"
    }

    fn description(&self) -> &'static str {
        "Source and translated strings are same"
    }

    fn check_single(
        &self,
        source: &str,
        target: &str,
        unit: &dyn TranslationUnit,
        cache_slot: &mut dyn CacheSlot,
    ) -> bool {
        // Source language variants keep most strings as they are
        if self.is_source_language(unit) {
            return false;
        }

        // Single characters are usually labels or separators
        if char_len(source) <= 1 && char_len(target) <= 1 {
            return false;
        }

        // Probably a shortcut or an acronym
        if is_upper(source) && is_upper(target) {
            return false;
        }

        if self.should_ignore(source, unit, cache_slot) {
            return false;
        }

        source == target
    }
}
