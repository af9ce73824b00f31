//! Translation unit capabilities needed by checks.
//!
//! Checks never see how units are stored. They only ask a unit for its flags
//! and whether its language belongs to a set of language codes.

use std::collections::BTreeSet;

use crate::format::FormatFlag;

/// Set of flags attached to a unit (`c-format`, `fuzzy`, `ignore-same`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeSet<String>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the gettext comment form: `"c-format, fuzzy"`.
    ///
    /// Empty items are dropped and surrounding whitespace is trimmed.
    pub fn parse(text: &str) -> Self {
        text.split(',')
            .map(str::trim)
            .filter(|flag| !flag.is_empty())
            .collect()
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    pub fn insert(&mut self, flag: impl Into<String>) {
        self.0.insert(flag.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The placeholder syntax in effect, honouring flag priority.
    pub fn format(&self) -> Option<FormatFlag> {
        FormatFlag::PRIORITY
            .into_iter()
            .find(|flag| self.contains(flag.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for Flags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Flags {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags: Vec<&str> = self.iter().collect();
        f.write_str(&flags.join(", "))
    }
}

/// What a check may ask of a translation unit.
pub trait TranslationUnit {
    fn flags(&self) -> &Flags;

    /// Whether the unit's language is one of `codes`.
    fn language_in(&self, codes: &[&str]) -> bool;
}

/// Base language of a code: `en_GB` and `en-US` are both `en`.
pub fn base_language(code: &str) -> &str {
    code.split(['_', '-']).next().unwrap_or(code)
}

/// A plain unit: one language code plus flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub language: String,
    pub flags: Flags,
}

impl Unit {
    pub fn new(language: impl Into<String>, flags: Flags) -> Self {
        Self {
            language: language.into(),
            flags,
        }
    }
}

impl TranslationUnit for Unit {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn language_in(&self, codes: &[&str]) -> bool {
        let base = base_language(&self.language);
        codes.iter().any(|code| code.eq_ignore_ascii_case(base))
    }
}
