//! Printf-style placeholder syntaxes.
//!
//! Units carry a flag such as `python-format` telling which placeholder syntax
//! their strings use. Placeholders are expected to survive translation
//! unchanged, so checks strip them before comparing text.

use std::sync::LazyLock;

use regex::Regex;

/// Python `%` formatting: `%s`, `%(name)s`, `%-5.2f`, `%%`.
static PYTHON_PRINTF_MATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"%(?:\((?P<key>\w*)\))?(?P<fullvar>[+#-]*(?:[0-9]+)?(?:\.[0-9]+)?(?:hh|h|l|ll)?(?P<type>[A-Za-z0-9_%]))",
    )
    .unwrap()
});

/// PHP `sprintf` formatting, including positional `%1$s`.
static PHP_PRINTF_MATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"%(?:(?P<ord>[0-9]+)\$)?(?P<fullvar>[+#-]*(?:[0-9]+)?(?:\.[0-9]+)?(?:hh|h|l|ll)?(?P<type>[A-Za-z0-9_%]))",
    )
    .unwrap()
});

/// C `printf` formatting, including positional `%1$s` and length modifiers.
static C_PRINTF_MATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"%(?:(?P<ord>[0-9]+)\$)?(?P<fullvar>[+#-]*(?:[0-9]+)?(?:\.[0-9]+)?(?:hh|h|l|ll)?(?P<type>[A-Za-z0-9_%]))",
    )
    .unwrap()
});

/// Placeholder syntax selected by a unit flag.
///
/// Variants are declared in priority order: when a unit carries several
/// format flags, the first one in this order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatFlag {
    Python,
    Php,
    C,
}

impl FormatFlag {
    /// All format flags, highest priority first.
    pub const PRIORITY: [FormatFlag; 3] = [FormatFlag::Python, FormatFlag::Php, FormatFlag::C];

    /// The flag name as written on units.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatFlag::Python => "python-format",
            FormatFlag::Php => "php-format",
            FormatFlag::C => "c-format",
        }
    }

    pub fn from_name(name: &str) -> Option<FormatFlag> {
        Self::PRIORITY.into_iter().find(|flag| flag.as_str() == name)
    }

    /// A `*-format` flag that names no known syntax, e.g. `pyhton-format`.
    ///
    /// Other flags (`fuzzy`, `ignore-same`) are free-form and never unknown.
    pub fn is_unknown_format(name: &str) -> bool {
        name.ends_with("-format") && Self::from_name(name).is_none()
    }

    /// Compiled matcher for placeholders of this syntax.
    pub fn pattern(self) -> &'static Regex {
        match self {
            FormatFlag::Python => &PYTHON_PRINTF_MATCH,
            FormatFlag::Php => &PHP_PRINTF_MATCH,
            FormatFlag::C => &C_PRINTF_MATCH,
        }
    }

    /// Remove every placeholder of this syntax from `text`.
    pub fn strip_placeholders(self, text: &str) -> String {
        self.pattern().replace_all(text, "").into_owned()
    }
}

impl std::fmt::Display for FormatFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
