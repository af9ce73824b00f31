//! Reduces a string to the part a translator would actually translate.
//!
//! Placeholders, addresses, links, a few HTML entities and punctuation or
//! digits at either end are removed. What is left is compared against the
//! same-word list.

use std::sync::LazyLock;

use regex::Regex;

use crate::format::FormatFlag;

/// Characters trimmed from both ends of the residue.
pub const BOUNDARY_CHARS: &str = " ,./<>?;'\\:\"|[]{}`~!@#$%^&*()-=_+0123456789\n\r";

/// HTML entities replaced before trimming, in application order.
pub const HTML_ENTITIES: [(&str, &str); 4] = [
    ("&nbsp;", " "),
    ("&rsaquo;", "\""),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i-u)(?:[\-!\#$%\&'*+/=?^_`{}|\~0-9a-z]+(?:\.[\-!\#$%\&'*+/=?^_`{}|\~0-9a-z]+)*"#,
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f!\#-\[\]-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
        r"@(?:(?:[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])?\.)+[a-z]{2,6}\.?",
        r"|\[(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])){3}\])",
    ))
    .unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i-u)(?:http|ftp)s?://",
        r"(?:(?:[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,6}\.?|[a-z0-9\-]{2,}\.?)",
        r"|localhost",
        r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"(?::[0-9]+)?",
        r"(?:[/?](?u:\S)+|/)?",
    ))
    .unwrap()
});

static HASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_\-]*").unwrap());

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i-u)(?:[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])?\.)+",
        r"(?:[a-z]{2,6}\.?|[a-z0-9\-]{2,}\.?)",
    ))
    .unwrap()
});

/// Strips (usually) untranslated parts from `msg`.
///
/// Steps run in a fixed order: placeholders for `format`, email addresses,
/// full URLs, hash tags and IRC channels, bare domain names, HTML entities,
/// then boundary punctuation and digits. URLs go before bare domains so a
/// domain inside a URL is consumed together with it.
///
/// Removing a match can join its neighbours into a new match
/// (`comhttp://http://localhostlocalhost`), so the steps are repeated until
/// nothing changes. Every pass that changes the text shortens it, and the
/// result is a fixed point: `strip_string(strip_string(x)) == strip_string(x)`.
pub fn strip_string(msg: &str, format: Option<FormatFlag>) -> String {
    let mut stripped = strip_once(msg, format);
    loop {
        let again = strip_once(&stripped, format);
        if again == stripped {
            return stripped;
        }
        stripped = again;
    }
}

fn strip_once(msg: &str, format: Option<FormatFlag>) -> String {
    let stripped = match format {
        Some(flag) => flag.strip_placeholders(msg),
        None => msg.to_string(),
    };

    let stripped = EMAIL_RE.replace_all(&stripped, "");
    let stripped = URL_RE.replace_all(&stripped, "");
    let stripped = HASH_RE.replace_all(&stripped, "");
    let stripped = DOMAIN_RE.replace_all(&stripped, "");

    let mut stripped = stripped.into_owned();
    for (entity, replacement) in HTML_ENTITIES {
        if stripped.contains(entity) {
            stripped = stripped.replace(entity, replacement);
        }
    }

    stripped
        .trim_matches(|c: char| BOUNDARY_CHARS.contains(c))
        .to_string()
}

/// The stripping step of the same check.
///
/// [`super::SameCheck`] is generic over this so the pipeline can be swapped
/// (for example to count how often it runs).
pub trait Strip {
    fn strip(&self, msg: &str, format: Option<FormatFlag>) -> String;
}

/// The regular stripping pipeline, see [`strip_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Stripper;

impl Strip for Stripper {
    fn strip(&self, msg: &str, format: Option<FormatFlag>) -> String {
        strip_string(msg, format)
    }
}
