//! Runs checks over every translated message of a messages directory.
//!
//! Each key of a non-primary locale becomes one unit: its forms are the
//! targets, the primary locale's forms of the same key are the sources.
//! Units are independent, so they are checked in parallel.

use anyhow::{Result, bail};
use glob::Pattern;
use rayon::prelude::*;

use crate::{
    cache::CheckCache,
    checks::{Check, Checks},
    config::Config,
    issues::{Issue, ParseErrorIssue, UntranslatedIssue},
    messages::{MessageEntry, ScanMessagesResult},
    unit::Unit,
};

/// Outcome of checking a messages directory.
#[derive(Debug, Default)]
pub struct CheckRun {
    pub issues: Vec<Issue>,
    pub locale_files_checked: usize,
    pub units_checked: usize,
}

struct PendingUnit<'a> {
    id: String,
    locale: &'a str,
    source: &'a MessageEntry,
    target: &'a MessageEntry,
}

pub fn run_checks(config: &Config, scan: &ScanMessagesResult) -> Result<CheckRun> {
    let primary_locale = config.primary_locale.as_str();
    let Some(primary) = scan.messages.get(primary_locale) else {
        bail!(
            "Primary locale '{}' not found in messages directory.\n\
             Hint: Check your .samecheckrc.json 'primaryLocale' setting.",
            primary_locale
        );
    };

    let ignore_patterns = config.ignore_key_patterns();
    let ignore_keys = ignore_patterns.as_slice();
    let check = Checks::from(config.same_check());
    let cache = CheckCache::new();

    let pending: Vec<PendingUnit> = scan
        .messages
        .iter()
        .filter(|(locale, _)| locale.as_str() != primary_locale)
        .flat_map(|(locale, messages)| {
            messages.entries.iter().filter_map(move |(key, target)| {
                let source = primary.get(key)?;
                if is_ignored_key(ignore_keys, key) {
                    log::debug!("skipping ignored key {}", key);
                    return None;
                }
                Some(PendingUnit {
                    id: format!("{}:{}", locale, key),
                    locale: locale.as_str(),
                    source,
                    target,
                })
            })
        })
        .collect();

    log::debug!(
        "checking {} units from {} locale files with '{}'",
        pending.len(),
        scan.messages.len(),
        check.check_id()
    );

    let mut issues: Vec<Issue> = pending
        .par_iter()
        .filter_map(|pending| {
            let unit = Unit::new(pending.locale, config.flags_for_key(&pending.target.key));
            let fired = check.check(
                &pending.source.form_refs(),
                &pending.target.form_refs(),
                &unit,
                &cache,
                &pending.id,
            );
            fired.then(|| {
                Issue::Untranslated(UntranslatedIssue {
                    location: pending.target.location.clone(),
                    key: pending.target.key.clone(),
                    locale: pending.locale.to_string(),
                    primary_locale: primary_locale.to_string(),
                    value: pending.target.value().to_string(),
                })
            })
        })
        .collect();

    issues.extend(scan.warnings.iter().map(|warning| {
        Issue::ParseError(ParseErrorIssue {
            file_path: warning.file_path.clone(),
            error: warning.error.clone(),
        })
    }));

    Ok(CheckRun {
        issues,
        locale_files_checked: scan.messages.len(),
        units_checked: pending.len(),
    })
}

fn is_ignored_key(patterns: &[Pattern], key: &str) -> bool {
    patterns.iter().any(|pattern| pattern.matches(key))
}
