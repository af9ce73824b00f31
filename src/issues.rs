//! Issue types produced by a check run.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::messages::MessageLocation;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule identifier shown next to each issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    /// Named after the check id, so `ignore-same` and the report agree.
    Untranslated,
    ParseError,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Untranslated => "same",
            Rule::ParseError => "parse-error",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Rule::Untranslated => Severity::Warning,
            Rule::ParseError => Severity::Error,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation identical to the primary locale value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UntranslatedIssue {
    /// Where the key is defined in the translated locale file.
    pub location: MessageLocation,
    pub key: String,
    pub locale: String,
    pub primary_locale: String,
    /// Singular form of the untranslated value.
    pub value: String,
}

/// Locale file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Untranslated(UntranslatedIssue),
    ParseError(ParseErrorIssue),
}

/// Where an issue points to.
pub enum ReportLocation<'a> {
    Message(&'a MessageLocation),
    /// Whole file, no line.
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    /// `(path, line)`; line is 0 for file-level locations.
    pub fn parts(&self) -> (&'a str, usize) {
        match *self {
            ReportLocation::Message(location) => (location.file_path.as_str(), location.line),
            ReportLocation::File { path } => (path, 0),
        }
    }
}

/// What the CLI reporter needs from an issue.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Text after the severity, quoted in the report.
    fn message(&self) -> String;

    fn report_rule(&self) -> Rule;

    fn report_severity(&self) -> Severity {
        self.report_rule().severity()
    }

    /// Text of the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.location)
    }

    fn message(&self) -> String {
        self.value.clone()
    }

    fn report_rule(&self) -> Rule {
        Rule::Untranslated
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} ({}) is identical to {}",
            self.key, self.locale, self.primary_locale
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}
