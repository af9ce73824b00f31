//! Locale message files.
//!
//! A messages directory holds one JSON file per locale (`en.json`,
//! `fr.json`, ...). Nested objects are flattened into dotted keys. An array of
//! strings is one message with several plural forms.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Location of a message in a locale file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    pub file_path: String,
    /// 1-based line of the key.
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// A single message: one form, or several plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub key: String,
    pub forms: Vec<String>,
    pub location: MessageLocation,
}

impl MessageEntry {
    /// Forms as string slices, in the shape checks expect.
    pub fn form_refs(&self) -> Vec<&str> {
        self.forms.iter().map(String::as_str).collect()
    }

    /// The singular form, or an empty string for an empty array.
    pub fn value(&self) -> &str {
        self.forms.first().map(String::as_str).unwrap_or_default()
    }
}

/// All messages of one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "zh-CN").
    pub locale: String,
    pub file_path: String,
    /// Entries keyed by dotted message key.
    pub entries: BTreeMap<String, MessageEntry>,
}

impl LocaleMessages {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type AllLocaleMessages = BTreeMap<String, LocaleMessages>;

/// A locale file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub messages: AllLocaleMessages,
    pub warnings: Vec<MessageScanWarning>,
}

pub fn parse_json_file(path: &Path, locale: &str) -> Result<LocaleMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    let file_path = path.to_string_lossy().to_string();
    parse_json_str(&content, &file_path, locale)
}

pub fn parse_json_str(content: &str, file_path: &str, locale: &str) -> Result<LocaleMessages> {
    let json: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", file_path))?;

    if !json.is_object() {
        bail!("Top level of {:?} must be a JSON object", file_path);
    }

    let line_index = build_line_index(content);
    let mut messages = LocaleMessages::new(locale, file_path);
    flatten_json(
        &json,
        String::new(),
        file_path,
        content,
        &line_index,
        &mut messages,
    );
    Ok(messages)
}

/// Byte offsets where each line starts; line 1 starts at 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number of a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a dotted key is defined.
///
/// Each key part is searched after the previous one, so `Common.submit` finds
/// the `"submit"` inside `"Common"` rather than one in another namespace. A
/// match only counts when it is followed by `:`, i.e. it is a key and not a
/// value containing the same text.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

fn flatten_json(
    value: &Value,
    prefix: String,
    file_path: &str,
    content: &str,
    line_index: &[usize],
    result: &mut LocaleMessages,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, file_path, content, line_index, result);
            }
        }
        Value::String(s) => {
            insert_entry(result, prefix, vec![s.clone()], file_path, content, line_index);
        }
        Value::Array(arr) => {
            if arr.is_empty() {
                return;
            }

            let is_string_array = arr.iter().all(Value::is_string);
            if is_string_array && !prefix.is_empty() {
                let forms = arr
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                insert_entry(result, prefix, forms, file_path, content, line_index);
            } else {
                // Arrays of objects are addressed by index: faq.items.0.question
                for (index, val) in arr.iter().enumerate() {
                    let new_prefix = if prefix.is_empty() {
                        index.to_string()
                    } else {
                        format!("{}.{}", prefix, index)
                    };
                    flatten_json(val, new_prefix, file_path, content, line_index, result);
                }
            }
        }
        // Numbers, booleans and null carry no translatable text.
        _ => {}
    }
}

fn insert_entry(
    result: &mut LocaleMessages,
    key: String,
    forms: Vec<String>,
    file_path: &str,
    content: &str,
    line_index: &[usize],
) {
    let line = find_key_line(content, &key, line_index);
    result.entries.insert(
        key.clone(),
        MessageEntry {
            key,
            forms,
            location: MessageLocation::new(file_path, line),
        },
    );
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .samecheckrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    for entry in fs::read_dir(message_dir)? {
        let path = entry?.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            match parse_json_file(&path, &locale) {
                Ok(messages) => {
                    log::debug!("loaded {} messages for locale {}", messages.len(), locale);
                    result.messages.insert(locale, messages);
                }
                Err(e) => {
                    result.warnings.push(MessageScanWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
    }

    result.warnings.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    Ok(result)
}
