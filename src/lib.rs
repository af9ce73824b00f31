//! Samecheck - flags translations that were left identical to their source
//!
//! Samecheck is a CLI tool and library for the "not translated" quality check.
//! A translation equal to its source string is reported unless the source has
//! nothing translatable in it: placeholders, markup, URLs, numbers, acronyms
//! and words that are the same in most languages.
//!
//! ## Module Structure
//!
//! - `cache`: Per-unit memoisation of the ignore decision
//! - `checks`: The `Check` trait and the same check
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `format`: printf-style placeholder flags
//! - `issues`: Issue type definitions and reporting
//! - `messages`: Locale JSON file scanning
//! - `runner`: Runs checks over a messages directory
//! - `unit`: Translation units and their flags
//! - `utils`: Shared utility functions

pub mod cache;
pub mod checks;
pub mod cli;
pub mod config;
pub mod format;
pub mod issues;
pub mod messages;
pub mod runner;
pub mod unit;
pub mod utils;
