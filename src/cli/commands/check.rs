use std::env;

use anyhow::{Context, Result};

use super::super::args::{CheckCommand, CommonArgs};
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::{
    config::{Config, load_config},
    messages::scan_message_files,
    runner::run_checks,
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if !loaded.from_file {
        log::debug!("no config file found, using defaults");
    }

    let config = apply_overrides(loaded.config, &cmd.common);

    let scan = scan_message_files(&config.messages_root)?;
    let run = run_checks(&config, &scan)?;
    report::print(&run);

    Ok(ExitStatus::from_found(!run.issues.is_empty()))
}

/// Command-line values win over the config file; `--flag` adds to `flags`.
fn apply_overrides(mut config: Config, common: &CommonArgs) -> Config {
    if let Some(primary_locale) = &common.primary_locale {
        config.primary_locale = primary_locale.clone();
    }
    if let Some(messages_root) = &common.messages_root {
        config.messages_root = messages_root.to_string_lossy().to_string();
    }
    config.flags.extend(common.flags.iter().cloned());
    config
}
