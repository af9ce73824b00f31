use std::{
    env,
    io::{self, Write},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::ExplainCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::{
    checks::{Check, SameCheck},
    config::load_config,
    unit::{Flags, TranslationUnit, Unit},
};

/// How the same check judged one source/target pair.
#[derive(Debug, PartialEq, Eq)]
struct Explanation {
    source: String,
    target: String,
    language: String,
    format: Option<&'static str>,
    residue: String,
    opted_out: bool,
    ignored: bool,
    flagged: bool,
}

impl Explanation {
    fn new(check: &SameCheck, source: &str, target: &str, unit: &Unit) -> Self {
        let opted_out = check.is_ignored(unit);
        let ignored = check.should_ignore(source, unit, &mut None::<bool>);
        let flagged = !opted_out && check.check_single(source, target, unit, &mut Some(ignored));

        Self {
            source: source.to_string(),
            target: target.to_string(),
            language: unit.language.clone(),
            format: unit.flags().format().map(|format| format.as_str()),
            residue: check.stripped(source, unit),
            opted_out,
            ignored,
            flagged,
        }
    }

    fn write_to<W: Write>(&self, check_name: &str, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{:<10}{:?}", "source:", self.source)?;
        writeln!(writer, "{:<10}{:?}", "target:", self.target)?;
        writeln!(writer, "{:<10}{}", "language:", self.language)?;
        writeln!(writer, "{:<10}{}", "format:", self.format.unwrap_or("none"))?;
        writeln!(writer, "{:<10}{:?}", "residue:", self.residue)?;
        writeln!(
            writer,
            "{:<10}{}",
            "ignored:",
            if self.ignored { "yes" } else { "no" }
        )?;
        if self.opted_out {
            writeln!(writer, "{:<10}yes", "opt-out:")?;
        }

        if self.flagged {
            writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!("{}: target is identical to source", check_name).red()
            )
        } else {
            writeln!(writer, "{} {}", SUCCESS_MARK.green(), "not flagged".green())
        }
    }
}

/// Global config flags plus the `--flag` values, as `check` would see them.
fn unit_flags(config_flags: &[String], cli_flags: &[String]) -> Flags {
    config_flags
        .iter()
        .chain(cli_flags)
        .map(String::as_str)
        .collect()
}

pub fn explain(cmd: ExplainCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd)?.config;
    let check = config.same_check();

    let unit = Unit::new(cmd.language, unit_flags(&config.flags, &cmd.flags));
    let target = cmd.target.as_deref().unwrap_or(&cmd.source);

    let explanation = Explanation::new(&check, &cmd.source, target, &unit);
    log::debug!("{:?}", explanation);
    explanation
        .write_to(check.name(), &mut io::stdout().lock())
        .context("Failed to write explanation")?;

    Ok(ExitStatus::from_found(explanation.flagged))
}
