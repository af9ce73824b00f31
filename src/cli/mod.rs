use anyhow::Result;

mod args;
mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, CheckCommand, Command, CommonArgs, ExplainCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => commands::check::check(cmd),
        Some(Command::Explain(cmd)) => commands::explain::explain(cmd),
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
