use anyhow::Result;

mod args;
pub mod commands;
mod report;
mod run;

pub use args::{Arguments, Command, ExtractCommand};
pub use commands::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.status)
}
