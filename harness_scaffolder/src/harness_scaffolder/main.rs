//!
//! The harness scaffolder executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use harness_scaffolder::Merger;
use harness_scaffolder::Scaffold;
use harness_scaffolder::Settings;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => harness_scaffolder::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            harness_scaffolder::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    match arguments.command {
        Command::Init { project, imports } => {
            println!(
                "    {} the harness scaffold in {project:?}",
                "Creating".bright_green().bold(),
            );
            Scaffold::new(project).create(imports.as_slice())
        }
        Command::Append {
            project,
            selection,
            settings,
            fail_on_unexpected_error,
            force_send_eth,
        } => {
            let mut settings = match settings {
                Some(path) => Settings::load(path.as_path())?,
                None => Settings::default(),
            };
            settings.fail_on_unexpected_error |= fail_on_unexpected_error;
            settings.force_send_eth |= force_send_eth;

            let contracts = harness_scaffolder::load_selection(selection.as_path())?;
            println!(
                "    {} {} contract(s) into the harness in {project:?}",
                "Merging".bright_green().bold(),
                contracts.len(),
            );
            Merger::new(
                harness_scaffolder::harness_directory(project.as_path()),
                settings,
            )
            .append(contracts.as_slice())
        }
    }
}
