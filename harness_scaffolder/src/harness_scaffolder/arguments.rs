//!
//! The harness scaffolder arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The harness scaffolder arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The harness scaffolder subcommands.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Materializes the harness template set into a project.
    Init {
        /// The project root directory.
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// A project-relative contract path imported into the Base file.
        /// May be repeated.
        #[arg(long = "import")]
        imports: Vec<String>,
    },
    /// Merges the selected contracts into an existing harness.
    Append {
        /// The project root directory.
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// The selection file with the contracts to wire in.
        #[arg(long)]
        selection: PathBuf,

        /// The settings file path.
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Routes handler calls through revert-classifying proxies.
        #[arg(long)]
        fail_on_unexpected_error: bool,

        /// Generates the extra force-send-ETH wrapper per contract.
        #[arg(long)]
        force_send_eth: bool,
    },
}
