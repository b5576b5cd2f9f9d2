//! Command-line interface implementation for Repose.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for Repose.
#[derive(Parser, Debug)]
#[command(author, version, about = "Repose: a small static site generator for markdown content", long_about = None)]
pub struct Args {
    /// Directory to use as root of the project
    #[arg(short, long, value_name = "ROOT", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Path to the configuration file, relative to the root
    #[arg(short, long, value_name = "CONFIG", default_value = "config.yml", global = true)]
    pub config: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Build the site into the output directory
    Build,
    /// Create new content
    New {
        /// Directory under the content root; its first segment is the content type
        #[arg(value_name = "CONTENT_TYPE")]
        content_type: String,

        /// Name of the new file; `.md` is added when no extension is given
        #[arg(value_name = "FILENAME")]
        file_name: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the command or its arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
