//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: create projects from placeholder-token templates", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project from a registered project type
    New {
        /// Name of the new project
        #[arg(value_name = "NAME")]
        name: String,

        /// Project type; selected interactively when omitted
        #[arg(value_name = "TYPE")]
        project_type: Option<String>,

        /// Directory to create the project in.
        /// Defaults to the configured project root joined with NAME.
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// License template to use instead of the type's default
        #[arg(short, long, value_name = "LICENSE")]
        license: Option<String>,

        /// Skip writing a license file
        #[arg(long)]
        no_license: bool,

        /// Skip version-control initialization
        #[arg(long)]
        no_vcs: bool,
    },

    /// List the registered project types
    List,

    /// List the available license templates
    Licenses,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
