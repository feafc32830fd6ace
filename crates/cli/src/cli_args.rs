//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `rb` binary using
//! the `clap` crate, and turns the parsed arguments into the option
//! structures the editor fills in.

use clap::Parser;
use run_builder_core::parameters::{ParameterKind, RunFlag};

use crate::options::{ContainerOptions, FlagSet, RunOptions};

/// Command-line arguments for the run-builder CLI tool.
///
/// Options given here seed the run and container options before the
/// interactive editor adds its own selections.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use run_builder_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rb", "postgres"]);
/// assert_eq!(args.image, "postgres");
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// The image to run. Also selects the catalog entry offered in the editor.
    pub image: String,

    /// Assign a name to the container.
    #[arg(long)]
    pub name: Option<String>,

    /// Bind mount a volume, as `source:target`.
    #[arg(long, short = 'v', action = clap::ArgAction::Append)]
    pub volume: Vec<String>,

    /// Overwrite the default entrypoint of the image.
    #[arg(long)]
    pub entrypoint: Option<String>,

    /// Set an environment variable, as `KEY=value`.
    #[arg(long, short = 'e', action = clap::ArgAction::Append)]
    pub env: Vec<String>,

    /// Publish a container port to the host, as `host:container`.
    #[arg(long, short = 'p', action = clap::ArgAction::Append)]
    pub publish: Vec<String>,

    /// Run the container in the background.
    #[arg(long, short = 'd', action)]
    pub detach: bool,

    /// Keep STDIN open.
    #[arg(long, short = 'i', action)]
    pub interactive: bool,

    /// Allocate a pseudo-TTY.
    #[arg(long, short = 't', action)]
    pub tty: bool,

    /// Path to the parameter catalog YAML.
    ///
    /// If not provided, defaults to `~/.run-builder/catalog.yml`, falling back
    /// to the built-in catalog when that file does not exist.
    #[arg(long, short = 'c')]
    pub catalog_path: Option<String>,

    /// Disable coloured output. `NO_COLOR` is honoured as well.
    #[arg(long, action)]
    pub no_color: bool,

    /// Skip the interactive editor and only print the command.
    #[arg(long, action)]
    pub no_tui: bool,

    /// Give up editing after this many seconds without committing anything.
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Args {
    /// Builds the option structures from the parsed arguments.
    ///
    /// Every option present on the command line is recorded in the returned
    /// [`FlagSet`] as explicitly set.
    #[must_use]
    pub fn options(&self) -> (FlagSet, RunOptions, ContainerOptions) {
        let mut flags = FlagSet::default();

        let values = [
            (ParameterKind::Name, self.name.is_some()),
            (ParameterKind::Volume, !self.volume.is_empty()),
            (ParameterKind::Entrypoint, self.entrypoint.is_some()),
            (ParameterKind::Env, !self.env.is_empty()),
            (ParameterKind::Port, !self.publish.is_empty()),
        ];
        for (kind, present) in values {
            if present {
                flags.set(kind.flag());
            }
        }

        let switches = [
            (RunFlag::Detach, self.detach),
            (RunFlag::Interactive, self.interactive),
            (RunFlag::Tty, self.tty),
        ];
        for (flag, present) in switches {
            if present {
                flags.set(flag.token());
            }
        }

        let run_options = RunOptions {
            name: self.name.clone(),
            detach: self.detach,
        };

        let container_options = ContainerOptions {
            image: self.image.clone(),
            volumes: self.volume.clone(),
            entrypoint: self.entrypoint.clone(),
            env: self.env.clone(),
            publish: self.publish.clone(),
            stdin: self.interactive,
            tty: self.tty,
        };

        (flags, run_options, container_options)
    }
}
