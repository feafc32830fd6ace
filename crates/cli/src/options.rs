//! The run and container options the editor fills in.
//!
//! These are owned by the caller. The editing core only hands back a
//! [`RunSelections`] value, and [`apply`] copies it across in one go.

use indexmap::IndexSet;
use itertools::Itertools;
use run_builder_core::commit::RunSelections;
use run_builder_core::parameters::{ParameterKind, RunFlag};

/// Records which flags were set explicitly, on the command line or by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    changed: IndexSet<String>,
}

impl FlagSet {
    pub fn set(&mut self, flag: &str) {
        self.changed.insert(flag.to_string());
    }

    #[must_use]
    pub fn changed(&self, flag: &str) -> bool {
        self.changed.contains(flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.changed.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub name: Option<String>,
    pub detach: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerOptions {
    pub image: String,
    pub volumes: Vec<String>,
    pub entrypoint: Option<String>,
    pub env: Vec<String>,
    pub publish: Vec<String>,
    pub stdin: bool,
    pub tty: bool,
}

/// Copies the editor's selections onto the caller's option structures.
///
/// List options are appended to, single-valued options are replaced, and
/// every boolean flag is switched on and marked as explicitly set.
pub fn apply(
    selections: RunSelections,
    flags: &mut FlagSet,
    run_options: &mut RunOptions,
    container_options: &mut ContainerOptions,
) {
    let RunSelections {
        name,
        volumes,
        entrypoint,
        env,
        publish,
        flags: run_flags,
    } = selections;

    if name.is_some() {
        run_options.name = name;
    }
    container_options.volumes.extend(volumes);
    if entrypoint.is_some() {
        container_options.entrypoint = entrypoint;
    }
    container_options.env.extend(env);
    container_options.publish.extend(publish);

    for flag in run_flags {
        match flag {
            RunFlag::Detach => run_options.detach = true,
            RunFlag::Interactive => container_options.stdin = true,
            RunFlag::Tty => container_options.tty = true,
        }
        flags.set(flag.token());
    }
}

/// The full argument vector for the configured options, program words first.
#[must_use]
pub fn command_line(
    program: &str,
    run_options: &RunOptions,
    container_options: &ContainerOptions,
) -> Vec<String> {
    let mut arguments: Vec<String> = program.split_whitespace().map(str::to_string).collect();

    let switches = [
        (container_options.stdin, RunFlag::Interactive),
        (container_options.tty, RunFlag::Tty),
        (run_options.detach, RunFlag::Detach),
    ];
    for (enabled, flag) in switches {
        if enabled {
            arguments.push(flag.token().to_string());
        }
    }

    let mut push = |kind: ParameterKind, value: &str| {
        arguments.push(kind.flag().to_string());
        arguments.push(value.to_string());
    };

    if let Some(name) = &run_options.name {
        push(ParameterKind::Name, name);
    }
    for volume in &container_options.volumes {
        push(ParameterKind::Volume, volume);
    }
    if let Some(entrypoint) = &container_options.entrypoint {
        push(ParameterKind::Entrypoint, entrypoint);
    }
    for env in &container_options.env {
        push(ParameterKind::Env, env);
    }
    for publish in &container_options.publish {
        push(ParameterKind::Port, publish);
    }

    arguments.push(container_options.image.clone());
    arguments
}

/// Joins arguments for display, single-quoting any that a shell would split.
#[must_use]
pub fn format_command(arguments: &[String]) -> String {
    arguments
        .iter()
        .map(|argument| {
            if argument.is_empty() || argument.contains(|c: char| c.is_whitespace() || c == '\'') {
                format!("'{}'", argument.replace('\'', r"'\''"))
            } else {
                argument.clone()
            }
        })
        .join(" ")
}
