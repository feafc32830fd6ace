//! Turning a finished session into plain run selections.
//!
//! The committer never touches the caller's option structures. It produces
//! a [`RunSelections`] value and the caller copies it across.

use log::info;

use crate::error::{Error, Result};
use crate::model::Model;
use crate::parameters::{ParameterKind, RunFlag};

/// Everything the user settled on, grouped by the option it feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSelections {
    pub name: Option<String>,
    pub volumes: Vec<String>,
    pub entrypoint: Option<String>,
    pub env: Vec<String>,
    pub publish: Vec<String>,
    pub flags: Vec<RunFlag>,
}

impl RunSelections {
    fn record(&mut self, kind: ParameterKind, value: String) {
        match kind {
            ParameterKind::Name => self.name = Some(value),
            ParameterKind::Volume => self.volumes.push(value),
            ParameterKind::Entrypoint => self.entrypoint = Some(value),
            ParameterKind::Env => self.env.push(value),
            ParameterKind::Port => self.publish.push(value),
        }
    }
}

/// Collects the effective value of every parameter and every offered flag.
///
/// # Errors
///
/// Returns [`Error::Session`] if the session ended with a terminal error and
/// [`Error::UnexpectedFinalState`] if an edit was still in progress. Nothing
/// is committed in either case.
pub fn commit(model: &Model) -> Result<RunSelections> {
    if let Some(error) = model.terminal_error() {
        return Err(Error::Session(error.to_string()));
    }

    if model.session().is_some() {
        return Err(Error::UnexpectedFinalState(format!(
            "parameter {} is still being edited",
            model.selected()
        )));
    }

    let mut selections = RunSelections::default();
    for param in model.parameters() {
        selections.record(param.kind, param.effective_value().to_string());
    }
    selections.flags = model.flags().to_vec();

    info!(
        "Committing {} parameters and {} flags for `{}`",
        model.parameters().len(),
        selections.flags.len(),
        model.image()
    );

    Ok(selections)
}
