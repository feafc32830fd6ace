//! Running the interactive editor against the caller's options.

use std::io::stdout;
use std::sync::atomic::AtomicBool;

use log::debug;
use run_builder_core::catalog::Catalog;
use run_builder_core::colors::Theme;
use run_builder_core::commit::commit;
use run_builder_core::error::Result;
use run_builder_core::model::Model;
use run_builder_core::session::{self, KeySource, Screen};

use crate::options::{apply, ContainerOptions, FlagSet, RunOptions};
use crate::terminal::{RawModeGuard, TerminalKeys, TerminalScreen};

/// The caller's option structures, handed in and handed back by the editor.
pub type EditedOptions = (FlagSet, RunOptions, ContainerOptions);

/// Runs the editor on the terminal for `container_options.image`.
///
/// The terminal is restored on every exit path.
///
/// # Errors
///
/// Returns an error if the terminal cannot be acquired, if the session fails
/// or is cancelled. The options are not modified in those cases.
pub fn run_tui(
    catalog: &Catalog,
    theme: &Theme,
    cancel: &AtomicBool,
    flags: FlagSet,
    run_options: RunOptions,
    container_options: ContainerOptions,
) -> Result<EditedOptions> {
    let _raw_mode_guard = RawModeGuard::acquire()?;

    edit_options(
        catalog,
        theme,
        cancel,
        &mut TerminalKeys,
        &mut TerminalScreen::new(stdout()),
        (flags, run_options, container_options),
    )
}

/// Runs a session with the given key source and screen, then applies the result.
///
/// # Errors
///
/// Returns an error if the session fails, is cancelled, or ends in a state
/// that cannot be committed.
pub fn edit_options<K, S>(
    catalog: &Catalog,
    theme: &Theme,
    cancel: &AtomicBool,
    keys: &mut K,
    screen: &mut S,
    options: EditedOptions,
) -> Result<EditedOptions>
where
    K: KeySource,
    S: Screen,
{
    let (mut flags, mut run_options, mut container_options) = options;

    let model = Model::new(catalog, &container_options.image);
    let final_model = session::run(model, keys, screen, theme, cancel)?;

    let selections = commit(&final_model)?;
    debug!("Selections: {selections:?}");
    apply(selections, &mut flags, &mut run_options, &mut container_options);

    Ok((flags, run_options, container_options))
}
