use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use run_builder_cli::cli_args::Args;
use run_builder_cli::options::{command_line, format_command};
use run_builder_cli::run_tui::run_tui;
use run_builder_core::colors::Theme;
use run_builder_core::error::Result;
use run_builder_core::{config, file_handling};

/// Raises the cancel flag once `seconds` have passed.
fn spawn_timeout(seconds: u64, cancel: Arc<AtomicBool>) {
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(seconds));
        info!("Editing timed out after {seconds}s");
        cancel.store(true, Ordering::SeqCst);
    });
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let catalog_path = config::get_catalog_path(&args.catalog_path);
    debug!("Catalog path: `{}`", catalog_path);
    let catalog = file_handling::get_catalog(&catalog_path, args.catalog_path.is_some())?;

    let theme = Theme::new(config::color_enabled(args.no_color));
    let (flags, run_options, container_options) = args.options();

    let (flags, run_options, container_options) = if args.no_tui {
        (flags, run_options, container_options)
    } else {
        let cancel = Arc::new(AtomicBool::new(false));
        if let Some(seconds) = args.timeout {
            spawn_timeout(seconds, Arc::clone(&cancel));
        }

        run_tui(&catalog, &theme, &cancel, flags, run_options, container_options)?
    };

    debug!("Explicitly set flags: {}", flags.iter().join(", "));

    let arguments = command_line(&catalog.program, &run_options, &container_options);
    println!("{}", format_command(&arguments));

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
