//! Run Builder CLI Library
//!
//! This crate provides the command-line front end for run-builder: argument
//! parsing, the run and container option structures the editor fills in,
//! and the crossterm terminal that hosts the editing session.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`options`]: Caller-owned options and how editor selections are applied to them
//! - [`terminal`]: Raw mode handling, key input and frame drawing
//! - [`run_tui`]: Glue running a session and applying its result
//!
//! # Examples
//!
//! ```bash
//! # Edit the parameters offered for postgres, then print the command
//! rb postgres
//!
//! # Start from options given on the command line
//! rb --name web -p 8080:80 nginx
//!
//! # Use a custom catalog and skip the editor
//! rb -c ./catalog.yml --no-tui redis
//! ```

pub mod cli_args;
pub mod options;
pub mod run_tui;
pub mod terminal;
