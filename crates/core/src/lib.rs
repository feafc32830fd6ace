//! Run Builder Core Library
//!
//! This crate provides the editing core of run-builder, an interactive
//! terminal editor for assembling a `docker run`-style command line from a
//! catalog of per-image parameters and flags.
//!
//! # Key Features
//!
//! - **Parameter Catalog**: Per-image parameters and flags, built in or loaded from YAML
//! - **Editing State Machine**: Browsing and editing modes with a clamped text cursor
//! - **Composite Values**: Only one segment of values like `host:container` is edited
//! - **Rendering**: Colourised, line-wrapped preview of the assembled command
//! - **Committing**: One-shot conversion of the final state into plain run selections
//!
//! # Examples
//!
//! Driving a model by hand and committing the result:
//!
//! ```
//! use run_builder_core::catalog::Catalog;
//! use run_builder_core::commit::commit;
//! use run_builder_core::keys::Key;
//! use run_builder_core::model::{Message, Model};
//!
//! let mut model = Model::new(&Catalog::builtin(), "alpine");
//! for key in [Key::Char('w'), Key::Char('e'), Key::Char('b'), Key::Enter] {
//!     model.update(Message::Key(key));
//! }
//!
//! let selections = commit(&model)?;
//! assert_eq!(selections.name.as_deref(), Some("web"));
//! # Ok::<(), run_builder_core::error::Error>(())
//! ```

pub mod catalog;
pub mod colors;
pub mod commit;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod keys;
pub mod model;
pub mod parameters;
pub mod render;
pub mod session;
