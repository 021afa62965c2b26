//! Named, reusable stage chains.
//!
//! `pipekit` consumes its stages: each `pipe!` call is a one-shot. A [`Chain`] keeps
//! an ordered list of named `T -> T` stages that can be run any number of times,
//! and [`TryChain`] does the same for stages that can fail.
//!
//! Running a chain follows the same contract as `pipekit::pipe_all`: stages run once
//! each, in insertion order, and an empty chain returns its input.
//!
//! # Settings
//!
//! [`ChainSettings`] controls per-stage `tracing` events and an optional cap on the
//! number of stages. Settings can be loaded from a `pipekit.toml` file with
//! [`load_settings`].

mod chain;
mod error;
mod settings;

pub use chain::{Chain, TryChain};
pub use error::{ChainError, StageError};
pub use settings::{ChainSettings, SETTINGS_FILE_NAME, discover_settings, load_settings};
