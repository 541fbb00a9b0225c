//! Command Line Interface (CLI) layer for cloudbake.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the bake and optimize
//! flows. It wires user-provided options to the underlying library
//! functionality exposed via `cloudbake::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
