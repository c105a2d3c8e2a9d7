//! Command Line Interface (CLI) layer for logoprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the convert, crop, verify,
//! and render-svg flows. It wires user-provided options to the underlying
//! library functionality exposed via `logoprep::api`.
//!
//! If you are embedding logoprep into another application, prefer using
//! the high-level `logoprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
