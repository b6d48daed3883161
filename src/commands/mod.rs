//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — scan/dir/file.
//!
//! ## Principles
//! - Match CLI inputs here.
//! - Delegate checking to `services/*`.
//! - Return the overall verdict; `main` turns it into the exit code.

pub mod runtime;

pub use runtime::handle_command;
