//! Service layer containing the checking logic and its side-effect helpers.
//!
//! ## Service map
//! - `validator.rs` — heuristic rule set + source reading.
//! - `walker.rs` — recursive `.sql` discovery and per-directory folding.
//! - `runner.rs` — root detection and the candidate directory scan.
//! - `output.rs` — text/JSON output helpers.
//!
//! ## Conventions
//! - Checks operate on text already in memory; only `read_source` and the
//!   walker touch the filesystem.
//! - Failures are file-scoped: they become reports, never errors.

pub mod output;
pub mod runner;
pub mod validator;
pub mod walker;
