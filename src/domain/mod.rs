//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — per-file, per-directory and per-run report structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output.
//! Keep them synchronized with `docs/contracts/run_report.schema.json`.

pub mod models;
