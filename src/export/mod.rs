//! Report export.
//!
//! Scan results are written as JSONL (JSON Lines): one complete JSON object
//! per container report, suitable for piping to `jq` or loading into a
//! database.

mod jsonl;

pub use jsonl::export_jsonl;
