//! Board protocol handling.
//!
//! This module implements the export codec, the human-readable renderer,
//! and the command parser for the main loop.

pub mod export;
pub mod parser;
pub mod render;

pub use export::{encode_export, encode_snapshot_json, parse_export, snapshot, ExportError, SnapshotEntry};
pub use parser::{parse_command, Command};
pub use render::render;
