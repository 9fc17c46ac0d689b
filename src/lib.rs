//! Checkerboard library.
//!
//! Exposes the board representation, the export/render protocol, the
//! command engine, configuration, and logging for use by integration tests
//! and the binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod logger;
pub mod protocol;
