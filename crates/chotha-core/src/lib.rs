//! Chotha Core Library
//!
//! Core note-compaction engine for Chotha: segments raw notes into topics
//! and compacts each topic body through an ordered, level-gated pipeline
//! of lossy textual compressions.

pub mod error;
pub mod format;
pub mod generate;
pub mod level;
pub mod logging;
pub mod pipeline;
pub mod records;
pub mod segment;
