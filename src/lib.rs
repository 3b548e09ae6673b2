//! rowforge library surface.
//!
//! Synthesizes fake rows for a relational table from a declarative
//! per-column spec and bulk-loads them through a sink in fixed-size
//! batches. The generator engine lives in `rowforge-generator`, the
//! batch/import loop in `rowforge-importer`; this crate supplies the
//! YAML config loader and the MySQL sink wired up by the CLI.

pub mod config;
pub mod sink;

pub use config::Config;
pub use sink::MySqlSink;
