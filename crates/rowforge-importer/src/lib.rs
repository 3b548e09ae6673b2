//! Batch assembly and the import loop for rowforge.
//!
//! Column generators come from `rowforge-generator`; this crate turns
//! them into fixed-size batches of row-tuple literals and drives them
//! through a [`Sink`] until the requested record count is reached.

pub mod batch;
pub mod error;
pub mod importer;
pub mod sink;

// Re-exports for convenience
pub use batch::build_batch;
pub use error::ImportError;
pub use importer::{prepare_columns, Importer};
pub use sink::Sink;
