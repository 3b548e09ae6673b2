//! Error types for the import pipeline.

use rowforge_generator::SpecError;
use thiserror::Error;

/// Errors that can occur while preparing or running an import.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Generator construction failed for a column spec.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Invalid run parameters.
    #[error("configuration error: {0}")]
    Config(String),

    /// Sink failure, propagated unchanged; aborts the run.
    #[error("sink error: {0}")]
    Sink(String),
}
