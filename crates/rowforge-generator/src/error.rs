//! Error types for generator construction.

use thiserror::Error;

/// Errors detected while building a generator from a column spec.
///
/// All of these are fatal to the run: every invariant is validated up
/// front so that generation itself cannot fail mid-import.
#[derive(Error, Debug)]
pub enum SpecError {
    /// The spec names a generator type nobody registered.
    #[error("unknown generator type '{gen_type}' for column '{column}'")]
    UnknownType { column: String, gen_type: String },

    /// A required spec field is absent for the chosen type.
    #[error("column '{column}': missing required argument '{arg}'")]
    MissingArgument { column: String, arg: &'static str },

    /// A numeric or datetime bound could not be parsed.
    #[error("column '{column}': unable to parse {what} from '{raw}'")]
    InvalidBound {
        column: String,
        what: &'static str,
        raw: String,
    },

    /// minVal must be strictly smaller than maxVal.
    #[error("column '{column}': minVal {min} is not smaller than maxVal {max}")]
    InvertedBounds {
        column: String,
        min: String,
        max: String,
    },

    /// A choice option carries a negative weight.
    #[error("column '{column}': negative weight in option '{option}'")]
    NegativeWeight { column: String, option: String },

    /// The choice list parsed to no options at all.
    #[error("column '{column}': unable to parse a single option for multiple choice type")]
    EmptyChoices { column: String },

    /// Every choice option has weight zero.
    #[error("column '{column}': multiple choice options need at least one non-zero weight")]
    ZeroWeightTotal { column: String },

    /// Requested text length cannot be cut out of the reference corpus.
    #[error("column '{column}': text length {length} exceeds corpus length {corpus_len}")]
    TextLengthOutOfRange {
        column: String,
        length: usize,
        corpus_len: usize,
    },
}
