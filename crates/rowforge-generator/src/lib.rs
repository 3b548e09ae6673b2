//! Column value generators for rowforge.
//!
//! This crate turns a declarative per-column [`ColumnSpec`] into a
//! stateful value [`Generator`] through a [`GeneratorRegistry`].
//! Cross-cutting behavior is layered on with two decorators:
//! [`Nullable`](nullable::Nullable) substitutes NULL with a configured
//! probability and [`Formatter`] renders raw values into sink literal
//! syntax.
//!
//! # Architecture
//!
//! ```text
//! ColumnSpec (YAML)
//!        │
//!        ▼
//! ┌────────────────────┐
//! │ GeneratorRegistry  │  type name -> constructor
//! └─────────┬──────────┘
//!           ▼
//!   Nullable(Generator)
//!           │
//!           ▼
//!   Formatter -> "literal text"
//! ```
//!
//! # Generator types
//!
//! - `int`, `int/uniform` - uniform integer in `[minVal, maxVal)`
//! - `int/incremental`, `incremental` - atomically stepped counters
//! - `float`, `float/uniform` - uniform float in `[minVal, maxVal)`
//! - `float/normal` - normal with mean `(min+max)/2`, stdev `(max-min)/2`
//! - `float/exp` - exponential above the hard lower bound `minVal`
//! - `oneof` and typed aliases - fixed or weighted multiple choice
//! - `string`, `string/rand` - random characters from a palette
//! - `string/text` - random slice of a fixed text corpus
//! - `string/uuid` - random v4 UUID
//! - `bool` - fair coin flip
//! - `datetime`, `datetime/now` - sink-side NOW() marker
//! - `datetime/uniform` - uniform over Unix seconds between two bounds

pub mod error;
pub mod format;
pub mod generators;
pub mod nullable;
pub mod registry;
pub mod spec;
pub mod value;

// Re-exports for convenience
pub use error::SpecError;
pub use format::Formatter;
pub use generators::Generator;
pub use registry::{BuildFn, GeneratorRegistry};
pub use spec::ColumnSpec;
pub use value::{GeneratedValue, DATETIME_FORMAT};
