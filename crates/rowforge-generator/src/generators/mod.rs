//! Individual value generators for the supported column types.
//!
//! Each generator owns its private random source and is constructed
//! once per column from a [`ColumnSpec`](crate::ColumnSpec). All spec
//! validation happens in the constructors; `next_value` cannot fail.

pub mod boolean;
pub mod incremental;
pub mod numeric;
pub mod oneof;
pub mod string;
pub mod text;
pub mod timestamp;
pub mod uuid;

use crate::value::GeneratedValue;

/// Stateful producer of successive synthetic values for one column.
///
/// A generator is owned exclusively by the column slot that created it
/// and is never shared across columns or threads.
pub trait Generator: Send {
    /// Produce the next raw value.
    fn next_value(&mut self) -> GeneratedValue;
}

impl std::fmt::Debug for dyn Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Generator")
    }
}
