//! Random character-string generator.

use crate::error::SpecError;
use crate::generators::Generator;
use crate::spec::ColumnSpec;
use crate::value::GeneratedValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const DEFAULT_LENGTH: usize = 20;

/// Fixed-length string of characters drawn independently and uniformly
/// from a palette: the 62-symbol alphanumeric set by default, or the
/// spec's `oneOf` string reinterpreted as explicit palette characters.
pub struct StringRandom<R: Rng + Send = StdRng> {
    rng: R,
    length: usize,
    palette: Vec<char>,
}

impl<R: Rng + Send> StringRandom<R> {
    pub fn new(length: usize, palette: Vec<char>, rng: R) -> Self {
        Self {
            rng,
            length,
            palette,
        }
    }
}

impl StringRandom {
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let length = spec.length.unwrap_or_else(|| {
            tracing::warn!(column, "absent length for random string, defaulting to {DEFAULT_LENGTH}");
            DEFAULT_LENGTH
        });
        let palette: Vec<char> = match spec.one_of.as_deref() {
            Some(chars) if !chars.is_empty() => chars.chars().collect(),
            _ => ALPHANUMERIC.chars().collect(),
        };
        Ok(Self::new(length, palette, StdRng::from_entropy()))
    }
}

impl<R: Rng + Send> Generator for StringRandom<R> {
    fn next_value(&mut self) -> GeneratedValue {
        let s: String = (0..self.length)
            .map(|_| self.palette[self.rng.gen_range(0..self.palette.len())])
            .collect();
        GeneratedValue::Str(s)
    }
}
