//! Nullability decorator.

use crate::generators::Generator;
use crate::value::GeneratedValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wraps a generator and substitutes `Null` with probability `p`.
pub struct Nullable<R: Rng + Send = StdRng> {
    rng: R,
    p: f64,
    inner: Box<dyn Generator>,
}

impl<R: Rng + Send> Nullable<R> {
    pub fn new(inner: Box<dyn Generator>, p: f64, rng: R) -> Self {
        Self { rng, p, inner }
    }
}

/// Wrap `gen` with null probability `p`.
///
/// `p <= 0` returns the inner generator unwrapped so non-nullable
/// columns never pay for the extra RNG draw.
pub fn make_nullable(gen: Box<dyn Generator>, p: f64) -> Box<dyn Generator> {
    if p <= 0.0 {
        return gen;
    }
    Box::new(Nullable::new(gen, p, StdRng::from_entropy()))
}

impl<R: Rng + Send> Generator for Nullable<R> {
    fn next_value(&mut self) -> GeneratedValue {
        if self.rng.gen::<f64>() < self.p {
            return GeneratedValue::Null;
        }
        self.inner.next_value()
    }
}
