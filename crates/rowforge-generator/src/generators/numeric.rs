//! Numeric distribution generators.

use crate::error::SpecError;
use crate::generators::Generator;
use crate::spec::ColumnSpec;
use crate::value::GeneratedValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1, Normal};

/// Uniform integer in `[min, max)`.
pub struct IntUniform<R: Rng + Send = StdRng> {
    rng: R,
    min: i64,
    max: i64,
}

impl<R: Rng + Send> IntUniform<R> {
    pub fn new(min: i64, max: i64, rng: R) -> Self {
        Self { rng, min, max }
    }
}

impl IntUniform {
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let (min, max) = spec.int_bounds(column)?;
        Ok(Self::new(min, max, StdRng::from_entropy()))
    }
}

impl<R: Rng + Send> Generator for IntUniform<R> {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Int(self.rng.gen_range(self.min..self.max))
    }
}

/// Uniform float in `[min, max)`.
pub struct FloatUniform<R: Rng + Send = StdRng> {
    rng: R,
    min: f64,
    max: f64,
}

impl<R: Rng + Send> FloatUniform<R> {
    pub fn new(min: f64, max: f64, rng: R) -> Self {
        Self { rng, min, max }
    }
}

impl FloatUniform {
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let (min, max) = spec.float_bounds(column)?;
        Ok(Self::new(min, max, StdRng::from_entropy()))
    }
}

impl<R: Rng + Send> Generator for FloatUniform<R> {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Float(self.rng.gen_range(self.min..self.max))
    }
}

/// Normal float with `minVal`/`maxVal` one standard deviation below and
/// above the mean: mean = (min+max)/2, stdev = (max-min)/2.
pub struct FloatNormal<R: Rng + Send = StdRng> {
    rng: R,
    dist: Normal<f64>,
}

impl<R: Rng + Send> FloatNormal<R> {
    /// Returns `None` when the implied standard deviation is not a
    /// positive finite number.
    pub fn new(min: f64, max: f64, rng: R) -> Option<Self> {
        let dist = Normal::new((min + max) / 2.0, (max - min) / 2.0).ok()?;
        Some(Self { rng, dist })
    }
}

impl FloatNormal {
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let (min, max) = spec.float_bounds(column)?;
        Self::new(min, max, StdRng::from_entropy()).ok_or_else(|| SpecError::InvertedBounds {
            column: column.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}

impl<R: Rng + Send> Generator for FloatNormal<R> {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Float(self.dist.sample(&mut self.rng))
    }
}

/// Exponentially distributed float with hard lower bound `minVal`.
///
/// The implied mean offset is (max-min)/2, so around 15% of the draws
/// (e^-2) land above `maxVal`. That tail is documented behavior and is
/// deliberately not clamped.
pub struct FloatExp<R: Rng + Send = StdRng> {
    rng: R,
    min: f64,
    mean: f64,
}

impl<R: Rng + Send> FloatExp<R> {
    pub fn new(min: f64, max: f64, rng: R) -> Self {
        Self {
            rng,
            min,
            mean: (max - min) / 2.0,
        }
    }
}

impl FloatExp {
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let (min, max) = spec.float_bounds(column)?;
        Ok(Self::new(min, max, StdRng::from_entropy()))
    }
}

impl<R: Rng + Send> Generator for FloatExp<R> {
    fn next_value(&mut self) -> GeneratedValue {
        let e: f64 = self.rng.sample(Exp1);
        GeneratedValue::Float(self.min + e * self.mean)
    }
}
