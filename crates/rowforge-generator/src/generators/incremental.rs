//! Incremental counter generators.

use crate::error::SpecError;
use crate::generators::numeric::IntUniform;
use crate::generators::Generator;
use crate::spec::ColumnSpec;
use crate::value::GeneratedValue;
use std::sync::atomic::{AtomicI64, Ordering};

/// Running total stepped by a wrapped generator.
///
/// Each call atomically adds the wrapped generator's next value to the
/// total and returns the pre-addition value. The counter update is a
/// single `fetch_add`, so adds are never lost even if future callers
/// drive one column from several producers.
pub struct Incremental {
    next: AtomicI64,
    step: Box<dyn Generator>,
}

impl Incremental {
    pub fn new(first: i64, step: Box<dyn Generator>) -> Self {
        Self {
            next: AtomicI64::new(first),
            step,
        }
    }

    /// Plain counter: starts at `first`, increments by 1.
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let first = spec.parse_i64(column, "first", spec.first.as_deref(), 0)?;
        Ok(Self::new(first, Box::new(ConstStep(1))))
    }

    /// Counter stepped by a uniform-integer generator built from the
    /// same spec's bounds.
    pub fn uniform_step_from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let first = spec.parse_i64(column, "first", spec.first.as_deref(), 0)?;
        let step = IntUniform::from_spec(column, spec)?;
        Ok(Self::new(first, Box::new(step)))
    }
}

impl Generator for Incremental {
    fn next_value(&mut self) -> GeneratedValue {
        let step = match self.step.next_value() {
            GeneratedValue::Int(n) => n,
            other => panic!("incremental step generator produced a non-integer value: {other:?}"),
        };
        GeneratedValue::Int(self.next.fetch_add(step, Ordering::Relaxed))
    }
}

/// Constant integer step, also handy as a deterministic test source.
pub struct ConstStep(pub i64);

impl Generator for ConstStep {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Int(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_step_sequence() {
        let mut g = Incremental::new(0, Box::new(ConstStep(5)));
        let seq: Vec<_> = (0..4).map(|_| g.next_value()).collect();
        assert_eq!(
            seq,
            vec![
                GeneratedValue::Int(0),
                GeneratedValue::Int(5),
                GeneratedValue::Int(10),
                GeneratedValue::Int(15),
            ]
        );
    }

    #[test]
    fn test_plain_counter_starts_at_first() {
        let spec = ColumnSpec {
            first: Some("7".into()),
            ..ColumnSpec::of_type("incremental")
        };
        let mut g = Incremental::from_spec("id", &spec).unwrap();
        assert_eq!(g.next_value(), GeneratedValue::Int(7));
        assert_eq!(g.next_value(), GeneratedValue::Int(8));
    }

    #[test]
    fn test_first_defaults_to_zero() {
        let spec = ColumnSpec::of_type("incremental");
        let mut g = Incremental::from_spec("id", &spec).unwrap();
        assert_eq!(g.next_value(), GeneratedValue::Int(0));
    }

    #[test]
    fn test_uniform_step_is_monotonic() {
        let spec = ColumnSpec {
            first: Some("0".into()),
            min_val: Some("1".into()),
            max_val: Some("10".into()),
            ..ColumnSpec::of_type("int/incremental")
        };
        let mut g = Incremental::uniform_step_from_spec("id", &spec).unwrap();
        let mut prev = match g.next_value() {
            GeneratedValue::Int(n) => n,
            other => panic!("expected Int, got {other:?}"),
        };
        assert_eq!(prev, 0);
        for _ in 0..100 {
            if let GeneratedValue::Int(n) = g.next_value() {
                assert!(n > prev, "not monotonic: {n} after {prev}");
                assert!(n - prev < 10, "step too large: {}", n - prev);
                prev = n;
            }
        }
    }

    #[test]
    fn test_unparseable_first_fails() {
        let spec = ColumnSpec {
            first: Some("seven".into()),
            ..ColumnSpec::of_type("incremental")
        };
        assert!(matches!(
            Incremental::from_spec("id", &spec),
            Err(SpecError::InvalidBound { what: "first", .. })
        ));
    }
}
