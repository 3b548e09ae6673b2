//! Datetime generators.

use crate::error::SpecError;
use crate::generators::Generator;
use crate::spec::ColumnSpec;
use crate::value::{GeneratedValue, DATETIME_FORMAT};
use chrono::{DateTime, NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Always yields the sink-side `NOW()` marker. Bounds are ignored.
pub struct DatetimeNow;

impl Generator for DatetimeNow {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Now
    }
}

/// Uniform datetime over Unix seconds in `[min, max)`.
///
/// Bounds are parsed with the fixed `YYYY-MM-DD HH:MM:SS` layout and
/// default to 1970-01-01 00:00:00 and the current time.
pub struct DatetimeUniform<R: Rng + Send = StdRng> {
    rng: R,
    min: i64,
    max: i64,
}

impl<R: Rng + Send> DatetimeUniform<R> {
    pub fn new(min: i64, max: i64, rng: R) -> Self {
        Self { rng, min, max }
    }
}

impl DatetimeUniform {
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let min = parse_bound(column, "minVal", spec.min_val.as_deref(), 0)?;
        let max = parse_bound(
            column,
            "maxVal",
            spec.max_val.as_deref(),
            Utc::now().timestamp(),
        )?;
        if min >= max {
            return Err(SpecError::InvertedBounds {
                column: column.to_string(),
                min: format_secs(min),
                max: format_secs(max),
            });
        }
        Ok(Self::new(min, max, StdRng::from_entropy()))
    }
}

impl<R: Rng + Send> Generator for DatetimeUniform<R> {
    fn next_value(&mut self) -> GeneratedValue {
        let secs = self.rng.gen_range(self.min..self.max);
        let dt = DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH);
        GeneratedValue::DateTime(dt)
    }
}

fn parse_bound(
    column: &str,
    what: &'static str,
    raw: Option<&str>,
    fallback: i64,
) -> Result<i64, SpecError> {
    match raw {
        None => Ok(fallback),
        Some(s) => NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
            .map(|dt| dt.and_utc().timestamp())
            .map_err(|_| SpecError::InvalidBound {
                column: column.to_string(),
                what,
                raw: s.to_string(),
            }),
    }
}

fn format_secs(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .format(DATETIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_marker() {
        let mut g = DatetimeNow;
        assert_eq!(g.next_value(), GeneratedValue::Now);
        assert_eq!(g.next_value().sql_literal(), "NOW()");
    }

    #[test]
    fn test_draws_stay_in_bounds() {
        let spec = ColumnSpec {
            min_val: Some("2020-01-01 00:00:00".into()),
            max_val: Some("2021-01-01 00:00:00".into()),
            ..ColumnSpec::of_type("datetime/uniform")
        };
        let mut g = DatetimeUniform::from_spec("created", &spec).unwrap();
        let min = 1577836800; // 2020-01-01 00:00:00 UTC
        let max = 1609459200; // 2021-01-01 00:00:00 UTC
        for _ in 0..1000 {
            match g.next_value() {
                GeneratedValue::DateTime(dt) => {
                    let ts = dt.timestamp();
                    assert!((min..max).contains(&ts), "out of range: {ts}");
                }
                other => panic!("expected DateTime, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_bounds_default_to_epoch_and_now() {
        let spec = ColumnSpec::of_type("datetime/uniform");
        let mut g = DatetimeUniform::from_spec("created", &spec).unwrap();
        let now = Utc::now().timestamp();
        if let GeneratedValue::DateTime(dt) = g.next_value() {
            assert!(dt.timestamp() >= 0 && dt.timestamp() < now);
        } else {
            panic!("expected DateTime");
        }
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let spec = ColumnSpec {
            min_val: Some("2021-01-01 00:00:00".into()),
            max_val: Some("2020-01-01 00:00:00".into()),
            ..ColumnSpec::of_type("datetime/uniform")
        };
        assert!(matches!(
            DatetimeUniform::from_spec("created", &spec),
            Err(SpecError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_unparseable_bound_fails() {
        let spec = ColumnSpec {
            min_val: Some("01/02/2020".into()),
            ..ColumnSpec::of_type("datetime/uniform")
        };
        assert!(matches!(
            DatetimeUniform::from_spec("created", &spec),
            Err(SpecError::InvalidBound { what: "minVal", .. })
        ));
    }

    #[test]
    fn test_format_round_trips_to_same_unix_second() {
        let mut g = DatetimeUniform::new(0, 2_000_000_000, StdRng::seed_from_u64(42));
        for _ in 0..100 {
            if let GeneratedValue::DateTime(dt) = g.next_value() {
                let rendered = dt.format(DATETIME_FORMAT).to_string();
                let parsed = NaiveDateTime::parse_from_str(&rendered, DATETIME_FORMAT)
                    .unwrap()
                    .and_utc();
                assert_eq!(parsed.timestamp(), dt.timestamp());
            }
        }
    }
}
