//! Declarative per-column specification.

use crate::error::SpecError;
use serde::Deserialize;

/// Declarative description of how to synthesize one column's values.
///
/// Deserialized from the `Columns` section of the config file. Every
/// field except `type` is optional; which ones are required depends on
/// the generator type and is validated at construction time.
///
/// ```yaml
/// Columns:
///   id:
///     type: int/incremental
///     first: "1"
///     minVal: "1"
///     maxVal: "5"
///   name:
///     type: string/oneof
///     oneOf: "alice:3;bob:2;carol"
///     nullable: 0.1
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnSpec {
    /// Generator type name looked up in the registry.
    #[serde(rename = "type")]
    pub gen_type: String,

    /// Probability in [0, 1] of producing NULL instead of a value.
    #[serde(default)]
    pub nullable: f64,

    /// Lower bound, parsed per-type (integer, float, or datetime).
    #[serde(rename = "minVal", default)]
    pub min_val: Option<String>,

    /// Upper bound, parsed per-type.
    #[serde(rename = "maxVal", default)]
    pub max_val: Option<String>,

    /// ";"-delimited `value[:weight]` choice list.
    #[serde(rename = "oneOf", default)]
    pub one_of: Option<String>,

    /// Length for random strings and text slices.
    #[serde(default)]
    pub length: Option<usize>,

    /// Starting value for incremental types.
    #[serde(default)]
    pub first: Option<String>,

    /// Explicit literal template; `{}` is replaced by the raw value.
    #[serde(default)]
    pub format: Option<String>,
}

impl ColumnSpec {
    /// Shorthand used heavily in tests and builders.
    pub fn of_type(gen_type: impl Into<String>) -> Self {
        ColumnSpec {
            gen_type: gen_type.into(),
            ..ColumnSpec::default()
        }
    }

    pub(crate) fn parse_i64(
        &self,
        column: &str,
        what: &'static str,
        raw: Option<&str>,
        default: i64,
    ) -> Result<i64, SpecError> {
        match raw {
            None => Ok(default),
            Some(s) => s.trim().parse().map_err(|_| SpecError::InvalidBound {
                column: column.to_string(),
                what,
                raw: s.to_string(),
            }),
        }
    }

    pub(crate) fn parse_f64(
        &self,
        column: &str,
        what: &'static str,
        raw: Option<&str>,
        default: f64,
    ) -> Result<f64, SpecError> {
        match raw {
            None => Ok(default),
            Some(s) => s.trim().parse().map_err(|_| SpecError::InvalidBound {
                column: column.to_string(),
                what,
                raw: s.to_string(),
            }),
        }
    }

    /// Integer bounds, defaulting to [0, 101) like the original tool did
    /// when `vals` was absent.
    pub(crate) fn int_bounds(&self, column: &str) -> Result<(i64, i64), SpecError> {
        let min = self.parse_i64(column, "minVal", self.min_val.as_deref(), 0)?;
        let max = self.parse_i64(column, "maxVal", self.max_val.as_deref(), 101)?;
        if min >= max {
            return Err(SpecError::InvertedBounds {
                column: column.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok((min, max))
    }

    pub(crate) fn float_bounds(&self, column: &str) -> Result<(f64, f64), SpecError> {
        let min = self.parse_f64(column, "minVal", self.min_val.as_deref(), 0.0)?;
        let max = self.parse_f64(column, "maxVal", self.max_val.as_deref(), 100.0)?;
        if min >= max {
            return Err(SpecError::InvertedBounds {
                column: column.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok((min, max))
    }

    pub(crate) fn require_one_of(&self, column: &str) -> Result<&str, SpecError> {
        self.one_of
            .as_deref()
            .ok_or_else(|| SpecError::MissingArgument {
                column: column.to_string(),
                arg: "oneOf",
            })
    }
}
