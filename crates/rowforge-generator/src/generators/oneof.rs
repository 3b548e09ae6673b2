//! Fixed and weighted multiple-choice generators.

use crate::error::SpecError;
use crate::generators::Generator;
use crate::spec::ColumnSpec;
use crate::value::GeneratedValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An ordered list of `(value, weight)` pairs plus their total weight.
///
/// Declaration order is preserved so that selection replays bit-exactly
/// under a seeded random source.
#[derive(Debug, Clone)]
pub struct WeightedChoice {
    options: Vec<(String, i64)>,
    total: i64,
}

impl WeightedChoice {
    /// Parse a ";"-delimited list of `value[:weight]` options.
    ///
    /// An absent or unparseable weight defaults to 1 (with a warning
    /// for the unparseable case, keeping the whole option text as the
    /// value). Weight 0 is legal and makes that option unreachable.
    pub fn parse(column: &str, raw: &str) -> Result<Self, SpecError> {
        if raw.trim().is_empty() {
            return Err(SpecError::EmptyChoices {
                column: column.to_string(),
            });
        }
        let mut options = Vec::new();
        let mut total = 0i64;
        for opt in raw.split(';') {
            let (value, weight) = match opt.rsplit_once(':') {
                None => (opt.to_string(), 1),
                Some((value, weight)) => match weight.trim().parse::<i64>() {
                    Ok(w) if w < 0 => {
                        return Err(SpecError::NegativeWeight {
                            column: column.to_string(),
                            option: opt.to_string(),
                        })
                    }
                    Ok(w) => (value.to_string(), w),
                    Err(_) => {
                        tracing::warn!(column, option = opt, "unparseable weight, defaulting to 1");
                        (opt.to_string(), 1)
                    }
                },
            };
            total += weight;
            options.push((value, weight));
        }
        if total == 0 {
            return Err(SpecError::ZeroWeightTotal {
                column: column.to_string(),
            });
        }
        Ok(Self { options, total })
    }

    /// Pick one option with probability proportional to its weight.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        let mut n = rng.gen_range(0..self.total);
        for (value, weight) in &self.options {
            n -= weight;
            if n < 0 {
                return value;
            }
        }
        unreachable!("draw in [0, total) always lands on an option")
    }

    pub fn total_weight(&self) -> i64 {
        self.total
    }
}

/// Generator selecting from a fixed option pool, uniformly or weighted.
///
/// The quoted flavor wraps the selected text in single quotes; the
/// plain flavor emits it verbatim so numeric pools stay unquoted.
pub struct OneOf<R: Rng + Send = StdRng> {
    rng: R,
    choice: WeightedChoice,
    quoted: bool,
}

impl<R: Rng + Send> OneOf<R> {
    pub fn new(choice: WeightedChoice, quoted: bool, rng: R) -> Self {
        Self {
            rng,
            choice,
            quoted,
        }
    }
}

impl OneOf {
    pub fn from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let choice = WeightedChoice::parse(column, spec.require_one_of(column)?)?;
        Ok(Self::new(choice, false, StdRng::from_entropy()))
    }

    pub fn quoted_from_spec(column: &str, spec: &ColumnSpec) -> Result<Self, SpecError> {
        let choice = WeightedChoice::parse(column, spec.require_one_of(column)?)?;
        Ok(Self::new(choice, true, StdRng::from_entropy()))
    }
}

impl<R: Rng + Send> Generator for OneOf<R> {
    fn next_value(&mut self) -> GeneratedValue {
        let picked = self.choice.pick(&mut self.rng);
        if self.quoted {
            GeneratedValue::Str(picked.to_string())
        } else {
            GeneratedValue::Raw(picked.to_string())
        }
    }
}
