//! Fair coin-flip boolean generator.

use crate::generators::Generator;
use crate::value::GeneratedValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct BoolGenerator<R: Rng + Send = StdRng> {
    rng: R,
}

impl<R: Rng + Send> BoolGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for BoolGenerator {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> Generator for BoolGenerator<R> {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Bool(self.rng.gen_bool(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roughly_fair() {
        let mut g = BoolGenerator::new(StdRng::seed_from_u64(42));
        let n = 10_000;
        let mut trues = 0usize;
        for _ in 0..n {
            if let GeneratedValue::Bool(true) = g.next_value() {
                trues += 1;
            }
        }
        let frac = trues as f64 / n as f64;
        assert!((0.47..0.53).contains(&frac), "bias: {frac}");
    }

    #[test]
    fn test_renders_as_zero_or_one() {
        let mut g = BoolGenerator::new(StdRng::seed_from_u64(42));
        let lit = g.next_value().sql_literal();
        assert!(lit == "0" || lit == "1");
    }
}
