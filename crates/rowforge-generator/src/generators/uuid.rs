//! Random UUID v4 generator.

use crate::generators::Generator;
use crate::value::GeneratedValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Yields freshly generated v4 UUIDs built from the generator's own
/// random source, so a seeded RNG gives deterministic identifiers.
pub struct UuidGenerator<R: Rng + Send = StdRng> {
    rng: R,
}

impl<R: Rng + Send> UuidGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> Generator for UuidGenerator<R> {
    fn next_value(&mut self) -> GeneratedValue {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);

        // Set version (4) and variant (RFC 4122) bits
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        GeneratedValue::Uuid(Uuid::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_version_4() {
        let mut g = UuidGenerator::new(StdRng::seed_from_u64(42));
        if let GeneratedValue::Uuid(u) = g.next_value() {
            assert_eq!(u.get_version_num(), 4);
        } else {
            panic!("expected Uuid");
        }
    }

    #[test]
    fn test_successive_values_differ() {
        let mut g = UuidGenerator::new(StdRng::seed_from_u64(42));
        assert_ne!(g.next_value(), g.next_value());
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mut a = UuidGenerator::new(StdRng::seed_from_u64(42));
        let mut b = UuidGenerator::new(StdRng::seed_from_u64(42));
        assert_eq!(a.next_value(), b.next_value());
    }

    #[test]
    fn test_renders_quoted() {
        let mut g = UuidGenerator::new(StdRng::seed_from_u64(42));
        let lit = g.next_value().sql_literal();
        assert!(lit.starts_with('\'') && lit.ends_with('\''));
        assert_eq!(lit.len(), 38); // 36 chars + 2 quotes
    }
}
