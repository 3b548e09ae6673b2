//! Registry mapping generator type names to constructors.

use crate::error::SpecError;
use crate::generators::boolean::BoolGenerator;
use crate::generators::incremental::Incremental;
use crate::generators::numeric::{FloatExp, FloatNormal, FloatUniform, IntUniform};
use crate::generators::oneof::OneOf;
use crate::generators::string::StringRandom;
use crate::generators::text::TextGenerator;
use crate::generators::timestamp::{DatetimeNow, DatetimeUniform};
use crate::generators::uuid::UuidGenerator;
use crate::generators::Generator;
use crate::nullable::make_nullable;
use crate::spec::ColumnSpec;
use std::collections::HashMap;

/// Constructor for one generator type.
pub type BuildFn = fn(&str, &ColumnSpec) -> Result<Box<dyn Generator>, SpecError>;

/// Mapping from type name to generator constructor.
///
/// Built once at startup and passed to whoever assembles the column
/// generators; there is no hidden global registration. Re-registering a
/// name overwrites the previous entry, so callers can swap built-ins.
pub struct GeneratorRegistry {
    builders: HashMap<String, BuildFn>,
}

impl GeneratorRegistry {
    /// A registry with no types at all.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Add or replace the constructor for `gen_type`.
    pub fn register(&mut self, gen_type: impl Into<String>, build: BuildFn) {
        self.builders.insert(gen_type.into(), build);
    }

    /// Build the generator for one column, wrapped for nullability.
    pub fn resolve(
        &self,
        column: &str,
        spec: &ColumnSpec,
    ) -> Result<Box<dyn Generator>, SpecError> {
        let build = self
            .builders
            .get(&spec.gen_type)
            .ok_or_else(|| SpecError::UnknownType {
                column: column.to_string(),
                gen_type: spec.gen_type.clone(),
            })?;
        let gen = build(column, spec)?;
        Ok(make_nullable(gen, spec.nullable))
    }
}

impl Default for GeneratorRegistry {
    /// The full built-in type set, under the same alias names the
    /// original config format used.
    fn default() -> Self {
        let mut r = Self::empty();

        // A unified weighted multiple-choice generator covers the typed
        // oneof aliases; string and datetime pools get quoted output.
        r.register("oneof", build_oneof);
        r.register("bool/oneof", build_oneof);
        r.register("float/oneof", build_oneof);
        r.register("int/oneof", build_oneof);
        r.register("string/oneof", build_quoted_oneof);
        r.register("datetime/oneof", build_quoted_oneof);

        r.register("bool", build_bool);
        r.register("datetime", build_datetime_now);
        r.register("datetime/now", build_datetime_now);
        r.register("datetime/uniform", build_datetime_uniform);
        r.register("float", build_float_uniform);
        r.register("float/uniform", build_float_uniform);
        r.register("float/normal", build_float_normal);
        r.register("float/exp", build_float_exp);
        r.register("int", build_int_uniform);
        r.register("int/uniform", build_int_uniform);
        r.register("int/incremental", build_int_incremental);
        r.register("incremental", build_incremental);
        r.register("string", build_string);
        r.register("string/rand", build_string);
        r.register("string/text", build_text);
        r.register("string/uuid", build_uuid);

        r
    }
}

fn build_oneof(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(OneOf::from_spec(column, spec)?))
}

fn build_quoted_oneof(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(OneOf::quoted_from_spec(column, spec)?))
}

fn build_bool(_column: &str, _spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(BoolGenerator::default()))
}

fn build_datetime_now(_column: &str, _spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(DatetimeNow))
}

fn build_datetime_uniform(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(DatetimeUniform::from_spec(column, spec)?))
}

fn build_float_uniform(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(FloatUniform::from_spec(column, spec)?))
}

fn build_float_normal(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(FloatNormal::from_spec(column, spec)?))
}

fn build_float_exp(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(FloatExp::from_spec(column, spec)?))
}

fn build_int_uniform(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(IntUniform::from_spec(column, spec)?))
}

fn build_int_incremental(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(Incremental::uniform_step_from_spec(column, spec)?))
}

fn build_incremental(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(Incremental::from_spec(column, spec)?))
}

fn build_string(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(StringRandom::from_spec(column, spec)?))
}

fn build_text(column: &str, spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(TextGenerator::from_spec(column, spec)?))
}

fn build_uuid(_column: &str, _spec: &ColumnSpec) -> Result<Box<dyn Generator>, SpecError> {
    Ok(Box::new(UuidGenerator::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::GeneratedValue;

    #[test]
    fn test_unknown_type_names_type_and_column() {
        let registry = GeneratorRegistry::default();
        let spec = ColumnSpec::of_type("decimal");
        let err = registry.resolve("price", &spec).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("decimal"), "got: {msg}");
        assert!(msg.contains("price"), "got: {msg}");
    }

    #[test]
    fn test_every_builtin_type_resolves() {
        let registry = GeneratorRegistry::default();
        let types = [
            "oneof",
            "bool/oneof",
            "datetime/oneof",
            "float/oneof",
            "int/oneof",
            "string/oneof",
            "bool",
            "datetime",
            "datetime/now",
            "datetime/uniform",
            "float",
            "float/uniform",
            "float/normal",
            "float/exp",
            "int",
            "int/uniform",
            "int/incremental",
            "incremental",
            "string",
            "string/rand",
            "string/text",
            "string/uuid",
        ];
        for gen_type in types {
            let spec = ColumnSpec {
                one_of: Some("a;b;c".into()),
                ..ColumnSpec::of_type(gen_type)
            };
            // string/* reuse oneOf as a palette, which is fine here.
            registry
                .resolve("col", &spec)
                .unwrap_or_else(|e| panic!("{gen_type} failed to resolve: {e}"));
        }
    }

    #[test]
    fn test_resolve_applies_nullability() {
        let registry = GeneratorRegistry::default();
        let spec = ColumnSpec {
            nullable: 1.0,
            ..ColumnSpec::of_type("int")
        };
        let mut gen = registry.resolve("n", &spec).unwrap();
        for _ in 0..100 {
            assert_eq!(gen.next_value(), GeneratedValue::Null);
        }
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = GeneratorRegistry::default();
        registry.register("int", build_bool);
        let mut gen = registry.resolve("n", &ColumnSpec::of_type("int")).unwrap();
        assert!(matches!(gen.next_value(), GeneratedValue::Bool(_)));
    }
}
