//! Literal-rendering decorator.

use crate::generators::Generator;
use crate::value::GeneratedValue;

/// Renders a generator's raw values into sink literal text.
///
/// With no template the per-type default applies: quoted for strings,
/// datetimes and UUIDs, unquoted for numbers and markers. An explicit
/// template substitutes the raw value text at `{}`. `NULL` always wins
/// over the template so nullable columns stay well-formed.
pub struct Formatter {
    template: Option<String>,
    gen: Box<dyn Generator>,
}

impl Formatter {
    pub fn new(gen: Box<dyn Generator>, template: Option<String>) -> Self {
        Self { template, gen }
    }

    /// Evaluate the wrapped generator once and render the result.
    pub fn next_literal(&mut self) -> String {
        let value = self.gen.next_value();
        match (&self.template, &value) {
            (_, GeneratedValue::Null) => "NULL".to_string(),
            (Some(template), value) => template.replace("{}", &value.plain_text()),
            (None, value) => value.sql_literal(),
        }
    }
}
