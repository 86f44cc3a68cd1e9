use serde::{Deserialize, Serialize};

const BASIC_FIELDS: &[&str] = &[
    "x_val", "x_min", "x_max", "y_val", "y_min", "y_max", "rz_val", "rz_min", "rz_max", "turbo",
    "adjust",
];

const BASIC_UNSIGNED_FIELDS: &[&str] = &["x_val", "x_min", "x_max", "y_val", "y_min", "y_max"];

const EXTENDED_FIELDS: &[&str] = &[
    "x_val",
    "x_min",
    "x_max",
    "y_val",
    "y_min",
    "y_max",
    "rz_val",
    "rz_min",
    "rz_max",
    "rz_degrees",
    "throttle_pos",
    "throttle_min",
    "throttle_max",
    "turbo",
    "adjust",
];

/// Record shape accepted on the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Stick X/Y, rotation axis and turbo/adjust switches.
    #[default]
    Basic,
    /// Stick X/Y only; speed is the plain stick magnitude.
    BasicUnsigned,
    /// Basic plus rotation rate and a throttle axis.
    Extended,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::BasicUnsigned => "basic-unsigned",
            Variant::Extended => "extended",
        }
    }

    pub fn ordered() -> &'static [Variant] {
        &[Variant::Basic, Variant::BasicUnsigned, Variant::Extended]
    }

    /// Field names of one input line, in order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Variant::Basic => BASIC_FIELDS,
            Variant::BasicUnsigned => BASIC_UNSIGNED_FIELDS,
            Variant::Extended => EXTENDED_FIELDS,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields().len()
    }

    /// Degrees added to the stick heading before wrapping. Basic and
    /// Extended treat stick-forward (+Y) as heading 0; BasicUnsigned keeps +X.
    pub fn default_angle_offset(&self) -> i32 {
        match self {
            Variant::Basic | Variant::Extended => 90,
            Variant::BasicUnsigned => 0,
        }
    }

    pub fn has_flags(&self) -> bool {
        !matches!(self, Variant::BasicUnsigned)
    }

    pub fn has_rotation(&self) -> bool {
        !matches!(self, Variant::BasicUnsigned)
    }

    pub fn has_throttle(&self) -> bool {
        matches!(self, Variant::Extended)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/variant.rs"]
mod tests;
