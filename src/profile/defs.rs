use serde::{Deserialize, Serialize};

use crate::model::variant::Variant;
use crate::pipeline::transform::Transformer;

/// Per-deployment drive settings read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriveProfile {
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub angle_offset_degrees: Option<i32>,
}

impl DriveProfile {
    /// Overlays command-line values on top of the profile; unset values fall
    /// back to the profile, then to the variant defaults.
    pub fn resolve(&self, variant: Option<Variant>, angle_offset: Option<i32>) -> Transformer {
        let variant = variant.or(self.variant).unwrap_or_default();
        let angle_offset = angle_offset
            .or(self.angle_offset_degrees)
            .unwrap_or_else(|| variant.default_angle_offset());
        Transformer::with_angle_offset(variant, angle_offset)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/profile/defs.rs"]
mod tests;
