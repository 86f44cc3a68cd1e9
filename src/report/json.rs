use serde::Serialize;

use crate::model::variant::Variant;

/// Machine-readable description of one record shape.
#[derive(Debug, Clone, Serialize)]
pub struct VariantLayout {
    pub variant: Variant,
    pub field_count: usize,
    pub fields: Vec<&'static str>,
    pub angle_offset_degrees: i32,
    pub has_flags: bool,
    pub has_rotation: bool,
    pub has_throttle: bool,
}

impl VariantLayout {
    pub fn of(variant: Variant) -> Self {
        Self {
            variant,
            field_count: variant.field_count(),
            fields: variant.fields().to_vec(),
            angle_offset_degrees: variant.default_angle_offset(),
            has_flags: variant.has_flags(),
            has_rotation: variant.has_rotation(),
            has_throttle: variant.has_throttle(),
        }
    }
}

pub fn render_layout(variant: Variant) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(&VariantLayout::of(variant))?;
    Ok(json)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
