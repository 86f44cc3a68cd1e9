use crate::model::variant::Variant;
use crate::pipeline::stream::StreamSummary;
use crate::pipeline::transform::Transformer;

pub fn render_variants() -> String {
    let mut out = String::new();
    out.push_str("variant\tfields\tangle_offset\n");
    for variant in Variant::ordered() {
        out.push_str(variant.as_str());
        out.push('\t');
        out.push_str(&variant.field_count().to_string());
        out.push('\t');
        out.push_str(&variant.default_angle_offset().to_string());
        out.push('\n');
    }
    out
}

pub fn render_validation(transformer: &Transformer, summary: &StreamSummary) -> String {
    let mut lines = Vec::new();
    lines.push(("variant", transformer.variant().to_string()));
    lines.push(("angle_offset", transformer.angle_offset().to_string()));
    lines.push(("records", summary.records.to_string()));
    lines.push(("angle_min", opt(summary.angle_min)));
    lines.push(("angle_max", opt(summary.angle_max)));
    lines.push(("speed_min", opt(summary.speed_min)));
    lines.push(("speed_max", opt(summary.speed_max)));
    lines.push(("turbo_records", summary.turbo_records.to_string()));
    lines.push(("adjust_records", summary.adjust_records.to_string()));

    let mut buf = String::new();
    for (k, v) in lines {
        buf.push_str(k);
        buf.push('\t');
        buf.push_str(&v);
        buf.push('\n');
    }
    buf
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| ".".to_string(), |v| v.to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
