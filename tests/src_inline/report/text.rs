use super::*;

#[test]
fn variants_table() {
    let out = render_variants();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "variant\tfields\tangle_offset");
    assert_eq!(lines[1], "basic\t11\t90");
    assert_eq!(lines[2], "basic-unsigned\t6\t0");
    assert_eq!(lines[3], "extended\t15\t90");
}

#[test]
fn validation_summary_marks_missing_values() {
    let transformer = Transformer::new(Variant::Basic);
    let out = render_validation(&transformer, &StreamSummary::default());
    assert!(out.contains("variant\tbasic\n"));
    assert!(out.contains("records\t0\n"));
    assert!(out.contains("angle_min\t.\n"));
}
