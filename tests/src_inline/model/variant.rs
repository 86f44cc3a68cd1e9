use super::*;

#[test]
fn field_counts_match_record_shapes() {
    assert_eq!(Variant::Basic.field_count(), 11);
    assert_eq!(Variant::BasicUnsigned.field_count(), 6);
    assert_eq!(Variant::Extended.field_count(), 15);
}

#[test]
fn default_offsets() {
    assert_eq!(Variant::Basic.default_angle_offset(), 90);
    assert_eq!(Variant::BasicUnsigned.default_angle_offset(), 0);
    assert_eq!(Variant::Extended.default_angle_offset(), 90);
}

#[test]
fn extended_layout_order() {
    let fields = Variant::Extended.fields();
    assert_eq!(fields[9], "rz_degrees");
    assert_eq!(fields[10], "throttle_pos");
    assert_eq!(fields[14], "adjust");
}

#[test]
fn names_round_trip_through_serde() {
    #[derive(serde::Deserialize)]
    struct Wrap {
        variant: Variant,
    }
    for variant in Variant::ordered() {
        let text = format!("variant = \"{}\"", variant.as_str());
        let parsed: Wrap = toml::from_str(&text).expect("parse variant");
        assert_eq!(parsed.variant, *variant);
    }
}
