use super::*;

#[test]
fn nonzero_switches_are_truthy() {
    let flags = DriveFlags::from_switches(1.0, 0.0);
    assert!(flags.turbo());
    assert!(!flags.adjust());

    let flags = DriveFlags::from_switches(0.0, -0.25);
    assert!(!flags.turbo());
    assert!(flags.adjust());
}

#[test]
fn csv_rendering() {
    assert_eq!(DriveFlags::empty().to_csv(), ".");
    assert_eq!(DriveFlags::from_switches(1.0, 1.0).to_csv(), "TURBO,ADJUST");
    assert_eq!(DriveFlags::from_switches(0.0, 1.0).to_csv(), "ADJUST");
}

#[test]
fn empty_has_no_switches() {
    let flags = DriveFlags::empty();
    assert!(!flags.turbo());
    assert!(!flags.adjust());
    assert_eq!(flags, DriveFlags::from_switches(0.0, 0.0));
}
