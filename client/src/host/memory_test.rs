use super::*;

#[test]
fn write_then_read_round_trips_preference() {
    let host = MemoryHost::new();
    host.write_preference("color-scheme", "dark").unwrap();
    assert_eq!(host.read_preference("color-scheme"), Some("dark".to_owned()));
}

#[test]
fn failing_writes_leave_storage_untouched() {
    let host = MemoryHost::new();
    host.seed_preference("color-scheme", "light");
    host.set_fail_writes(true);

    let err = host
        .write_preference("color-scheme", "dark")
        .expect_err("writes are switched off");
    assert!(matches!(err, HostError::StorageWrite(_)));
    assert_eq!(host.preference("color-scheme"), Some("light".to_owned()));
}

#[test]
fn seeding_bypasses_fail_writes_switch() {
    let host = MemoryHost::new();
    host.set_fail_writes(true);
    host.seed_preference("color-scheme", "dark");
    assert_eq!(host.preference("color-scheme"), Some("dark".to_owned()));
}

#[test]
fn system_preference_defaults_to_unknown() {
    let host = MemoryHost::new();
    assert_eq!(host.system_prefers_dark(), None);
    host.set_system_prefers_dark(Some(true));
    assert_eq!(host.system_prefers_dark(), Some(true));
}

#[test]
fn root_class_toggle_tracks_membership() {
    let host = MemoryHost::new();
    assert!(!host.has_root_class("dark"));
    host.set_root_class("dark", true);
    assert!(host.has_root_class("dark"));
    host.set_root_class("dark", false);
    assert!(!host.has_root_class("dark"));
}
