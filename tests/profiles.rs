use std::fs;

use gps_mixin::{console::Console, profile::ProfileLoader, GpsCar, GpsTracking};
use tempfile::tempdir;

fn fixture_loader() -> ProfileLoader {
    ProfileLoader::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn loads_bundled_cairo_profile() {
    let profile = fixture_loader()
        .load("profiles/cairo.yaml")
        .expect("profile parses");
    assert_eq!(profile.name, "cairo");
    assert!(profile.description.is_some());
    assert_eq!(
        <(f64, f64)>::from(profile.location),
        (30.0444, 31.2357)
    );
}

#[test]
fn profile_settings_drive_the_log_line() {
    let profile = fixture_loader()
        .load("profiles/greenwich.yaml")
        .expect("profile parses");
    let console = Console::capture();
    let car = GpsCar::with_settings(console.clone(), profile.gps_settings().unwrap());
    car.log_location().unwrap();

    let line = &console.lines()[0];
    assert!(line.ends_with("] Location: (51.4779, -0.0015)"), "{line}");
    // "[HH:MM:SS]" prefix
    assert_eq!(line.find(']'), Some(9));
}

#[test]
fn missing_profile_reports_path() {
    let temp = tempdir().expect("tempdir");
    let err = ProfileLoader::new(temp.path())
        .load("absent.yaml")
        .unwrap_err();
    assert!(format!("{err:#}").contains("absent.yaml"));
}

#[test]
fn out_of_range_profile_is_rejected() {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join("bad.yaml"),
        "name: bad\nlocation:\n  latitude: 10.0\n  longitude: 200.0\n",
    )
    .unwrap();
    let err = ProfileLoader::new(temp.path()).load("bad.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("longitude"));
}

#[test]
fn zone_timestamp_profile_is_rejected_at_load() {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join("zoned.yaml"),
        "name: zoned\nlocation:\n  latitude: 30.0444\n  longitude: 31.2357\ntimestamp_format: \"%H:%M %Z\"\n",
    )
    .unwrap();
    let err = ProfileLoader::new(temp.path())
        .load("zoned.yaml")
        .unwrap_err();
    assert!(format!("{err:#}").contains("invalid timestamp format"), "{err:#}");
}
