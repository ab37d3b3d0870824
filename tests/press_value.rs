//! End-to-end checks of the public surface: fixtures in, press values out.

use pressup::backends::virtual_device::{FeatureSet, VirtualTrackedDevice};
use pressup::{press_value, LogicalButton, PressValueError, Vec2};

const TOML_FIXTURE: &str = r#"
[booleans]
PrimaryButton = true
MenuButton = false

[axes]
Trigger = 0.42

[axes_2d.Primary2DAxis]
x = 0.3
y = 0.7
"#;

const JSON_FIXTURE: &str = r#"{
    "booleans": { "PrimaryButton": true, "MenuButton": false },
    "axes": { "Trigger": 0.42 },
    "axes_2d": { "Primary2DAxis": { "x": 0.3, "y": 0.7 } }
}"#;

fn programmatic_twin() -> VirtualTrackedDevice {
    let mut dev = VirtualTrackedDevice::new("virtual:twin", "Twin");
    dev.set_bool("PrimaryButton", true);
    dev.set_bool("MenuButton", false);
    dev.set_axis1d("Trigger", 0.42);
    dev.set_axis2d("Primary2DAxis", Vec2::new(0.3, 0.7));
    dev
}

#[test]
fn toml_and_json_fixtures_resolve_like_programmatic_state() {
    let from_toml = VirtualTrackedDevice::from_feature_set(
        "virtual:toml",
        "Toml",
        FeatureSet::from_toml(TOML_FIXTURE).unwrap(),
    );
    let from_json = VirtualTrackedDevice::from_feature_set(
        "virtual:json",
        "Json",
        FeatureSet::from_json(JSON_FIXTURE).unwrap(),
    );
    let twin = programmatic_twin();

    for button in [
        LogicalButton::PrimaryButton,
        LogicalButton::MenuButton,
        LogicalButton::Trigger,
        LogicalButton::PrimaryAxis2DUp,
        LogicalButton::PrimaryAxis2DLeft,
        LogicalButton::Grip, // absent everywhere
    ] {
        let expected = press_value(&twin, button);
        assert_eq!(press_value(&from_toml, button), expected, "{:?}", button);
        assert_eq!(press_value(&from_json, button), expected, "{:?}", button);
    }
}

#[test]
fn spec_scenarios() {
    let mut dev = VirtualTrackedDevice::new("virtual:0", "Controller");
    dev.set_bool("PrimaryButton", true);
    dev.set_axis1d("Trigger", 0.42);
    dev.set_axis2d("Primary2DAxis", Vec2::new(-0.5, 0.9));

    assert_eq!(press_value(&dev, LogicalButton::PrimaryButton), Ok(Some(1.0)));
    assert_eq!(press_value(&dev, LogicalButton::Trigger), Ok(Some(0.42)));
    assert_eq!(press_value(&dev, LogicalButton::PrimaryAxis2DUp), Ok(Some(0.9)));
    assert_eq!(
        press_value(&dev, LogicalButton::None),
        Err(PressValueError::NoPressValue(LogicalButton::None))
    );

    dev.set_valid(false);
    assert_eq!(press_value(&dev, LogicalButton::PrimaryButton), Ok(None));
    assert_eq!(press_value(&dev, LogicalButton::Trigger), Ok(None));
}

#[test]
fn trait_object_dispatch_works() {
    let mut dev = VirtualTrackedDevice::new("virtual:0", "Controller");
    dev.set_axis1d("Grip", 0.9);
    let handle: &dyn pressup::TrackedDevice = &dev;

    assert_eq!(press_value(handle, LogicalButton::Grip), Ok(Some(0.9)));
    assert_eq!(handle.id(), "virtual:0");
    assert_eq!(handle.name(), "Controller");
}

#[test]
fn errors_format_with_the_offending_button() {
    let err = press_value(
        &VirtualTrackedDevice::new("virtual:0", "Controller"),
        LogicalButton::None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("None"));
}
