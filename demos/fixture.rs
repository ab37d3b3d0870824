use pressup::backends::virtual_device::{FeatureSet, VirtualTrackedDevice};
use pressup::{press_value, LogicalButton};

const FIXTURE: &str = r#"
[booleans]
PrimaryButton = true
GripPressed = false

[axes]
Trigger = 0.8

[axes_2d.Primary2DAxis]
x = 0.25
y = -0.6
"#;

fn main() {
    // Load a controller state from a TOML fixture instead of setters
    let features = FeatureSet::from_toml(FIXTURE).expect("parse fixture");
    let device = VirtualTrackedDevice::from_feature_set("virtual:fixture", "Fixture Controller", features);

    for button in [
        LogicalButton::PrimaryButton,
        LogicalButton::GripPressed,
        LogicalButton::Trigger,
        LogicalButton::PrimaryAxis2DDown,
        LogicalButton::PrimaryAxis2DRight,
        LogicalButton::MenuButton, // not in the fixture
    ] {
        match press_value(&device, button) {
            Ok(Some(value)) => println!("{:?} = {:.2}", button, value),
            Ok(None) => println!("{:?} = (no signal)", button),
            Err(err) => println!("{:?} -> {}", button, err),
        }
    }
}
