use pressup::backends::virtual_device::VirtualTrackedDevice;
use pressup::{press_value, LogicalButton, Vec2};

fn main() {
    // Create a virtual controller and feed it some state
    let mut device = VirtualTrackedDevice::new("virtual:demo", "Demo Controller");
    device.set_bool("PrimaryButton", true);
    device.set_axis1d("Trigger", 0.42);
    device.set_axis2d("Primary2DAxis", Vec2::new(-0.5, 0.9));

    // Poll every logical button once and print what came back
    for &button in LogicalButton::ALL {
        match press_value(&device, button) {
            Ok(Some(value)) => println!("{:?} = {:.2}", button, value),
            Ok(None) => println!("{:?} = (no signal)", button),
            Err(err) => println!("{:?} -> {}", button, err),
        }
    }

    // Disconnect and poll again: everything reads as "no signal"
    device.set_valid(false);
    let trigger = press_value(&device, LogicalButton::Trigger)
        .expect("Trigger is a supported button");
    println!("after disconnect: Trigger = {:?}", trigger);
}
