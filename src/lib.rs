//! pressup — press-value resolution for tracked input devices.
//!
//! Maps logical buttons onto named hardware features and reads them back as
//! one normalized press value per poll, degrading gracefully when the device
//! or a feature is absent.

pub mod backends;
pub mod button;
pub mod device;
pub mod resolver;

pub use button::*;
pub use device::*;
pub use resolver::*;
