//! The tracked-device capability consumed by the resolver.
//!
//! A [`TrackedDevice`] is an input peripheral that exposes named, typed
//! features (a boolean `"TriggerPressed"`, a scalar `"Grip"`, a 2D
//! `"Primary2DAxis"`). The resolver never enumerates devices itself; it only
//! reads features from a handle the caller already holds.
//!
//! ## Read semantics
//! - Every `read_*` call is synchronous and non-blocking.
//! - `None` means the feature is absent on this hardware, currently
//!   unreadable, or exposed under a different type. That is a routine
//!   condition (controllers sleep, SKUs differ), never an error.
//! - Validity ([`TrackedDevice::is_valid`]) reflects whether the device is
//!   currently connected and tracked; it may flip between polls.

use serde::{Deserialize, Serialize};

/// 2-component vector reported by a 2D axis feature.
///
/// Components are signed, by convention in `[-1.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An input peripheral exposing named features through typed reads.
pub trait TrackedDevice {
    /// Whether the device is currently connected and tracked.
    fn is_valid(&self) -> bool;

    /// Read a boolean feature (button/touch state) by name.
    fn read_bool(&self, feature: &str) -> Option<bool>;

    /// Read a scalar feature (trigger/grip pull amount) by name.
    fn read_axis1d(&self, feature: &str) -> Option<f32>;

    /// Read a 2D axis feature (stick/touchpad position) by name.
    fn read_axis2d(&self, feature: &str) -> Option<Vec2>;

    /// Stable identifier for this device handle.
    fn id(&self) -> &str;

    /// Human-readable device name.
    fn name(&self) -> &str;
}
