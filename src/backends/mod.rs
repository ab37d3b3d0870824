//! Device backends for `pressup`.
//!
//! Implementations of [`TrackedDevice`](crate::device::TrackedDevice).
//!
//! Only the virtual backend ships here: `pressup` resolves press values from
//! a device handle the caller already holds, it does not discover or open OS
//! devices. Platform discovery belongs to the embedding application or to a
//! dedicated device-manager crate.

pub mod virtual_device;
