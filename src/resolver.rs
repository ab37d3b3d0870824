//! Press-value resolution.
//!
//! [`press_value`] turns a [`LogicalButton`] request into at most one scalar,
//! by looking the button up in the static binding table and reading the bound
//! feature from the device with the strategy the table prescribes.
//!
//! ## Two failure channels, on purpose
//! - A bad *argument* (a button the table cannot answer, or the sentinel,
//!   which carries no continuous value) is a caller bug and comes back as
//!   [`PressValueError`]. It is never swallowed or defaulted.
//! - A missing *signal* (device disconnected, feature absent on this SKU,
//!   feature exposed under another type) is routine and comes back as
//!   `Ok(None)`. Polling loops treat it as "no input right now".
//!
//! Do not collapse these into one channel; they answer different questions.

use thiserror::Error;

use crate::button::{binding_for, LogicalButton, ReadStrategy};
use crate::device::TrackedDevice;

/// A press-value request that the binding table is not built to answer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PressValueError {
    /// The button has no entry in the binding table.
    #[error("logical button {0:?} is not supported")]
    UnsupportedButton(LogicalButton),

    /// The button exists but is defined to carry no continuous press value.
    #[error("logical button {0:?} has no press value")]
    NoPressValue(LogicalButton),
}

/// Read the current press value of `button` from `device`.
///
/// Returns `Ok(Some(value))` when the bound feature was read, `Ok(None)` when
/// the device is invalid or the feature is currently unreadable, and an error
/// only for buttons the table cannot answer.
///
/// Value ranges: `Binary` yields exactly `0.0` or `1.0`; `Axis1D` passes the
/// raw scalar through; the `Axis2D*` strategies return one signed component
/// of the bound 2D axis. Opposite directions (`Up`/`Down`, `Left`/`Right`)
/// return the *same* signed component — deciding which direction is actuated
/// by sign or threshold is the caller's job, not this layer's.
///
/// Pure and stateless: identical device state and button give identical
/// results, and nothing is mutated on either side.
pub fn press_value(
    device: &dyn TrackedDevice,
    button: LogicalButton,
) -> Result<Option<f32>, PressValueError> {
    let binding = binding_for(button).ok_or(PressValueError::UnsupportedButton(button))?;

    match binding.strategy {
        // The sentinel is rejected before the validity check: asking it for a
        // value is a caller bug whether or not hardware is present.
        ReadStrategy::None => Err(PressValueError::NoPressValue(button)),
        _ if !device.is_valid() => Ok(None),
        ReadStrategy::Binary => Ok(device
            .read_bool(binding.feature)
            .map(|pressed| if pressed { 1.0 } else { 0.0 })),
        ReadStrategy::Axis1D => Ok(device.read_axis1d(binding.feature)),
        ReadStrategy::Axis2DUp | ReadStrategy::Axis2DDown => {
            Ok(device.read_axis2d(binding.feature).map(|v| v.y))
        }
        ReadStrategy::Axis2DLeft | ReadStrategy::Axis2DRight => {
            Ok(device.read_axis2d(binding.feature).map(|v| v.x))
        }
    }
}
