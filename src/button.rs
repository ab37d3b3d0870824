//! Logical buttons and their feature bindings.
//!
//! A [`LogicalButton`] names a user-facing control independently of the
//! hardware feature that implements it. The binding table below is the single
//! source of truth for which feature name backs each button and how its raw
//! value becomes a press value.
//!
//! The table is fixed at build time and indexed once on first use; after that
//! it is read-only and safe to share across threads without locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Engine-agnostic identifier for a user-facing control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalButton {
    /// Sentinel: a binding slot that maps to no control at all.
    None,
    MenuButton,
    Trigger,
    Grip,
    TriggerPressed,
    GripPressed,
    PrimaryButton,
    PrimaryTouch,
    SecondaryButton,
    SecondaryTouch,
    Primary2DAxisTouch,
    Primary2DAxisClick,
    Secondary2DAxisTouch,
    Secondary2DAxisClick,
    PrimaryAxis2DUp,
    PrimaryAxis2DDown,
    PrimaryAxis2DLeft,
    PrimaryAxis2DRight,
    SecondaryAxis2DUp,
    SecondaryAxis2DDown,
    SecondaryAxis2DLeft,
    SecondaryAxis2DRight,
}

impl LogicalButton {
    /// Every defined button, sentinel included.
    pub const ALL: &'static [LogicalButton] = &[
        LogicalButton::None,
        LogicalButton::MenuButton,
        LogicalButton::Trigger,
        LogicalButton::Grip,
        LogicalButton::TriggerPressed,
        LogicalButton::GripPressed,
        LogicalButton::PrimaryButton,
        LogicalButton::PrimaryTouch,
        LogicalButton::SecondaryButton,
        LogicalButton::SecondaryTouch,
        LogicalButton::Primary2DAxisTouch,
        LogicalButton::Primary2DAxisClick,
        LogicalButton::Secondary2DAxisTouch,
        LogicalButton::Secondary2DAxisClick,
        LogicalButton::PrimaryAxis2DUp,
        LogicalButton::PrimaryAxis2DDown,
        LogicalButton::PrimaryAxis2DLeft,
        LogicalButton::PrimaryAxis2DRight,
        LogicalButton::SecondaryAxis2DUp,
        LogicalButton::SecondaryAxis2DDown,
        LogicalButton::SecondaryAxis2DLeft,
        LogicalButton::SecondaryAxis2DRight,
    ];
}

/// How a raw feature value is converted into a scalar press value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadStrategy {
    /// No continuous press value exists for this button.
    None,
    /// Boolean feature; pressed reads as `1.0`, released as `0.0`.
    Binary,
    /// Scalar feature passed through unmodified.
    Axis1D,
    /// 2D feature; the signed vertical component is returned.
    Axis2DUp,
    /// 2D feature; the signed vertical component is returned.
    Axis2DDown,
    /// 2D feature; the signed horizontal component is returned.
    Axis2DLeft,
    /// 2D feature; the signed horizontal component is returned.
    Axis2DRight,
}

/// Hardware feature name plus read strategy for one logical button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureBinding {
    /// Feature name as exposed by the device.
    pub feature: &'static str,
    /// How the raw value becomes a press value.
    pub strategy: ReadStrategy,
}

/// All known button bindings.
///
/// The four directional variants of one stick bind to the same feature name
/// on purpose: they read the same physical axis and differ only in which
/// signed component the resolver returns.
const BINDINGS: &[(LogicalButton, FeatureBinding)] = &[
    (
        LogicalButton::None,
        FeatureBinding { feature: "", strategy: ReadStrategy::None },
    ),
    (
        LogicalButton::MenuButton,
        FeatureBinding { feature: "MenuButton", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::Trigger,
        FeatureBinding { feature: "Trigger", strategy: ReadStrategy::Axis1D },
    ),
    (
        LogicalButton::Grip,
        FeatureBinding { feature: "Grip", strategy: ReadStrategy::Axis1D },
    ),
    (
        LogicalButton::TriggerPressed,
        FeatureBinding { feature: "TriggerPressed", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::GripPressed,
        FeatureBinding { feature: "GripPressed", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::PrimaryButton,
        FeatureBinding { feature: "PrimaryButton", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::PrimaryTouch,
        FeatureBinding { feature: "PrimaryTouch", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::SecondaryButton,
        FeatureBinding { feature: "SecondaryButton", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::SecondaryTouch,
        FeatureBinding { feature: "SecondaryTouch", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::Primary2DAxisTouch,
        FeatureBinding { feature: "Primary2DAxisTouch", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::Primary2DAxisClick,
        FeatureBinding { feature: "Primary2DAxisClick", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::Secondary2DAxisTouch,
        FeatureBinding { feature: "Secondary2DAxisTouch", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::Secondary2DAxisClick,
        FeatureBinding { feature: "Secondary2DAxisClick", strategy: ReadStrategy::Binary },
    ),
    (
        LogicalButton::PrimaryAxis2DUp,
        FeatureBinding { feature: "Primary2DAxis", strategy: ReadStrategy::Axis2DUp },
    ),
    (
        LogicalButton::PrimaryAxis2DDown,
        FeatureBinding { feature: "Primary2DAxis", strategy: ReadStrategy::Axis2DDown },
    ),
    (
        LogicalButton::PrimaryAxis2DLeft,
        FeatureBinding { feature: "Primary2DAxis", strategy: ReadStrategy::Axis2DLeft },
    ),
    (
        LogicalButton::PrimaryAxis2DRight,
        FeatureBinding { feature: "Primary2DAxis", strategy: ReadStrategy::Axis2DRight },
    ),
    (
        LogicalButton::SecondaryAxis2DUp,
        FeatureBinding { feature: "Secondary2DAxis", strategy: ReadStrategy::Axis2DUp },
    ),
    (
        LogicalButton::SecondaryAxis2DDown,
        FeatureBinding { feature: "Secondary2DAxis", strategy: ReadStrategy::Axis2DDown },
    ),
    (
        LogicalButton::SecondaryAxis2DLeft,
        FeatureBinding { feature: "Secondary2DAxis", strategy: ReadStrategy::Axis2DLeft },
    ),
    (
        LogicalButton::SecondaryAxis2DRight,
        FeatureBinding { feature: "Secondary2DAxis", strategy: ReadStrategy::Axis2DRight },
    ),
];

/// Look up the feature binding for a button, if the table knows it.
pub fn binding_for(button: LogicalButton) -> Option<&'static FeatureBinding> {
    static INDEX: OnceLock<HashMap<LogicalButton, &'static FeatureBinding>> = OnceLock::new();
    let index = INDEX.get_or_init(|| BINDINGS.iter().map(|(b, info)| (*b, info)).collect());
    index.get(&button).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_button() {
        for &button in LogicalButton::ALL {
            assert!(
                binding_for(button).is_some(),
                "no binding for {:?}",
                button
            );
        }
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        let mut seen = HashMap::new();
        for (button, _) in BINDINGS {
            assert!(
                seen.insert(*button, ()).is_none(),
                "{:?} bound twice",
                button
            );
        }
        assert_eq!(BINDINGS.len(), LogicalButton::ALL.len());
    }

    #[test]
    fn only_the_sentinel_lacks_a_strategy() {
        for (button, info) in BINDINGS {
            if *button == LogicalButton::None {
                assert_eq!(info.strategy, ReadStrategy::None);
            } else {
                assert_ne!(info.strategy, ReadStrategy::None, "{:?}", button);
            }
        }
    }

    #[test]
    fn directional_variants_share_one_feature() {
        let primary = [
            LogicalButton::PrimaryAxis2DUp,
            LogicalButton::PrimaryAxis2DDown,
            LogicalButton::PrimaryAxis2DLeft,
            LogicalButton::PrimaryAxis2DRight,
        ];
        let secondary = [
            LogicalButton::SecondaryAxis2DUp,
            LogicalButton::SecondaryAxis2DDown,
            LogicalButton::SecondaryAxis2DLeft,
            LogicalButton::SecondaryAxis2DRight,
        ];
        for button in primary {
            assert_eq!(binding_for(button).unwrap().feature, "Primary2DAxis");
        }
        for button in secondary {
            assert_eq!(binding_for(button).unwrap().feature, "Secondary2DAxis");
        }
    }
}
