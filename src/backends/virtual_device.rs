//! In-memory tracked device for tests, demos, and input injection.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::device::{TrackedDevice, Vec2};

/// Named feature values held by a [`VirtualTrackedDevice`].
///
/// Serializable so device fixtures can live in TOML or JSON files. Each map
/// may be omitted in a fixture; a feature name should appear in only one map
/// (a lookup consults only the map matching the requested type, so a name
/// stored under another type reads as absent).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    #[serde(default)]
    pub booleans: HashMap<String, bool>,
    #[serde(default)]
    pub axes: HashMap<String, f32>,
    #[serde(default)]
    pub axes_2d: HashMap<String, Vec2>,
}

/// Failed to parse a serialized [`FeatureSet`].
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid TOML feature set: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON feature set: {0}")]
    Json(#[from] serde_json::Error),
}

impl FeatureSet {
    /// Parse a feature set from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a feature set from JSON text.
    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A [`TrackedDevice`] whose features are plain in-memory maps.
///
/// New devices start valid and featureless. Feed values in with the setters,
/// or load a whole [`FeatureSet`] fixture.
#[derive(Clone, Debug)]
pub struct VirtualTrackedDevice {
    id: String,
    name: String,
    valid: bool,
    features: FeatureSet,
}

impl VirtualTrackedDevice {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            valid: true,
            features: FeatureSet::default(),
        }
    }

    /// Build a device around an existing feature set.
    pub fn from_feature_set(id: &str, name: &str, features: FeatureSet) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            valid: true,
            features,
        }
    }

    /// Mark the device connected/tracked (`true`) or gone (`false`).
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Set a boolean feature value.
    pub fn set_bool(&mut self, feature: &str, value: bool) {
        self.features.booleans.insert(feature.to_string(), value);
    }

    /// Set a scalar feature value.
    pub fn set_axis1d(&mut self, feature: &str, value: f32) {
        self.features.axes.insert(feature.to_string(), value);
    }

    /// Set a 2D axis feature value.
    pub fn set_axis2d(&mut self, feature: &str, value: Vec2) {
        self.features.axes_2d.insert(feature.to_string(), value);
    }

    /// Remove a feature from every map, as if this SKU never had it.
    pub fn clear_feature(&mut self, feature: &str) {
        self.features.booleans.remove(feature);
        self.features.axes.remove(feature);
        self.features.axes_2d.remove(feature);
    }
}

impl TrackedDevice for VirtualTrackedDevice {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn read_bool(&self, feature: &str) -> Option<bool> {
        self.features.booleans.get(feature).copied()
    }

    fn read_axis1d(&self, feature: &str) -> Option<f32> {
        self.features.axes.get(feature).copied()
    }

    fn read_axis2d(&self, feature: &str) -> Option<Vec2> {
        self.features.axes_2d.get(feature).copied()
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
