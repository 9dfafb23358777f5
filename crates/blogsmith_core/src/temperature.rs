//! Sampling temperature bounded to the slider's range.

use serde::{Deserialize, Deserializer, Serialize};

/// Sampling temperature in `[Temperature::MIN, Temperature::MAX]`.
///
/// Every constructor clamps, so a value outside the range cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Temperature(f32);

impl Temperature {
    /// Lowest selectable temperature.
    pub const MIN: f32 = 0.1;
    /// Highest selectable temperature.
    pub const MAX: f32 = 2.0;

    /// Clamp `value` into range. NaN maps to the minimum.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Raw sampling value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::new(crate::DEFAULT_TEMPERATURE)
    }
}

impl From<f32> for Temperature {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Self::new(value as f32)
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Temperature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f32::deserialize(deserializer).map(Self::new)
    }
}
