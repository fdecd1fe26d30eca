//! Generation parameters and the loose patch shape they are configured from.
//!
//! Configuration never fails: values that are missing or cannot be read as
//! numbers keep the previous setting, out-of-range numbers are clamped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MIN: usize = 20;
pub const DEFAULT_SPEED: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Open-cell count below which every propagation must open a neighbour.
    pub min: usize,
    /// Open-cell cap. `None` means unlimited.
    pub max: Option<usize>,
    /// Probability that a non-mandatory candidate opens.
    pub density: f64,
    /// Probability of continuing in the parent's direction.
    pub linearity: f64,
    /// Propagations per `step` call.
    pub speed: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { min: DEFAULT_MIN, max: None, density: 0.0, linearity: 0.0, speed: DEFAULT_SPEED }
    }
}

impl GenerationConfig {
    /// Merge `patch` over the current settings.
    ///
    /// `max` is re-derived on every merge: it is unset unless the patch
    /// carries a readable value, and it never drops below `min`.
    pub fn apply(&mut self, patch: &ConfigPatch) {
        if let Some(density) = patch.density.as_ref().and_then(LooseValue::as_number) {
            self.density = density.clamp(0.0, 1.0);
        }
        if let Some(linearity) = patch.linearity.as_ref().and_then(LooseValue::as_number) {
            self.linearity = linearity.clamp(0.0, 1.0);
        }
        if let Some(speed) = patch.speed.as_ref().and_then(LooseValue::as_number) {
            self.speed = (speed.trunc() as u32).max(1);
        }
        if let Some(min) = patch.min.as_ref().and_then(LooseValue::as_number) {
            self.min = min.trunc().max(0.0) as usize;
        }
        self.max = patch
            .max
            .as_ref()
            .and_then(LooseValue::as_number)
            .map(|max| (max.trunc().max(0.0) as usize).max(self.min));
    }

    /// Whether the cap has been reached for the given open-cell count.
    pub fn is_capped(&self, open_count: usize) -> bool {
        self.max.is_some_and(|max| open_count >= max)
    }
}

/// A configuration value as it arrives from a form, a file or a flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(f64),
    Text(String),
    Invalid(Value),
}

impl LooseValue {
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            Self::Number(number) => *number,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Invalid(_) => return None,
        };
        number.is_finite().then_some(number)
    }
}

impl From<f64> for LooseValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for LooseValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<usize> for LooseValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Partial configuration. Only keys that are present are merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<LooseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<LooseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<LooseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linearity: Option<LooseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<LooseValue>,
}

impl ConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, value: impl Into<LooseValue>) -> Self {
        self.min = Some(value.into());
        self
    }

    pub fn max(mut self, value: impl Into<LooseValue>) -> Self {
        self.max = Some(value.into());
        self
    }

    pub fn density(mut self, value: impl Into<LooseValue>) -> Self {
        self.density = Some(value.into());
        self
    }

    pub fn linearity(mut self, value: impl Into<LooseValue>) -> Self {
        self.linearity = Some(value.into());
        self
    }

    pub fn speed(mut self, value: impl Into<LooseValue>) -> Self {
        self.speed = Some(value.into());
        self
    }

    /// Overlay `other` on top of `self`; keys present in `other` win.
    pub fn merged_with(mut self, other: &ConfigPatch) -> Self {
        for (target, source) in [
            (&mut self.min, &other.min),
            (&mut self.max, &other.max),
            (&mut self.density, &other.density),
            (&mut self.linearity, &other.linearity),
            (&mut self.speed, &other.speed),
        ] {
            if source.is_some() {
                target.clone_from(source);
            }
        }
        self
    }
}
