//! State change payload for Hue lights.

use serde::{Deserialize, Serialize};

use crate::types::{Brightness, HueSaturation, PowerMode};

/// A state change to send to a Hue light.
///
/// Serializes to the body of `PUT /api/<username>/lights/<id>/state`; unset
/// attributes are left out so the bridge keeps their current value.
///
/// ```
/// use hue_lights_rs::{Brightness, PowerMode, StateChange};
///
/// let mut change = StateChange::new();
/// assert!(!change.is_valid());
///
/// change.power(&PowerMode::On);
/// change.brightness(&Brightness::new());
/// assert!(change.is_valid());
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub(crate) on: Option<bool>,
    pub(crate) bri: Option<u8>,
    pub(crate) hue: Option<u16>,
    pub(crate) sat: Option<u8>,
}

impl StateChange {
    /// Create a new empty state change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this change contains at least one attribute.
    pub fn is_valid(&self) -> bool {
        self.on.is_some() || self.bri.is_some() || self.hue.is_some() || self.sat.is_some()
    }

    pub fn power(&mut self, power: &PowerMode) -> &mut Self {
        self.on = Some(power.is_on());
        self
    }

    pub fn brightness(&mut self, brightness: &Brightness) -> &mut Self {
        self.bri = Some(brightness.bri());
        self
    }

    pub fn hue_saturation(&mut self, hs: &HueSaturation) -> &mut Self {
        self.hue = Some(hs.hue());
        self.sat = Some(hs.saturation());
        self
    }
}

impl From<&PowerMode> for StateChange {
    fn from(power: &PowerMode) -> Self {
        let mut change = StateChange::new();
        change.power(power);
        change
    }
}
