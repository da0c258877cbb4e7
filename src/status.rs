//! Light state as reported by the bridge.

use serde::{Deserialize, Serialize};

use crate::payload::StateChange;
use crate::types::{Brightness, HueSaturation, PowerMode};

/// The state of a light at the time it was listed.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LightState {
    #[serde(default)]
    on: bool,
    bri: Option<u8>,
    hue: Option<u16>,
    sat: Option<u8>,
    #[serde(default = "reachable_default")]
    reachable: bool,
    #[serde(rename = "colormode")]
    color_mode: Option<String>,
}

fn reachable_default() -> bool {
    true
}

impl LightState {
    /// Check if the light is on.
    pub fn on(&self) -> bool {
        self.on
    }

    pub fn power(&self) -> PowerMode {
        PowerMode::from(self.on)
    }

    /// Brightness, for dimmable lights.
    pub fn brightness(&self) -> Option<Brightness> {
        self.bri.map(Brightness::from_bri)
    }

    /// Raw hue value, for color lights.
    pub fn hue(&self) -> Option<u16> {
        self.hue
    }

    /// Hue and saturation, for color lights.
    pub fn hue_saturation(&self) -> Option<HueSaturation> {
        match (self.hue, self.sat) {
            (Some(hue), Some(sat)) => HueSaturation::create(hue, sat),
            _ => None,
        }
    }

    /// Whether the bridge can currently reach the light.
    pub fn reachable(&self) -> bool {
        self.reachable
    }

    pub fn color_mode(&self) -> Option<&str> {
        self.color_mode.as_deref()
    }

    /// Apply a state change that the bridge accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::{Brightness, LightState, PowerMode, StateChange};
    ///
    /// let mut state = LightState::default();
    /// assert!(!state.on());
    ///
    /// let mut change = StateChange::from(&PowerMode::On);
    /// change.brightness(&Brightness::create(50).unwrap());
    /// state.apply(&change);
    /// assert!(state.on());
    /// assert_eq!(state.brightness().unwrap().value(), 50);
    /// ```
    pub fn apply(&mut self, change: &StateChange) {
        if let Some(on) = change.on {
            self.on = on;
        }
        if let Some(bri) = change.bri {
            self.bri = Some(bri);
        }
        if let Some(hue) = change.hue {
            self.hue = Some(hue);
        }
        if let Some(sat) = change.sat {
            self.sat = Some(sat);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_white_light_has_no_hue() {
        let state: LightState = serde_json::from_value(json!({
            "on": false, "bri": 254, "alert": "select", "mode": "homeautomation", "reachable": true
        }))
        .unwrap();
        assert!(!state.on());
        assert!(state.hue().is_none());
        assert!(state.hue_saturation().is_none());
        assert_eq!(state.brightness().unwrap().value(), 100);
    }

    #[test]
    fn test_color_light() {
        let state: LightState = serde_json::from_value(json!({
            "on": true, "bri": 127, "hue": 8418, "sat": 140, "colormode": "hs", "reachable": false
        }))
        .unwrap();
        assert_eq!(state.hue(), Some(8418));
        assert_eq!(state.hue_saturation().unwrap().saturation(), 140);
        assert_eq!(state.color_mode(), Some("hs"));
        assert!(!state.reachable());
    }
}
