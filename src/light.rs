//! Lights known to a bridge.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::status::LightState;

/// A light as listed by the bridge.
///
/// Lights are identified by the small integer id the bridge assigns when
/// the light is paired. A `Light` is a snapshot: it is not refreshed after
/// it was listed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Light {
    id: u32,
    name: String,
    light_type: Option<String>,
    model_id: Option<String>,
    state: LightState,
}

/// A light entry of `GET /api/<username>/lights`, keyed by id.
#[derive(Debug, Deserialize)]
pub(crate) struct LightEntry {
    name: String,
    #[serde(rename = "type", default)]
    light_type: Option<String>,
    #[serde(rename = "modelid", default)]
    model_id: Option<String>,
    #[serde(default)]
    state: LightState,
}

impl Light {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bridge light type, e.g. `Extended color light`.
    pub fn light_type(&self) -> Option<&str> {
        self.light_type.as_deref()
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut LightState {
        &mut self.state
    }

    /// Builds the light list from the bridge's id-keyed map, sorted by id.
    pub(crate) fn from_entries(entries: HashMap<String, LightEntry>) -> Vec<Light> {
        let mut lights: Vec<Light> = entries
            .into_iter()
            .filter_map(|(key, entry)| match key.parse() {
                Ok(id) => Some(Light {
                    id,
                    name: entry.name,
                    light_type: entry.light_type,
                    model_id: entry.model_id,
                    state: entry.state,
                }),
                Err(_) => {
                    debug!("skipping light with non-numeric id {key:?}");
                    None
                }
            })
            .collect();
        lights.sort_by_key(Light::id);
        lights
    }
}
