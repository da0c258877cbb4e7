//! Authorized light control.

use std::collections::HashMap;

use log::debug;

use crate::bridge::Bridge;
use crate::config::BridgeConfig;
use crate::errors::Error;
use crate::light::{Light, LightEntry};
use crate::payload::StateChange;
use crate::types::{Brightness, PowerMode};

type Result<T> = std::result::Result<T, Error>;

/// An authorized handle to a bridge.
///
/// Created by [`Bridge::connect`] once the bridge accepted the username.
/// Every call goes to the bridge; nothing is cached.
#[derive(Debug, Clone)]
pub struct Session {
    bridge: Bridge,
    username: String,
    config: BridgeConfig,
}

impl Session {
    pub(crate) fn new(bridge: Bridge, username: String, config: BridgeConfig) -> Self {
        Session {
            bridge,
            username,
            config,
        }
    }

    pub fn address(&self) -> &str {
        self.bridge.address()
    }

    /// The credential this session was opened with.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Bridge configuration read while the session was opened.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// List every light known to the bridge, sorted by id.
    pub async fn lights(&self) -> Result<Vec<Light>> {
        let entries: HashMap<String, LightEntry> = self
            .bridge
            .get(&format!("/api/{}/lights", self.username))
            .await?;
        Ok(Light::from_entries(entries))
    }

    /// Look up one light by id.
    ///
    /// Fails with [`Error::InvalidLightId`] when the bridge does not list it.
    pub async fn light(&self, id: u32) -> Result<Light> {
        self.lights()
            .await?
            .into_iter()
            .find(|light| light.id() == id)
            .ok_or(Error::InvalidLightId(id))
    }

    /// Apply a state change to a light and return its updated snapshot.
    ///
    /// The id is checked against the light list before anything is sent.
    pub async fn set_light_state(&self, id: u32, change: &StateChange) -> Result<Light> {
        if !change.is_valid() {
            return Err(Error::NoAttribute);
        }

        let mut light = self.light(id).await?;
        let response = self
            .bridge
            .put_json(&format!("/api/{}/lights/{id}/state", self.username), change)
            .await?;
        debug!("light {id} state response: {response:?}");

        light.state_mut().apply(change);
        Ok(light)
    }

    pub async fn set_power(&self, id: u32, power: &PowerMode) -> Result<Light> {
        self.set_light_state(id, &StateChange::from(power)).await
    }

    /// Turn a light on at the given brightness.
    pub async fn set_light_on(&self, id: u32, brightness: &Brightness) -> Result<Light> {
        let mut change = StateChange::from(&PowerMode::On);
        change.brightness(brightness);
        self.set_light_state(id, &change).await
    }

    pub async fn set_light_off(&self, id: u32) -> Result<Light> {
        self.set_power(id, &PowerMode::Off).await
    }

    /// Flip a light's power state.
    pub async fn toggle(&self, id: u32) -> Result<Light> {
        let light = self.light(id).await?;
        let power = if light.state().on() {
            PowerMode::Off
        } else {
            PowerMode::On
        };
        self.set_power(id, &power).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, Session) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/lights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "1": {"name": "Desk", "type": "Extended color light",
                      "state": {"on": false, "bri": 100, "hue": 8418, "sat": 140, "reachable": true}},
                "3": {"name": "Porch", "type": "Dimmable light",
                      "state": {"on": true, "bri": 254, "reachable": true}}
            })))
            .mount(&server)
            .await;

        let config: BridgeConfig = serde_json::from_value(json!({"name": "Philips hue"})).unwrap();
        let session = Session::new(Bridge::new(&server.uri()), "user".into(), config);
        (server, session)
    }

    #[tokio::test]
    async fn test_lights() {
        let (_server, session) = setup().await;
        let lights = session.lights().await.unwrap();
        assert_eq!(lights.len(), 2);
        assert_eq!(lights[0].name(), "Desk");
        assert_eq!(lights[1].state().hue(), None);
    }

    #[tokio::test]
    async fn test_set_light_on() {
        let (server, session) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/user/lights/1/state"))
            .and(body_json(json!({"on": true, "bri": 254})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"success": {"/lights/1/state/on": true}},
                {"success": {"/lights/1/state/bri": 254}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let light = session.set_light_on(1, &Brightness::new()).await.unwrap();
        assert!(light.state().on());
        assert_eq!(light.state().brightness().unwrap().value(), 100);
    }

    #[tokio::test]
    async fn test_set_light_off() {
        let (server, session) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/user/lights/3/state"))
            .and(body_json(json!({"on": false})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"success": {"/lights/3/state/on": false}}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let light = session.set_light_off(3).await.unwrap();
        assert!(!light.state().on());
    }

    #[tokio::test]
    async fn test_invalid_light_id_sends_nothing() {
        let (server, session) = setup().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = session.set_light_on(7, &Brightness::new()).await.unwrap_err();
        assert_eq!(err, Error::InvalidLightId(7));
        let err = session.set_light_off(7).await.unwrap_err();
        assert_eq!(err, Error::InvalidLightId(7));
    }

    #[tokio::test]
    async fn test_empty_change_rejected() {
        let (_server, session) = setup().await;
        let err = session.set_light_state(1, &StateChange::new()).await.unwrap_err();
        assert_eq!(err, Error::NoAttribute);
    }

    #[tokio::test]
    async fn test_state_error_entry() {
        let (server, session) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/user/lights/3/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"error": {"type": 201, "address": "/lights/3/state/bri",
                           "description": "parameter, bri, is not modifiable. Device is set to off."}}
            ])))
            .mount(&server)
            .await;

        let err = session.set_light_on(3, &Brightness::new()).await.unwrap_err();
        assert!(matches!(err, Error::Bridge { kind: 201, .. }));
    }

    #[tokio::test]
    async fn test_toggle() {
        let (server, session) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/user/lights/1/state"))
            .and(body_json(json!({"on": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(session.toggle(1).await.unwrap().state().on());
    }
}
