//! Analytics events emitted by the staking pages.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Event category shared by every call-to-action in the staking hierarchy.
pub const STAKING_HIERARCHY_CATEGORY: &str = "StakingHierarchy";

/// Event action recorded when a call-to-action link is activated.
pub const CLICKED_ACTION: &str = "Clicked";

/// Route of the `track_event` server function. Beacons post here too.
pub const TRACK_EVENT_PATH: &str = "/api/track_event";

/// A single custom analytics event (category, action, name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackedEvent {
    pub category: String,
    pub action: String,
    pub name: String,
}

impl TrackedEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            name: name.into(),
        }
    }

    /// A "Clicked" event in the staking hierarchy category.
    pub fn staking_click(name: impl Into<String>) -> Self {
        Self::new(STAKING_HIERARCHY_CATEGORY, CLICKED_ACTION, name)
    }

    /// The JSON request body `track_event` expects, for senders that post
    /// without going through the server function client.
    pub fn request_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&TrackEventBody { event: self })
    }
}

/// Server function arguments travel as a JSON object keyed by parameter name.
#[derive(Serialize)]
struct TrackEventBody<'a> {
    event: &'a TrackedEvent,
}

impl fmt::Display for TrackedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.category, self.action, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staking_click_uses_fixed_category_and_action() {
        let event = TrackedEvent::staking_click("clicked solo staking");
        assert_eq!(event.category, "StakingHierarchy");
        assert_eq!(event.action, "Clicked");
        assert_eq!(event.name, "clicked solo staking");
        assert_eq!(
            event.to_string(),
            "StakingHierarchy/Clicked/clicked solo staking"
        );
    }

    #[test]
    fn survives_the_server_function_payload() {
        let event = TrackedEvent::staking_click("clicked pooled staking");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"category\":\"StakingHierarchy\""));
        let back: TrackedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn request_body_wraps_the_event_argument() {
        let event = TrackedEvent::staking_click("clicked solo staking");
        let body: serde_json::Value = serde_json::from_str(&event.request_body().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "event": {
                    "category": "StakingHierarchy",
                    "action": "Clicked",
                    "name": "clicked solo staking",
                }
            })
        );
    }
}
