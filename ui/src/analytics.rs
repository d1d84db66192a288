//! Client-side analytics: where click events go.

use std::rc::Rc;

use api::analytics::TrackedEvent;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::trace;

/// Receives analytics events. Recording never blocks and never fails
/// visibly.
pub trait EventSink {
    fn record(&self, event: TrackedEvent);
}

/// Sends each event to the `track_event` endpoint, fire-and-forget.
///
/// Clicks on call-to-action links navigate away immediately, so on the web the
/// event goes out as a beacon, which the browser delivers after unload. If the
/// beacon is refused, or off the web, the server function is called instead.
pub struct ServerSink;

impl EventSink for ServerSink {
    fn record(&self, event: TrackedEvent) {
        debug!("tracking {}", event);
        if let Err(reason) = beacon::send(&event) {
            trace!("no beacon for {}: {}", event, reason);
            spawn(async move {
                if let Err(e) = api::track_event(event).await {
                    debug!("analytics event dropped: {}", e);
                }
            });
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod beacon {
    use api::analytics::TrackedEvent;
    use api::analytics::TRACK_EVENT_PATH;
    use wasm_bindgen::JsValue;
    use web_sys::Blob;
    use web_sys::BlobPropertyBag;

    /// Queues `event` with `navigator.sendBeacon`.
    pub fn send(event: &TrackedEvent) -> Result<(), String> {
        let body = event.request_body().map_err(|e| e.to_string())?;
        let window = web_sys::window().ok_or("no global `window`")?;

        let options = BlobPropertyBag::new();
        options.set_type("application/json");
        let parts = js_sys::Array::of1(&JsValue::from_str(&body));
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| format!("{e:?}"))?;

        match window
            .navigator()
            .send_beacon_with_opt_blob(TRACK_EVENT_PATH, Some(&blob))
        {
            Ok(true) => Ok(()),
            Ok(false) => Err("beacon queue full".to_string()),
            Err(e) => Err(format!("{e:?}")),
        }
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
mod beacon {
    use api::analytics::TrackedEvent;

    pub fn send(_event: &TrackedEvent) -> Result<(), String> {
        Err("beacons are only available in the browser".to_string())
    }
}

/// Drops events. Used when analytics are switched off.
pub struct DisabledSink;

impl EventSink for DisabledSink {
    fn record(&self, event: TrackedEvent) {
        trace!("analytics disabled, ignoring {}", event);
    }
}

/// The event sink provided as a Dioxus context.
#[derive(Clone)]
pub struct Tracker(Rc<dyn EventSink>);

impl Tracker {
    pub fn new(sink: impl EventSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn for_analytics(enabled: bool) -> Self {
        if enabled {
            Self::new(ServerSink)
        } else {
            Self::new(DisabledSink)
        }
    }

    pub fn sink(&self) -> &dyn EventSink {
        self.0.as_ref()
    }
}
