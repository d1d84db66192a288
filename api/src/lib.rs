//! This crate contains the shared types and fullstack server functions used by
//! the staking pages: translations, design tokens, site preferences and the
//! analytics sink.

pub mod analytics;
pub mod i18n;
pub mod prefs;
pub mod tokens;

use analytics::TrackedEvent;
use dioxus::prelude::*;
use prefs::site_prefs::SitePrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the site preferences.
///
/// For now this just returns the default settings, which read from env vars.
#[post("/api/get_site_prefs")]
pub async fn get_site_prefs() -> Result<SitePrefs, ApiError> {
    Ok(SitePrefs::default())
}

/// Records a single analytics event.
///
/// The client calls this fire-and-forget, usually through `navigator.sendBeacon`
/// so the request outlives a page navigation. The return value is never shown
/// to the user.
#[post("/api/track_event")]
pub async fn track_event(event: TrackedEvent) -> Result<(), ApiError> {
    dioxus_logger::tracing::info!(
        category = %event.category,
        action = %event.action,
        name = %event.name,
        "analytics event"
    );
    Ok(())
}
