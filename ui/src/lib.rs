// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod analytics;
mod app_state;
mod components;
pub mod content;
pub mod theme;
mod screens;

use analytics::Tracker;
use api::prefs::site_prefs::SitePrefs;
use app_state::AppState;
use screens::staking::StakingScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        width: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        padding: 10px; /* Margin from window edge */
        display: flex;
        flex-direction: column;
    }

    .app-main-container > main.container {
        width: 100%;
        max-width: 1024px;
        margin: 0 auto;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move { api::get_site_prefs().await })?;

    // Read from the future to ensure it's polled during SSR.
    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            dioxus_logger::tracing::info!("prefs: {:?}", prefs);
            rsx! {
                LoadedApp {
                    prefs: *prefs,
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the page and only runs when prefs are ready.
#[component]
fn LoadedApp(prefs: SitePrefs) -> Element {
    // Provide the stable, non-reactive AppState and the analytics sink.
    use_context_provider(|| AppState::new(prefs));
    use_context_provider(|| Tracker::for_analytics(prefs.analytics_enabled()));

    let lang = prefs.locale().code();
    rsx! {
        div {
            class: "app-main-container",
            lang: "{lang}",
            StakingScreen {}
        }
    }
}
