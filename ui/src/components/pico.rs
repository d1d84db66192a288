//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonLinkProps {
    #[props(into)]
    href: String,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    children: Element,
}

/// A link styled as a Pico button.
///
/// `on_click` runs before the browser follows `href`; the default action is
/// never prevented.
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    rsx! {
        a {
            class: "button-link",
            role: "button",
            href: "{props.href}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
