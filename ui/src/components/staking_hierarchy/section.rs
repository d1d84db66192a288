//! The layout pieces of one staking section. Every piece takes its colors as
//! props; nothing is read from ambient CSS variables.

use api::i18n::Message;
use api::tokens::Color;
use dioxus::prelude::*;

use crate::analytics::Tracker;
use crate::app_state::AppState;
use crate::components::pico::ButtonLink;
use crate::components::rich_text::RichText;
use crate::components::staking_glyph::StakingGlyphIcon;
use crate::content::CallToAction;
use crate::content::Paragraph;
use crate::content::SectionDescriptor;
use crate::content::StakingGlyph;
use crate::theme::ConnectorTransform;
use crate::theme::SectionTheme;

/// The grid holding one section's regions: ether, decorator, header, glyph
/// and content.
#[component]
pub fn SectionGrid(index: u8, id: &'static str, children: Element) -> Element {
    rsx! {
        section {
            class: "staking-section-grid",
            "data-section": "{id}",
            "data-index": "{index}",
            {children}
        }
    }
}

#[component]
pub fn StyledEtherSvg(size: &'static str, color: Color) -> Element {
    rsx! {
        div {
            class: "staking-ether",
            style: "color: {color};",
            StakingGlyphIcon { glyph: StakingGlyph::EtherCircle, size }
        }
    }
}

/// The connector running down to the next section.
#[component]
pub fn Line(index: u8, current: Color, next: Color) -> Element {
    let transform = ConnectorTransform::for_index(index);
    rsx! {
        aside {
            class: "staking-line",
            div {
                class: "staking-line-rule",
                style: "transform: {transform}; border-image: linear-gradient(to bottom, {current}, {next}) 1 100%;",
            }
        }
    }
}

#[component]
pub fn Header(children: Element) -> Element {
    rsx! {
        div { class: "staking-header", {children} }
    }
}

#[component]
pub fn HeadingEl(color: Color, children: Element) -> Element {
    rsx! {
        h2 { class: "staking-heading", style: "color: {color};", {children} }
    }
}

#[component]
pub fn Pills(children: Element) -> Element {
    rsx! {
        div { class: "staking-pills", {children} }
    }
}

#[component]
pub fn Glyph(glyph: StakingGlyph, color: Color) -> Element {
    rsx! {
        div {
            class: "staking-glyph",
            style: "color: {color};",
            StakingGlyphIcon { glyph, size: "50px" }
        }
    }
}

#[component]
pub fn Content(children: Element) -> Element {
    rsx! {
        div { class: "staking-content", {children} }
    }
}

/// A call-to-action link that records its analytics event when clicked.
#[component]
pub fn SectionCta(cta: CallToAction, label: String) -> Element {
    let tracker = use_context::<Tracker>();
    rsx! {
        ButtonLink {
            href: cta.href,
            on_click: move |_| cta.activate(tracker.sink()),
            "{label}"
        }
    }
}

/// One complete section, built from its descriptor.
#[component]
pub fn StakingSection(section: SectionDescriptor) -> Element {
    let app_state = use_context::<AppState>();

    let theme = SectionTheme::for_index(section.index, &app_state.palette);
    let heading = app_state.t(section.heading);
    let pills: Vec<(bool, String)> = section
        .pills
        .iter()
        .map(|pill| (pill.emphasized, app_state.t(pill.key)))
        .collect();
    let paragraphs: Vec<Message> = section
        .body
        .iter()
        .map(|paragraph| match paragraph {
            Paragraph::Plain(key) => Message::Plain(app_state.t(key)),
            Paragraph::Rich(id) => app_state.t_rich(id),
        })
        .collect();
    let cta = section
        .cta
        .map(|cta| (cta, app_state.t(cta.label)));

    rsx! {
        SectionGrid {
            index: section.index,
            id: section.id,
            StyledEtherSvg { size: section.ether_size, color: theme.current }
            Line { index: section.index, current: theme.current, next: theme.next }
            Header {
                HeadingEl { color: theme.current, "{heading}" }
                Pills {
                    for (emphasized, label) in pills {
                        p {
                            class: "staking-pill",
                            style: "color: {theme.current}; background-color: {theme.fill};",
                            if emphasized {
                                em { "{label}" }
                            } else {
                                "{label}"
                            }
                        }
                    }
                }
            }
            Glyph { glyph: section.glyph, color: theme.current }
            Content {
                for message in paragraphs {
                    p { class: "staking-paragraph", RichText { message } }
                }
                if let Some((cta, label)) = cta {
                    div {
                        SectionCta { cta, label }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;

    use api::analytics::TrackedEvent;
    use dioxus::dioxus_core::ElementId;
    use dioxus::dioxus_core::Event;
    use dioxus::dioxus_core::NoOpMutations;
    use dioxus_html::PlatformEventData;
    use dioxus_html::SerializedHtmlEventConverter;
    use dioxus_html::SerializedMouseData;

    use super::*;
    use crate::analytics::testing::RecordingSink;
    use crate::content::SOLO;

    #[component]
    fn CtaHarness(recording: RecordingSink) -> Element {
        use_context_provider(|| Tracker::new(recording.clone()));
        let cta = SOLO.cta.expect("solo has a call to action");
        rsx! { SectionCta { cta, label: "More on solo staking" } }
    }

    fn click(dom: &VirtualDom, id: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        dom.runtime().handle_event("click", event, id);
    }

    #[test]
    fn clicking_the_link_records_one_event_per_click() {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let recording = RecordingSink::default();
        let mut dom = VirtualDom::new_with_props(
            CtaHarness,
            CtaHarnessProps {
                recording: recording.clone(),
            },
        );
        dom.rebuild(&mut NoOpMutations);
        assert!(recording.events().is_empty());

        // the link is the only element, so it is mounted first.
        click(&dom, ElementId(1));
        assert_eq!(
            recording.events(),
            vec![TrackedEvent::staking_click("clicked solo staking")]
        );

        click(&dom, ElementId(1));
        assert_eq!(recording.events().len(), 2);
    }
}
