//! The staking hierarchy: four stacked cards, from solo staking down to
//! centralized exchanges, each with its own color.

pub mod section;

use api::tokens::ColorToken;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::content::SECTIONS;
use section::StakingSection;

const STAKING_CSS: &str = r#"
    .staking-hierarchy {
        display: flex;
        flex-direction: column;
        gap: 4rem;
        padding: 2rem;
        background: linear-gradient(rgba(237, 194, 84, 0.1) 13.39%, rgba(75, 231, 156, 0.1) 44.21%, rgba(231, 202, 200, 0.1) 82.88%);
        border-style: solid;
        border-width: 0 0 0 4px;
    }

    .staking-section-grid {
        display: grid;
        position: relative;
        gap: 1rem;
        grid-template-columns: 1fr;
        grid-template-areas:
            "ether"
            "header"
            "content";
    }

    .staking-ether {
        grid-area: ether;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        max-width: 5rem;
        margin: 0 auto;
        z-index: 2;
    }

    .staking-line { display: none; position: relative; }
    .staking-line-rule {
        position: absolute;
        top: 50px;
        inset-inline-start: calc(50% - 2px);
        height: calc(100% - 50px);
        border-inline-start: 4px solid;
        z-index: 1;
    }

    .staking-header {
        grid-area: header;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        gap: 0.5rem;
    }
    .staking-heading { margin: 0; font-size: 2rem; font-weight: 600; line-height: 1.4; text-align: center; }
    .staking-pills { display: flex; flex-wrap: wrap; gap: 0.25rem; justify-content: center; }
    .staking-pill { margin: 0; padding: 0.125rem 0.375rem; border-radius: 0.25rem; white-space: nowrap; }

    .staking-glyph { grid-area: glyph; display: flex; align-items: center; justify-content: center; }
    .staking-glyph svg { width: 50%; height: auto; opacity: 0.1; }

    .staking-content { grid-area: content; display: flex; flex-direction: column; gap: 1rem; }
    .staking-content p { margin: 0; }
    .staking-content .button-link { width: 100%; }

    /* --- md and up: icon column on the left, glyph on the right --- */
    @media (min-width: 48em) {
        .staking-hierarchy { gap: 0; border-radius: 0.5rem; border-width: 0; }
        .staking-section-grid {
            gap: 0 2rem;
            grid-template-columns: 5rem 1fr 5rem;
            grid-template-areas:
                "ether header glyph"
                "decorator content content";
        }
        .staking-line { display: block; grid-area: decorator; }
        .staking-header { align-items: flex-start; }
        .staking-heading { text-align: initial; }
        .staking-pills { justify-content: flex-start; }
        .staking-glyph svg { width: 50px; opacity: 1; }
        .staking-content { margin-top: 1rem; margin-bottom: 3rem; }
        .staking-content .button-link { width: auto; }
    }
"#;

#[component]
pub fn StakingHierarchy() -> Element {
    let app_state = use_context::<AppState>();
    let [gold, green, blue, red] = app_state.palette.resolve_all([
        ColorToken::StakingGold,
        ColorToken::StakingGreen,
        ColorToken::StakingBlue,
        ColorToken::StakingRed,
    ]);

    rsx! {
        style { "{STAKING_CSS}" }
        div {
            class: "staking-hierarchy",
            style: "border-image: linear-gradient(to bottom, {gold} 5%, {green} 30%, {blue} 55%, {red} 80%) 1 100%;",
            for section in SECTIONS {
                StakingSection { key: "{section.id}", section: section }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Tracker;
    use api::i18n::Locale;
    use api::prefs::site_prefs::SitePrefs;
    use api::tokens::ColorMode;

    #[component]
    fn Harness(locale: Locale) -> Element {
        use_context_provider(|| AppState::new(SitePrefs::new(locale, false, ColorMode::Light)));
        use_context_provider(|| Tracker::for_analytics(false));
        rsx! { StakingHierarchy {} }
    }

    fn render(locale: Locale) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { locale });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The html of each section, in document order.
    fn sections(html: &str) -> Vec<&str> {
        let parts: Vec<&str> = html.split("data-section=").skip(1).collect();
        assert_eq!(parts.len(), 4, "expected four sections");
        parts
    }

    #[test]
    fn renders_four_sections_in_order() {
        let html = render(Locale::En);
        let ids: Vec<_> = sections(&html)
            .iter()
            .map(|part| part.split('"').nth(1).unwrap_or_default())
            .collect();
        assert_eq!(ids, ["solo", "saas", "pools", "cex"]);
    }

    #[test]
    fn pill_and_paragraph_counts_match_content() {
        let html = render(Locale::En);
        let counts: Vec<_> = sections(&html)
            .iter()
            .map(|part| {
                (
                    part.matches("class=\"staking-pill\"").count(),
                    part.matches("class=\"staking-paragraph\"").count(),
                )
            })
            .collect();
        assert_eq!(counts, [(4, 3), (3, 3), (4, 4), (2, 3)]);
    }

    #[test]
    fn only_first_three_sections_have_a_call_to_action() {
        let html = render(Locale::En);
        let parts = sections(&html);
        let expected = ["/staking/solo/", "/staking/saas/", "/staking/pools/"];
        for (part, href) in parts.iter().zip(expected) {
            assert_eq!(part.matches("class=\"button-link\"").count(), 1);
            assert!(part.contains(&format!("href=\"{href}\"")));
        }
        assert_eq!(parts[3].matches("button-link").count(), 0);
        assert_eq!(html.matches("class=\"button-link\"").count(), 3);
    }

    #[test]
    fn rich_paragraphs_keep_their_markup() {
        let html = render(Locale::En);
        assert!(html.contains("<strong>gold standard</strong>"));
        assert!(html.contains("<em>liquid staking</em>"));
        assert!(html.contains("href=\"/wallets/\""));
    }

    #[test]
    fn emphasized_pills_use_em() {
        let html = render(Locale::En);
        assert!(html.contains("<em>Most impactful</em>"));
        assert!(html.contains("<em>Popular</em>"));
        assert!(html.contains("<em>Least impactful</em>"));
        assert!(!html.contains("<em>Full control</em>"));
    }

    #[test]
    fn connector_offsets_follow_section_index() {
        let html = render(Locale::En);
        for (i, part) in sections(&html).iter().enumerate() {
            assert!(part.contains(&format!("translateY({}px)", i + 1)));
        }
        // the last connector fades into transparency.
        assert!(sections(&html)[3].contains("#00000000"));
    }

    #[test]
    fn renders_the_active_locale() {
        let html = render(Locale::Es);
        assert!(html.contains("Staking como servicio"));
        // missing from the spanish catalog, so it comes from english.
        assert!(html.contains("<strong>true ownership</strong>"));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render(Locale::En), render(Locale::En));
    }
}
