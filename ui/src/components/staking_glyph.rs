//=============================================================================
// File: src/components/staking_glyph.rs
//=============================================================================
//! Inline SVG icons for the staking categories. All shapes are drawn with
//! `currentColor`, so the icon takes the color of its container.

use dioxus::prelude::*;

use crate::content::StakingGlyph;

#[component]
pub fn StakingGlyphIcon(glyph: StakingGlyph, #[props(into)] size: String) -> Element {
    let shapes = match glyph {
        StakingGlyph::EtherCircle => rsx! {
            circle { "cx": "24", "cy": "24", "r": "22", "fill": "none", "stroke": "currentColor", "stroke-width": "2" }
            polygon { "points": "24,7 14,24 24,30 34,24", "fill": "currentColor" }
            polygon { "points": "24,32 14,26 24,41 34,26", "fill": "currentColor", "opacity": "0.6" }
        },
        StakingGlyph::Cpu => rsx! {
            rect { "x": "13", "y": "13", "width": "22", "height": "22", "rx": "3", "fill": "none", "stroke": "currentColor", "stroke-width": "2" }
            rect { "x": "19", "y": "19", "width": "10", "height": "10", "fill": "currentColor" }
            path {
                "d": "M18 5v8M24 5v8M30 5v8M18 35v8M24 35v8M30 35v8M5 18h8M5 24h8M5 30h8M35 18h8M35 24h8M35 30h8",
                "stroke": "currentColor",
                "stroke-width": "2",
            }
        },
        StakingGlyph::Cloud => rsx! {
            path {
                "d": "M14 36h22a8 8 0 0 0 0-16 11 11 0 0 0-21-2 9 9 0 0 0-1 18z",
                "fill": "none",
                "stroke": "currentColor",
                "stroke-width": "2",
            }
            polygon { "points": "25,20 20,28 25,31 30,28", "fill": "currentColor" }
        },
        StakingGlyph::TokenWallet => rsx! {
            rect { "x": "6", "y": "12", "width": "36", "height": "26", "rx": "4", "fill": "none", "stroke": "currentColor", "stroke-width": "2" }
            path { "d": "M30 21h12v10H30a5 5 0 0 1 0-10z", "fill": "none", "stroke": "currentColor", "stroke-width": "2" }
            circle { "cx": "31", "cy": "26", "r": "2", "fill": "currentColor" }
            circle { "cx": "16", "cy": "25", "r": "5", "fill": "currentColor", "opacity": "0.6" }
        },
        StakingGlyph::Centralized => rsx! {
            path { "d": "M6 18L24 8l18 10z", "fill": "currentColor" }
            path {
                "d": "M10 21v14M18 21v14M30 21v14M38 21v14M6 40h36",
                "stroke": "currentColor",
                "stroke-width": "3",
            }
        },
    };

    rsx! {
        svg {
            "xmlns": "http://www.w3.org/2000/svg",
            "viewBox": "0 0 48 48",
            "width": "{size}",
            "height": "{size}",
            "aria-hidden": "true",
            {shapes}
        }
    }
}
