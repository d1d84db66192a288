//! The fixed content of the staking hierarchy: one descriptor per section.

use api::analytics::TrackedEvent;

use crate::analytics::EventSink;
use crate::theme::ThemeTriple;
use crate::theme::theme_for;

/// The icon shown for a staking category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingGlyph {
    EtherCircle,
    Cpu,
    Cloud,
    TokenWallet,
    Centralized,
}

/// A short tag under a section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pill {
    pub key: &'static str,
    pub emphasized: bool,
}

impl Pill {
    const fn plain(key: &'static str) -> Self {
        Self {
            key,
            emphasized: false,
        }
    }

    const fn emphasized(key: &'static str) -> Self {
        Self {
            key,
            emphasized: true,
        }
    }
}

/// A body paragraph, by translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paragraph {
    /// Looked up with `t`.
    Plain(&'static str),
    /// A `namespace:key` id looked up with `t_rich`.
    Rich(&'static str),
}

/// A link to a category's detail page, paired with an analytics event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub event_name: &'static str,
}

impl CallToAction {
    pub fn tracked_event(&self) -> TrackedEvent {
        TrackedEvent::staking_click(self.event_name)
    }

    /// Records this link's click event. Navigation is left to the browser.
    pub fn activate(&self, sink: &dyn EventSink) {
        sink.record(self.tracked_event());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// 1-based position, selects the theme.
    pub index: u8,
    pub id: &'static str,
    pub heading: &'static str,
    pub pills: &'static [Pill],
    pub glyph: StakingGlyph,
    /// Size of the ether circle icon, shrinking down the hierarchy.
    pub ether_size: &'static str,
    pub body: &'static [Paragraph],
    pub cta: Option<CallToAction>,
}

impl SectionDescriptor {
    pub fn theme(&self) -> ThemeTriple {
        theme_for(self.index)
    }
}

pub const SOLO: SectionDescriptor = SectionDescriptor {
    index: 1,
    id: "solo",
    heading: "page-staking-hierarchy-solo-h2",
    pills: &[
        Pill::emphasized("page-staking-hierarchy-solo-pill-1"),
        Pill::plain("page-staking-hierarchy-solo-pill-2"),
        Pill::plain("page-staking-hierarchy-solo-pill-3"),
        Pill::plain("page-staking-hierarchy-solo-pill-4"),
    ],
    glyph: StakingGlyph::Cpu,
    ether_size: "100%",
    body: &[
        Paragraph::Rich("page-staking:page-staking-hierarchy-solo-p1"),
        Paragraph::Plain("page-staking-hierarchy-solo-p2"),
        Paragraph::Plain("page-staking-hierarchy-solo-p3"),
    ],
    cta: Some(CallToAction {
        label: "page-staking-more-on-solo",
        href: "/staking/solo/",
        event_name: "clicked solo staking",
    }),
};

pub const SAAS: SectionDescriptor = SectionDescriptor {
    index: 2,
    id: "saas",
    heading: "page-staking-dropdown-saas",
    pills: &[
        Pill::plain("page-staking-hierarchy-saas-pill-1"),
        Pill::plain("page-staking-hierarchy-saas-pill-2"),
        Pill::plain("page-staking-hierarchy-saas-pill-3"),
    ],
    glyph: StakingGlyph::Cloud,
    ether_size: "90%",
    body: &[
        Paragraph::Plain("page-staking-hierarchy-saas-p1"),
        Paragraph::Plain("page-staking-hierarchy-saas-p2"),
        Paragraph::Plain("page-staking-hierarchy-saas-p3"),
    ],
    cta: Some(CallToAction {
        label: "page-staking-more-on-saas",
        href: "/staking/saas/",
        event_name: "clicked staking as a service",
    }),
};

pub const POOLS: SectionDescriptor = SectionDescriptor {
    index: 3,
    id: "pools",
    heading: "page-staking-dropdown-pools",
    pills: &[
        Pill::plain("page-staking-hierarchy-pools-pill-1"),
        Pill::plain("page-staking-hierarchy-pools-pill-2"),
        Pill::plain("page-staking-hierarchy-pools-pill-3"),
        Pill::emphasized("page-staking-hierarchy-pools-pill-4"),
    ],
    glyph: StakingGlyph::TokenWallet,
    ether_size: "80%",
    body: &[
        Paragraph::Rich("page-staking:page-staking-hierarchy-pools-p1"),
        Paragraph::Rich("page-staking:page-staking-hierarchy-pools-p2"),
        Paragraph::Rich("page-staking:page-staking-hierarchy-pools-p3"),
        Paragraph::Rich("page-staking:page-staking-hierarchy-pools-p4"),
    ],
    cta: Some(CallToAction {
        label: "page-staking-more-on-pools",
        href: "/staking/pools/",
        event_name: "clicked pooled staking",
    }),
};

// no call-to-action: centralized exchanges are not promoted.
pub const CEX: SectionDescriptor = SectionDescriptor {
    index: 4,
    id: "cex",
    heading: "page-staking-hierarchy-cex-h2",
    pills: &[
        Pill::emphasized("page-staking-hierarchy-cex-pill-1"),
        Pill::plain("page-staking-hierarchy-cex-pill-2"),
    ],
    glyph: StakingGlyph::Centralized,
    ether_size: "70%",
    body: &[
        Paragraph::Plain("page-staking-hierarchy-cex-p1"),
        Paragraph::Plain("page-staking-hierarchy-cex-p2"),
        Paragraph::Rich("page-staking:page-staking-hierarchy-cex-p3"),
    ],
    cta: None,
};

/// All sections, top to bottom.
pub const SECTIONS: [SectionDescriptor; 4] = [SOLO, SAAS, POOLS, CEX];
