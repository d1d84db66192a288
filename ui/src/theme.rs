//! Per-section color themes for the staking hierarchy.
//!
//! Each section is bound to one (current, next, fill) triple. The resolved
//! colors are passed down to the section's children as plain values.

use std::fmt;

use api::tokens::Color;
use api::tokens::ColorToken;
use api::tokens::Palette;

/// A theme slot: either a design token or a fixed CSS color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Token(ColorToken),
    Literal(Color),
}

impl ThemeColor {
    pub fn resolve(&self, palette: &Palette) -> Color {
        match self {
            Self::Token(token) => palette.resolve(*token),
            Self::Literal(color) => *color,
        }
    }
}

/// The (current, next, fill) colors of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTriple {
    pub current: ThemeColor,
    pub next: ThemeColor,
    pub fill: ThemeColor,
}

impl ThemeTriple {
    /// Only returned for an index outside 1..=4, which the page never builds.
    pub const UNREACHABLE: ThemeTriple = ThemeTriple {
        current: ThemeColor::Literal(Color::BLACK),
        next: ThemeColor::Literal(Color::BLACK),
        fill: ThemeColor::Literal(Color::BLACK),
    };

    pub fn resolve(&self, palette: &Palette) -> SectionTheme {
        SectionTheme {
            current: self.current.resolve(palette),
            next: self.next.resolve(palette),
            fill: self.fill.resolve(palette),
        }
    }
}

/// Theme triples for sections 1 to 4. The last section has no next color,
/// so its connector fades out.
pub const SECTION_THEMES: [ThemeTriple; 4] = [
    ThemeTriple {
        current: ThemeColor::Token(ColorToken::StakingGold),
        next: ThemeColor::Token(ColorToken::StakingGreen),
        fill: ThemeColor::Token(ColorToken::StakingGoldFill),
    },
    ThemeTriple {
        current: ThemeColor::Token(ColorToken::StakingGreen),
        next: ThemeColor::Token(ColorToken::StakingBlue),
        fill: ThemeColor::Token(ColorToken::StakingGreenFill),
    },
    ThemeTriple {
        current: ThemeColor::Token(ColorToken::StakingBlue),
        next: ThemeColor::Token(ColorToken::StakingRed),
        fill: ThemeColor::Token(ColorToken::StakingBlueFill),
    },
    ThemeTriple {
        current: ThemeColor::Token(ColorToken::StakingRed),
        next: ThemeColor::Literal(Color::TRANSPARENT),
        fill: ThemeColor::Token(ColorToken::StakingRedFill),
    },
];

/// Looks up the theme triple for a 1-based section index.
pub fn theme_for(index: u8) -> ThemeTriple {
    usize::from(index)
        .checked_sub(1)
        .and_then(|i| SECTION_THEMES.get(i))
        .copied()
        .unwrap_or(ThemeTriple::UNREACHABLE)
}

/// Concrete colors for one section, ready to be used in styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTheme {
    pub current: Color,
    pub next: Color,
    pub fill: Color,
}

impl SectionTheme {
    pub fn for_index(index: u8, palette: &Palette) -> Self {
        theme_for(index).resolve(palette)
    }
}

/// The scale/offset applied to a section's connector line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorTransform {
    pub scale: f64,
    pub translate_y_px: u8,
}

impl ConnectorTransform {
    pub fn for_index(index: u8) -> Self {
        Self {
            scale: 1.05 + f64::from(index) / 70.0,
            translate_y_px: index,
        }
    }
}

impl fmt::Display for ConnectorTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale({}) translateY({}px)",
            self.scale, self.translate_y_px
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::tokens::ColorMode;

    #[test]
    fn each_section_has_its_own_current_color() {
        let currents: Vec<_> = (1..=4).map(|i| theme_for(i).current).collect();
        assert_eq!(
            currents,
            vec![
                ThemeColor::Token(ColorToken::StakingGold),
                ThemeColor::Token(ColorToken::StakingGreen),
                ThemeColor::Token(ColorToken::StakingBlue),
                ThemeColor::Token(ColorToken::StakingRed),
            ]
        );
    }

    #[test]
    fn next_color_chains_to_the_following_section() {
        for i in 1..=3 {
            assert_eq!(theme_for(i).next, theme_for(i + 1).current);
        }
    }

    #[test]
    fn last_section_next_is_transparent() {
        let palette = Palette::for_mode(ColorMode::Dark);
        assert_eq!(SectionTheme::for_index(4, &palette).next, Color::TRANSPARENT);
    }

    #[test]
    fn out_of_range_index_is_black() {
        for i in [0, 5, u8::MAX] {
            assert_eq!(theme_for(i), ThemeTriple::UNREACHABLE);
        }
        let theme = SectionTheme::for_index(0, &Palette::default());
        assert_eq!(theme.current, Color::BLACK);
        assert_eq!(theme.next, Color::BLACK);
        assert_eq!(theme.fill, Color::BLACK);
    }

    #[test]
    fn fill_follows_the_palette() {
        let palette = Palette::default();
        let theme = SectionTheme::for_index(2, &palette);
        assert_eq!(theme.fill, palette.resolve(ColorToken::StakingGreenFill));
    }

    #[test]
    fn connector_transform_grows_with_index() {
        let first = ConnectorTransform::for_index(1);
        assert!((first.scale - (1.05 + 1.0 / 70.0)).abs() < 1e-12);
        assert_eq!(first.translate_y_px, 1);

        let last = ConnectorTransform::for_index(4);
        assert!(last.scale > first.scale);
        assert!(last.to_string().starts_with("scale(1.1"));
        assert!(last.to_string().ends_with(" translateY(4px)"));
    }
}
