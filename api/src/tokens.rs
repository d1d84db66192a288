//! The design-token store for the staking color scheme.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// A named color token, e.g. `stakingGold` or `stakingGoldFill`.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ColorToken {
    StakingGold,
    StakingGreen,
    StakingBlue,
    StakingRed,
    StakingGoldFill,
    StakingGreenFill,
    StakingBlueFill,
    StakingRedFill,
}

impl ColorToken {
    /// The design-token name, as used in the token store.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Light or dark rendering of the palette.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// A concrete CSS color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const BLACK: Color = Color("#000000");
    pub const TRANSPARENT: Color = Color("#00000000");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Resolves color tokens to concrete values for one color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    mode: ColorMode,
}

impl Palette {
    pub fn for_mode(mode: ColorMode) -> Self {
        Self { mode }
    }

    pub fn resolve(&self, token: ColorToken) -> Color {
        use ColorToken::*;

        let value = match (self.mode, token) {
            (ColorMode::Light, StakingGold) => "#9B6F00",
            (ColorMode::Light, StakingGreen) => "#00724A",
            (ColorMode::Light, StakingBlue) => "#0B83DC",
            (ColorMode::Light, StakingRed) => "#B73735",
            (ColorMode::Light, StakingGoldFill) => "#FAF5E7",
            (ColorMode::Light, StakingGreenFill) => "#E8F7F0",
            (ColorMode::Light, StakingBlueFill) => "#E7F3FB",
            (ColorMode::Light, StakingRedFill) => "#FBEBEB",
            (ColorMode::Dark, StakingGold) => "#E4B640",
            (ColorMode::Dark, StakingGreen) => "#4BE79C",
            (ColorMode::Dark, StakingBlue) => "#6FC1FF",
            (ColorMode::Dark, StakingRed) => "#EE8D8A",
            (ColorMode::Dark, StakingGoldFill) => "#2A2418",
            (ColorMode::Dark, StakingGreenFill) => "#18291F",
            (ColorMode::Dark, StakingBlueFill) => "#172634",
            (ColorMode::Dark, StakingRedFill) => "#2E1B1B",
        };
        Color(value)
    }

    /// Resolves a token by its design-token name. Unknown names give `None`.
    pub fn resolve_name(&self, name: &str) -> Option<Color> {
        ColorToken::from_str(name).ok().map(|token| self.resolve(token))
    }

    /// Resolves several tokens at once, in order.
    pub fn resolve_all<const N: usize>(&self, tokens: [ColorToken; N]) -> [Color; N] {
        tokens.map(|token| self.resolve(token))
    }
}
