//! The components module contains all shared components for the site. The
//! staking hierarchy is split into its small layout pieces under
//! `staking_hierarchy`.
pub mod pico;
pub mod rich_text;
pub mod staking_glyph;
pub mod staking_hierarchy;
