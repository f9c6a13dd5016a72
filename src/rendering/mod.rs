//! SVG card rendering.
//!
//! Everything in this module is synchronous and side-effect free: a card is
//! a pure function of the statistics, the options and the current time.

pub mod card;
pub mod geometry;
pub mod i18n;
pub mod leetcode;
pub mod sections;
pub mod text;
pub mod theme;

pub use card::{AccessibilityLabel, CardConfig, CardConfigBuilder};
pub use leetcode::{render_card, render_card_at};
pub use theme::{resolve_colors, Background, ColorOverrides, ResolvedTheme};
