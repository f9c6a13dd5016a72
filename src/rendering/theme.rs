//! Theme presets and color resolution.
//!
//! A card's colors come from a named preset, optionally overridden per color
//! by the caller. Resolution never fails: invalid overrides and unknown
//! presets degrade to preset values and the `default` preset.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Raw preset colors, hex digits without the leading `#`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: &'static str,
    pub title_color: &'static str,
    pub icon_color: &'static str,
    pub text_color: &'static str,
    pub bg_color: &'static str,
    pub border_color: &'static str,
}

const DEFAULT_BORDER: &str = "e4e2e2";

const fn preset(
    name: &'static str,
    title_color: &'static str,
    icon_color: &'static str,
    text_color: &'static str,
    bg_color: &'static str,
) -> ThemePreset {
    ThemePreset {
        name,
        title_color,
        icon_color,
        text_color,
        bg_color,
        border_color: DEFAULT_BORDER,
    }
}

pub const THEMES: &[ThemePreset] = &[
    preset("default", "2f80ed", "4c71f2", "434d58", "fffefe"),
    preset("dark", "fff", "79ff97", "9f9f9f", "151515"),
    preset("radical", "fe428e", "f8d847", "a9fef7", "141321"),
    preset("merko", "abd200", "b7d364", "68b587", "0a0f0b"),
    preset("gruvbox", "fabd2f", "fe8019", "8ec07c", "282828"),
    preset("tokyonight", "70a5fd", "bf91f3", "38bdae", "1a1b27"),
    preset("onedark", "e4bf7a", "8eb573", "df6d74", "282c34"),
    preset("cobalt", "e683d9", "0480ef", "75eeb2", "193549"),
    preset("synthwave", "e2e9ec", "ef8539", "e5289e", "2b213a"),
    preset("highcontrast", "e7f216", "00ffff", "fff", "000"),
    preset("dracula", "ff6e96", "79dafa", "f8f8f2", "282a36"),
    preset("transparent", "006AFF", "0579C3", "417E87", "ffffff00"),
    ThemePreset {
        border_color: "30363d",
        ..preset("github_dark", "58A6FF", "1F6FEB", "C3D1D9", "0D1117")
    },
    preset("nord", "81a1c1", "88c0d0", "d8dee9", "2e3440"),
    preset("catppuccin_latte", "137980", "8839ef", "4c4f69", "eff1f5"),
    preset("catppuccin_mocha", "94e2d5", "cba6f7", "cdd6f4", "1e1e2e"),
];

/// Look up a preset by name, falling back to `default`
pub fn find_theme(name: &str) -> &'static ThemePreset {
    let name = name.trim();
    THEMES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or(&THEMES[0])
}

/// Card background: a solid color or a linear gradient
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(String),
    Gradient { angle: f64, stops: Vec<String> },
}

impl fmt::Display for Background {
    /// Value usable in a `fill` attribute
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Solid(color) => write!(f, "{color}"),
            Background::Gradient { .. } => write!(f, "url(#gradient)"),
        }
    }
}

/// Concrete colors for one card
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub title_color: String,
    pub text_color: String,
    pub icon_color: String,
    pub ring_color: String,
    pub bg_color: Background,
    pub border_color: String,
}

/// Caller color overrides; `None` means "use the theme default"
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorOverrides<'a> {
    pub title_color: Option<&'a str>,
    pub text_color: Option<&'a str>,
    pub icon_color: Option<&'a str>,
    pub ring_color: Option<&'a str>,
    pub bg_color: Option<&'a str>,
    pub border_color: Option<&'a str>,
}

const HEX_COLOR_PATTERN: &str = r"^#?([A-Fa-f0-9]{3}|[A-Fa-f0-9]{4}|[A-Fa-f0-9]{6}|[A-Fa-f0-9]{8})$";

/// Compiled hex color matcher; `None` only if the pattern fails to compile
fn hex_pattern() -> Option<&'static Regex> {
    static HEX: OnceLock<Option<Regex>> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).ok()).as_ref()
}

/// Normalize a hex color to `#rrggbb` form (keeping its digit count).
///
/// Accepts 3, 4, 6 or 8 hex digits with or without a leading `#`.
pub fn parse_hex_color(value: &str) -> Option<String> {
    let value = value.trim();
    if !hex_pattern()?.is_match(value) {
        return None;
    }
    Some(format!("#{}", value.trim_start_matches('#')))
}

/// Parse a gradient background of the form `angle,color1,color2[,...]`
fn parse_gradient(value: &str) -> Option<Background> {
    let mut parts = value.split(',');
    let angle: f64 = parts.next()?.trim().parse().ok().filter(|a: &f64| a.is_finite())?;
    let stops = parts.map(parse_hex_color).collect::<Option<Vec<_>>>()?;
    if stops.len() < 2 {
        return None;
    }
    Some(Background::Gradient { angle, stops })
}

fn parse_background(value: &str) -> Option<Background> {
    if value.contains(',') {
        parse_gradient(value)
    } else {
        parse_hex_color(value).map(Background::Solid)
    }
}

fn pick(override_value: Option<&str>, preset_value: &str) -> String {
    override_value
        .and_then(parse_hex_color)
        .unwrap_or_else(|| format!("#{preset_value}"))
}

/// Merge a preset with caller overrides into a concrete color set.
///
/// The ring color falls back to the resolved icon color.
pub fn resolve_colors(theme_name: &str, overrides: &ColorOverrides<'_>) -> ResolvedTheme {
    let preset = find_theme(theme_name);

    let icon_color = pick(overrides.icon_color, preset.icon_color);
    let ring_color = overrides
        .ring_color
        .and_then(parse_hex_color)
        .unwrap_or_else(|| icon_color.clone());
    let bg_color = overrides
        .bg_color
        .and_then(parse_background)
        .unwrap_or_else(|| Background::Solid(format!("#{}", preset.bg_color)));

    ResolvedTheme {
        title_color: pick(overrides.title_color, preset.title_color),
        text_color: pick(overrides.text_color, preset.text_color),
        icon_color,
        ring_color,
        bg_color,
        border_color: pick(overrides.border_color, preset.border_color),
    }
}
