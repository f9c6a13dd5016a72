use serde::Deserialize;

/// Default card width in pixels
pub const DEFAULT_CARD_WIDTH: f64 = 850.0;
pub const MIN_CARD_WIDTH: f64 = 500.0;
pub const MAX_CARD_WIDTH: f64 = 2000.0;

pub const DEFAULT_BORDER_RADIUS: f64 = 4.5;
pub const MAX_BORDER_RADIUS: f64 = 50.0;

/// Number of recent submissions shown when no limit is given
pub const DEFAULT_SUBMISSIONS_LIMIT: usize = 6;
pub const MAX_SUBMISSIONS_LIMIT: usize = 20;

/// Caller-supplied card options.
///
/// Every field is optional. A color set to `None` means "use the theme
/// default". Out-of-range numbers are clamped by the accessors below rather
/// than rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub theme: Option<String>,
    pub title_color: Option<String>,
    pub text_color: Option<String>,
    pub icon_color: Option<String>,
    pub ring_color: Option<String>,
    pub bg_color: Option<String>,
    pub border_color: Option<String>,
    pub hide_border: bool,
    pub hide_title: bool,
    pub custom_title: Option<String>,
    pub locale: Option<String>,
    pub card_width: Option<f64>,
    pub border_radius: Option<f64>,
    pub disable_animations: bool,
    pub hide_submissions: bool,
    pub submissions_limit: Option<usize>,
}

impl RenderOptions {
    pub fn theme_name(&self) -> &str {
        self.theme.as_deref().unwrap_or("default")
    }

    pub fn locale_code(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    /// Card width, clamped to a range the layout can hold
    pub fn width(&self) -> f64 {
        match self.card_width {
            Some(w) if w.is_finite() => w.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH),
            _ => DEFAULT_CARD_WIDTH,
        }
    }

    pub fn border_radius(&self) -> f64 {
        match self.border_radius {
            Some(r) if r.is_finite() => r.clamp(0.0, MAX_BORDER_RADIUS),
            _ => DEFAULT_BORDER_RADIUS,
        }
    }

    pub fn submissions_limit(&self) -> usize {
        self.submissions_limit
            .unwrap_or(DEFAULT_SUBMISSIONS_LIMIT)
            .clamp(1, MAX_SUBMISSIONS_LIMIT)
    }

    /// Custom title, ignoring blank strings
    pub fn custom_title(&self) -> Option<&str> {
        self.custom_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
