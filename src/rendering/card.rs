//! Outer card frame.
//!
//! A [`CardConfig`] describes everything around the card body: size,
//! border, background, title, stylesheet, accessibility metadata and whether
//! animations run. It is built once with [`CardConfigBuilder`] and rendered
//! with the pure [`render`] function.

use std::fmt::Write;

use super::text::escape_xml;
use super::theme::{Background, ResolvedTheme};

const PADDING_X: f64 = 25.0;
const PADDING_Y: f64 = 35.0;
const FONT_STACK: &str = "'Segoe UI', Ubuntu, \"Helvetica Neue\", Sans-Serif";
const FALLBACK_DESCRIPTION: &str = "Statistics card";

/// Screen-reader title and description for the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityLabel {
    pub title: String,
    pub description: String,
}

/// Immutable description of a card frame
#[derive(Debug, Clone)]
pub struct CardConfig {
    title: String,
    width: f64,
    height: f64,
    border_radius: f64,
    theme: ResolvedTheme,
    hide_border: bool,
    hide_title: bool,
    stylesheet: String,
    animation_stylesheet: String,
    animations: bool,
    accessibility: Option<AccessibilityLabel>,
}

impl CardConfig {
    pub fn builder(
        title: impl Into<String>,
        width: f64,
        height: f64,
        theme: ResolvedTheme,
    ) -> CardConfigBuilder {
        CardConfigBuilder {
            config: CardConfig {
                title: title.into(),
                width,
                height,
                border_radius: 4.5,
                theme,
                hide_border: false,
                hide_title: false,
                stylesheet: String::new(),
                animation_stylesheet: String::new(),
                animations: true,
                accessibility: None,
            },
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations
    }

    /// Vertical offset at which the body starts
    pub fn body_offset(&self) -> f64 {
        if self.hide_title {
            PADDING_X
        } else {
            PADDING_Y + 20.0
        }
    }
}

/// Builder for [`CardConfig`]; every setter is idempotent
#[derive(Debug, Clone)]
pub struct CardConfigBuilder {
    config: CardConfig,
}

impl CardConfigBuilder {
    pub fn border_radius(mut self, radius: f64) -> Self {
        self.config.border_radius = radius;
        self
    }

    pub fn hide_border(mut self, hide: bool) -> Self {
        self.config.hide_border = hide;
        self
    }

    pub fn hide_title(mut self, hide: bool) -> Self {
        self.config.hide_title = hide;
        self
    }

    /// Static CSS, always emitted
    pub fn stylesheet(mut self, css: impl Into<String>) -> Self {
        self.config.stylesheet = css.into();
        self
    }

    /// CSS containing animations and transitions; dropped when animations
    /// are disabled
    pub fn animation_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.config.animation_stylesheet = css.into();
        self
    }

    pub fn animations(mut self, enabled: bool) -> Self {
        self.config.animations = enabled;
        self
    }

    pub fn accessibility_label(mut self, label: AccessibilityLabel) -> Self {
        self.config.accessibility = Some(label);
        self
    }

    pub fn build(self) -> CardConfig {
        self.config
    }
}

/// Keyframes used by the frame itself (title fade-in)
fn frame_animations() -> &'static str {
    r#"
      @keyframes fadeInAnimation {
        from { opacity: 0; }
        to { opacity: 1; }
      }
      .header { animation: fadeInAnimation 0.8s ease-in-out forwards; }"#
}

/// Overrides any animation left in the body markup
const STATIC_OVERRIDE: &str =
    "\n      * { animation-duration: 0s !important; animation-delay: 0s !important; transition: none !important; }";

fn render_gradient(background: &Background) -> String {
    let Background::Gradient { angle, stops } = background else {
        return String::new();
    };

    let last = stops.len().saturating_sub(1).max(1) as f64;
    let mut defs = format!(
        r#"
    <defs>
      <linearGradient id="gradient" gradientTransform="rotate({angle})" gradientUnits="userSpaceOnUse">"#
    );
    for (i, color) in stops.iter().enumerate() {
        let offset = i as f64 * 100.0 / last;
        let _ = write!(defs, r#"<stop offset="{offset:.0}%" stop-color="{color}" />"#);
    }
    defs.push_str("</linearGradient>\n    </defs>");
    defs
}

fn render_title(config: &CardConfig) -> String {
    format!(
        r#"
    <g data-testid="card-title" transform="translate({PADDING_X}, {PADDING_Y})">
      <text x="0" y="0" class="header" data-testid="header">{}</text>
    </g>"#,
        escape_xml(&config.title)
    )
}

/// Wrap `body` in the card frame and return the finished SVG document
pub fn render(config: &CardConfig, body: &str) -> String {
    let theme = &config.theme;
    let (a11y_title, a11y_desc) = match &config.accessibility {
        Some(label) => (label.title.as_str(), label.description.as_str()),
        None => (config.title.as_str(), FALLBACK_DESCRIPTION),
    };

    let mut style = format!(
        r#"
      .header {{
        font: 600 18px {FONT_STACK};
        fill: {};
      }}
      @supports(-moz-appearance: auto) {{
        .header {{ font-size: 15.5px; }}
      }}
      {}"#,
        theme.title_color, config.stylesheet
    );
    if config.animations {
        style.push_str(frame_animations());
        style.push_str(&config.animation_stylesheet);
    } else {
        style.push_str(STATIC_OVERRIDE);
    }

    let title = if config.hide_title {
        String::new()
    } else {
        render_title(config)
    };

    format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" fill="none" xmlns="http://www.w3.org/2000/svg" role="img" aria-labelledby="descId">
    <title id="titleId">{a11y_title}</title>
    <desc id="descId">{a11y_desc}</desc>
    <style>{style}
    </style>{gradient}
    <rect data-testid="card-bg" x="0.5" y="0.5" rx="{radius}" height="{rect_height}" width="{rect_width}" stroke="{border}" fill="{bg}" stroke-opacity="{stroke_opacity}" />{title}
    <g data-testid="main-card-body" transform="translate(0, {body_offset})">{body}
    </g>
</svg>
"#,
        width = config.width,
        height = config.height,
        a11y_title = escape_xml(a11y_title),
        a11y_desc = escape_xml(a11y_desc),
        gradient = render_gradient(&theme.bg_color),
        radius = config.border_radius,
        rect_height = (config.height - 1.0).max(0.0),
        rect_width = (config.width - 1.0).max(0.0),
        border = theme.border_color,
        bg = theme.bg_color,
        stroke_opacity = if config.hide_border { 0 } else { 1 },
        body_offset = config.body_offset(),
    )
}
