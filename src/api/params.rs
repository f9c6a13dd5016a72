//! Query parameter parsing for card requests.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::RenderOptions;

/// Extension trait for convenient query parameter parsing.
pub trait QueryMapExt {
    /// Get a non-blank parameter, or return an error if missing.
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError>;

    /// Get a non-blank parameter, returning None if missing or blank.
    fn get_str(&self, name: &str) -> Option<&str>;

    /// Get a parameter parsed as a type, returning None if missing or invalid.
    fn get_parsed<T: std::str::FromStr>(&self, name: &str) -> Option<T>;

    /// Get a boolean flag. Only `true` and `false` are recognized
    /// (case-insensitive); anything else counts as unset.
    fn get_bool(&self, name: &str) -> Option<bool>;

    /// Get an owned string parameter.
    fn get_string(&self, name: &str) -> Option<String> {
        self.get_str(name).map(str::to_string)
    }
}

impl QueryMapExt for HashMap<String, String> {
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError> {
        self.get_str(name).ok_or(ApiError::MissingParam(name))
    }

    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    fn get_parsed<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get_str(name).and_then(|v| v.parse().ok())
    }

    fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get_str(name)?.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// Build render options from query parameters, filling theme and locale
/// from server defaults when the request leaves them unset.
pub fn render_options(
    params: &HashMap<String, String>,
    default_theme: &str,
    default_locale: &str,
) -> RenderOptions {
    RenderOptions {
        theme: Some(
            params
                .get_string("theme")
                .unwrap_or_else(|| default_theme.to_string()),
        ),
        title_color: params.get_string("title_color"),
        text_color: params.get_string("text_color"),
        icon_color: params.get_string("icon_color"),
        ring_color: params.get_string("ring_color"),
        bg_color: params.get_string("bg_color"),
        border_color: params.get_string("border_color"),
        hide_border: params.get_bool("hide_border").unwrap_or(false),
        hide_title: params.get_bool("hide_title").unwrap_or(false),
        custom_title: params.get_string("custom_title"),
        locale: Some(
            params
                .get_string("locale")
                .unwrap_or_else(|| default_locale.to_string()),
        ),
        card_width: params.get_parsed("card_width"),
        border_radius: params.get_parsed("border_radius"),
        disable_animations: params.get_bool("disable_animations").unwrap_or(false),
        hide_submissions: params.get_bool("hide_submissions").unwrap_or(false),
        submissions_limit: params.get_parsed("submissions_limit"),
    }
}
