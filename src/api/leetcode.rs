use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::sync::Arc;

use super::params::{render_options, QueryMapExt};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::rendering::render_card;
use crate::services::StatsFetcher;

/// Render a LeetCode stats card
///
/// Fetches the user's statistics upstream and returns the card as SVG.
#[utoipa::path(
    get,
    path = "/leetcode",
    responses(
        (status = 200, description = "Rendered card", content_type = "image/svg+xml", body = String),
        (status = 400, description = "Missing username"),
        (status = 404, description = "User not found"),
        (status = 502, description = "Upstream statistics API failed"),
    ),
    params(
        ("username" = String, Query, description = "LeetCode CN user slug"),
        ("theme" = Option<String>, Query, description = "Theme name (e.g. 'dark', 'radical')"),
        ("title_color" = Option<String>, Query, description = "Title color as hex"),
        ("text_color" = Option<String>, Query, description = "Text color as hex"),
        ("icon_color" = Option<String>, Query, description = "Icon color as hex"),
        ("ring_color" = Option<String>, Query, description = "Progress ring color as hex"),
        ("bg_color" = Option<String>, Query, description = "Background as hex or 'angle,stop1,stop2,...' gradient"),
        ("border_color" = Option<String>, Query, description = "Border color as hex"),
        ("hide_border" = Option<bool>, Query, description = "Hide the card border"),
        ("hide_title" = Option<bool>, Query, description = "Hide the card title"),
        ("custom_title" = Option<String>, Query, description = "Replace the default title"),
        ("locale" = Option<String>, Query, description = "Label language ('en', 'cn', 'zh-tw')"),
        ("card_width" = Option<f64>, Query, description = "Card width in pixels (500-2000)"),
        ("border_radius" = Option<f64>, Query, description = "Corner radius (0-50)"),
        ("disable_animations" = Option<bool>, Query, description = "Render a static card"),
        ("hide_submissions" = Option<bool>, Query, description = "Omit the recent submissions list"),
        ("submissions_limit" = Option<usize>, Query, description = "Number of submissions shown (1-20)"),
    ),
    tag = "Cards"
)]
pub async fn handle_leetcode(
    State(config): State<Arc<AppConfig>>,
    State(fetcher): State<Arc<dyn StatsFetcher>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let username = params.require_str("username")?;
    let options = render_options(
        &params,
        &config.card.default_theme,
        &config.card.default_locale,
    );

    let stats = match fetcher.fetch(username).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::info!(username, error = %e, "Failed to fetch stats");
            return Err(e.into());
        }
    };

    let svg = render_card(&stats, &options);
    tracing::info!(
        username,
        theme = options.theme_name(),
        size_bytes = svg.len(),
        "Card rendered"
    );

    let cache_control = format!(
        "public, max-age={0}, s-maxage={0}",
        config.cache_seconds
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (header::CACHE_CONTROL, cache_control),
        ],
        svg,
    )
        .into_response())
}
