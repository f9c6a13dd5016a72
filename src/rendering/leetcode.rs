//! LeetCode stats card: composes the sections into a finished document.

use super::card::{self, AccessibilityLabel, CardConfig};
use super::geometry::circumference;
use super::i18n::{Localizer, TranslationTable};
use super::sections::{self, RING_RADIUS, SUBMISSION_ROW_HEIGHT};
use super::theme::{resolve_colors, ColorOverrides, ResolvedTheme};
use crate::models::{LeetCodeStats, RenderOptions};

/// Card height without the submissions list
pub const BASE_HEIGHT: f64 = 280.0;
/// Extra space below the last submission row
const SUBMISSIONS_MARGIN: f64 = 20.0;

static TRANSLATIONS: &TranslationTable = &[
    (
        "title",
        &[("en", "LeetCode Stats"), ("cn", "LeetCode 统计"), ("zh-tw", "LeetCode 統計")],
    ),
    ("easy", &[("en", "Easy"), ("cn", "简单"), ("zh-tw", "簡單")]),
    ("medium", &[("en", "Medium"), ("cn", "中等"), ("zh-tw", "中等")]),
    ("hard", &[("en", "Hard"), ("cn", "困难"), ("zh-tw", "困難")]),
    (
        "submissions",
        &[("en", "Recent Submissions"), ("cn", "最近提交"), ("zh-tw", "最近提交")],
    ),
];

/// Card height for a given number of submission rows.
///
/// Leaves room for the list both beside the bars and stacked under the
/// ring on narrow cards.
pub fn card_height(rows: usize) -> f64 {
    if rows == 0 {
        return BASE_HEIGHT;
    }
    (BASE_HEIGHT + rows as f64 * SUBMISSION_ROW_HEIGHT + SUBMISSIONS_MARGIN).max(BASE_HEIGHT)
}

fn stylesheet(theme: &ResolvedTheme) -> String {
    format!(
        r#"
      .ranking-text {{
        font: 600 16px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif;
        fill: {text};
      }}
      .submissions-title {{
        font: 600 14px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif;
        fill: {title};
      }}
      .submission-item text {{
        font-family: 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif;
      }}"#,
        text = theme.text_color,
        title = theme.title_color,
    )
}

fn animation_stylesheet() -> String {
    format!(
        r#"
      .ac-progress-circle {{
        animation: leetcode-progress 1s ease-in-out forwards;
      }}
      @keyframes leetcode-progress {{
        from {{ stroke-dashoffset: {full:.2}; }}
        to {{ stroke-dashoffset: var(--progress-offset); }}
      }}
      .difficulty-bar, .submission-item {{
        opacity: 0;
        animation: fadeInUp 0.6s ease-out forwards;
      }}
      .difficulty-bar:nth-child(1) {{ animation-delay: 0.1s; }}
      .difficulty-bar:nth-child(2) {{ animation-delay: 0.2s; }}
      .difficulty-bar:nth-child(3) {{ animation-delay: 0.3s; }}
      @keyframes fadeInUp {{
        from {{ opacity: 0; transform: translateY(10px); }}
        to {{ opacity: 1; transform: translateY(0); }}
      }}"#,
        full = circumference(RING_RADIUS),
    )
}

fn accessibility_label(data: &LeetCodeStats, rows: usize) -> AccessibilityLabel {
    let problem = &data.problem;
    let mut title = format!("{}'s LeetCode Stats", data.profile.username);
    if let Some(ranking) = problem.visible_ranking() {
        title.push_str(&format!(", Rank: {ranking}"));
    }

    let mut description = format!(
        "Total solved: {}/{}, Easy: {}/{}, Medium: {}/{}, Hard: {}/{}",
        problem.total_solved(),
        problem.total_problems(),
        problem.easy.solved,
        problem.easy.total,
        problem.medium.solved,
        problem.medium.total,
        problem.hard.solved,
        problem.hard.total,
    );
    if rows > 0 {
        description.push_str(&format!(", Recent submissions: {rows}"));
    }

    AccessibilityLabel { title, description }
}

/// Render a card using the current wall-clock time for "time ago" labels
pub fn render_card(data: &LeetCodeStats, options: &RenderOptions) -> String {
    render_card_at(data, options, chrono::Utc::now().timestamp_millis())
}

/// Render a card with "time ago" labels relative to `now_millis`.
///
/// Output depends only on the arguments, so repeated calls are
/// byte-identical.
pub fn render_card_at(data: &LeetCodeStats, options: &RenderOptions, now_millis: i64) -> String {
    let problem = &data.problem;
    let total_solved = problem.total_solved();
    let total_problems = problem.total_problems();

    let i18n = Localizer::new(options.locale_code(), TRANSLATIONS);
    let theme = resolve_colors(
        options.theme_name(),
        &ColorOverrides {
            title_color: options.title_color.as_deref(),
            text_color: options.text_color.as_deref(),
            icon_color: options.icon_color.as_deref(),
            ring_color: options.ring_color.as_deref(),
            bg_color: options.bg_color.as_deref(),
            border_color: options.border_color.as_deref(),
        },
    );

    let title = match options.custom_title() {
        Some(custom) => custom.to_string(),
        None => format!("{}'s {}", data.profile.username, i18n.translate("title")),
    };

    let limit = options.submissions_limit();
    let rows = if options.hide_submissions {
        0
    } else {
        sections::visible_submissions(&data.submissions, limit)
    };
    let width = options.width();
    let height = card_height(rows);

    tracing::debug!(
        username = %data.profile.username,
        width,
        height,
        rows,
        locale = i18n.locale(),
        "Rendering LeetCode card"
    );

    let mut body = String::new();
    if let Some(ranking) = problem.visible_ranking() {
        body.push_str(&sections::ranking_badge(ranking, width));
    }
    body.push_str(&sections::total_progress_ring(
        total_solved,
        total_problems,
        &theme,
    ));
    body.push_str(&sections::difficulty_bars(problem, &i18n, &theme));
    if rows > 0 {
        body.push_str(&sections::submissions_list(
            &data.submissions,
            limit,
            width,
            now_millis,
            &i18n,
            &theme,
        ));
    }

    let config = CardConfig::builder(title, width, height, theme.clone())
        .border_radius(options.border_radius())
        .hide_border(options.hide_border)
        .hide_title(options.hide_title)
        .stylesheet(stylesheet(&theme))
        .animation_stylesheet(animation_stylesheet())
        .animations(!options.disable_animations)
        .accessibility_label(accessibility_label(data, rows))
        .build();

    card::render(&config, &body)
}
