//! Card body sections: the total-progress ring, per-tier bars and the
//! recent submissions list.
//!
//! Each function returns an SVG fragment positioned in card-body
//! coordinates.

use std::fmt::Write;

use super::geometry::{bar_width, circular_offset, circumference, progress_percent};
use super::i18n::Localizer;
use super::text::{compact_number, derived_difficulty, escape_xml, time_ago, truncate_title};
use super::theme::ResolvedTheme;
use crate::models::{Difficulty, ProblemStats, SubmissionEntry};

pub const RING_RADIUS: f64 = 45.0;
const RING_STROKE: f64 = 8.0;
const RING_CENTER: (f64, f64) = (90.0, 140.0);
const TRACK_COLOR: &str = "rgba(125,125,125,0.2)";

pub const BAR_TRACK_WIDTH: f64 = 160.0;
const BARS_ORIGIN: (f64, f64) = (220.0, 40.0);
const BAR_FIRST_ROW: f64 = 10.0;
const BAR_ROW_PITCH: f64 = 40.0;

/// Leftmost edge of the submissions column when it sits beside the bars
pub const SUBMISSIONS_X: f64 = 480.0;
/// Top of the submissions column when it is stacked under the ring
pub const STACKED_SUBMISSIONS_Y: f64 = 205.0;
/// Horizontal inset of body content from the card edges
const CARD_INSET: f64 = 25.0;
/// Height of the list heading
pub const SUBMISSIONS_HEADER: f64 = 25.0;
/// Vertical pitch of one submission row
pub const SUBMISSION_ROW_HEIGHT: f64 = 20.0;
/// Characters of a submission title kept before the ellipsis
pub const TITLE_MAX_CHARS: usize = 22;
pub const SUBMISSIONS_COLUMN_WIDTH: f64 = 345.0;

const DIFFICULTY_COLORS: &[(Difficulty, &str)] = &[
    (Difficulty::Easy, "#00b04f"),
    (Difficulty::Medium, "#ffb700"),
    (Difficulty::Hard, "#ff375f"),
];

pub fn difficulty_color(difficulty: Difficulty) -> &'static str {
    DIFFICULTY_COLORS
        .iter()
        .find(|(d, _)| *d == difficulty)
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL_STATUS.color)
}

/// Glyph and color drawn for a submission status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub glyph: &'static str,
    pub color: &'static str,
}

const fn style(glyph: &'static str, color: &'static str) -> StatusStyle {
    StatusStyle { glyph, color }
}

pub const NEUTRAL_STATUS: StatusStyle = style("•", "#9e9e9e");

const STATUS_STYLES: &[(&str, StatusStyle)] = &[
    ("Accepted", style("✓", "#00b04f")),
    ("Wrong Answer", style("✗", "#ff375f")),
    ("Time Limit Exceeded", style("T", "#ffb700")),
    ("Memory Limit Exceeded", style("M", "#ffb700")),
    ("Output Limit Exceeded", style("O", "#ffb700")),
    ("Runtime Error", style("R", "#ff375f")),
    ("Compile Error", style("C", "#ff375f")),
    ("Presentation Error", style("P", "#ff375f")),
    ("Security Error", style("S", "#ff375f")),
    ("Internal Error", style("!", "#9e9e9e")),
    ("Unknown Error", style("?", "#9e9e9e")),
];

/// Style for a status label; unrecognized labels get the neutral style
pub fn status_style(status: &str) -> StatusStyle {
    STATUS_STYLES
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(status.trim()))
        .map(|(_, style)| *style)
        .unwrap_or(NEUTRAL_STATUS)
}

/// Ranking badge in the top-right corner of the body, on the baseline of
/// the submissions heading and above the first row
pub fn ranking_badge(ranking: u64, card_width: f64) -> String {
    format!(
        r#"
    <text x="{}" y="15" text-anchor="end" class="ranking-text">#{ranking}</text>"#,
        card_width - CARD_INSET
    )
}

/// Top-left corner of the submissions column in body coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListPlacement {
    pub x: f64,
    pub y: f64,
}

/// Place the submissions column inside a card of `card_width`.
///
/// The column is right-aligned beside the bars when it fits there,
/// otherwise it drops below the ring at the left inset. Either way its
/// right edge stays within the card.
pub fn submissions_placement(card_width: f64) -> ListPlacement {
    let beside = card_width - CARD_INSET - SUBMISSIONS_COLUMN_WIDTH;
    if beside >= SUBMISSIONS_X {
        ListPlacement { x: beside, y: 0.0 }
    } else {
        ListPlacement {
            x: CARD_INSET,
            y: STACKED_SUBMISSIONS_Y,
        }
    }
}

/// Ring showing overall progress with the compacted solved count inside
pub fn total_progress_ring(
    total_solved: u64,
    total_problems: u64,
    theme: &ResolvedTheme,
) -> String {
    let percent = progress_percent(total_solved, total_problems);
    let dash = circumference(RING_RADIUS);
    let offset = circular_offset(percent, RING_RADIUS);

    format!(
        r#"
    <g transform="translate({cx}, {cy})" class="ac-circle">
      <circle cx="0" cy="0" r="{RING_RADIUS}" fill="none" stroke="{TRACK_COLOR}" stroke-width="{RING_STROKE}" />
      <circle cx="0" cy="0" r="{RING_RADIUS}" fill="none" stroke="{ring}" stroke-width="{RING_STROKE}" stroke-linecap="round" stroke-dasharray="{dash:.2}" stroke-dashoffset="{offset:.2}" transform="rotate(-90)" class="ac-progress-circle" style="--progress-offset: {offset:.2}" />
      <text x="0" y="8" text-anchor="middle" font-size="28" font-weight="bold" fill="{text}" class="ac-count">{count}</text>
    </g>"#,
        cx = RING_CENTER.0,
        cy = RING_CENTER.1,
        ring = theme.ring_color,
        text = theme.text_color,
        count = compact_number(total_solved),
    )
}

/// One labelled progress bar per difficulty tier
pub fn difficulty_bars(
    problem: &ProblemStats,
    i18n: &Localizer,
    theme: &ResolvedTheme,
) -> String {
    let mut out = format!(
        r#"
    <g transform="translate({}, {})" class="difficulty-stats">"#,
        BARS_ORIGIN.0, BARS_ORIGIN.1
    );

    for (row, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        let bucket = problem.bucket(difficulty);
        let fill = bar_width(progress_percent(bucket.solved, bucket.total), BAR_TRACK_WIDTH);
        let y = BAR_FIRST_ROW + row as f64 * BAR_ROW_PITCH;

        let _ = write!(
            out,
            r#"
      <g class="difficulty-bar" data-difficulty="{key}" transform="translate(0, {y})">
        <text x="0" y="15" font-size="16" font-weight="600" fill="{text}">{label}</text>
        <rect x="0" y="20" width="{BAR_TRACK_WIDTH}" height="6" rx="3" fill="{TRACK_COLOR}" />
        <rect x="0" y="20" width="{fill:.2}" height="6" rx="3" fill="{color}" />
        <text x="{count_x}" y="15" font-size="16" font-weight="600" fill="{text}">{solved}/{total}</text>
      </g>"#,
            key = difficulty.key(),
            text = theme.text_color,
            label = escape_xml(i18n.translate(difficulty.key())),
            color = difficulty_color(difficulty),
            count_x = BAR_TRACK_WIDTH + 15.0,
            solved = bucket.solved,
            total = bucket.total,
        );
    }

    out.push_str("\n    </g>");
    out
}

/// Number of submission rows that will be drawn
pub fn visible_submissions(entries: &[SubmissionEntry], limit: usize) -> usize {
    entries.len().min(limit)
}

/// List of the first `limit` submissions, in the order given
pub fn submissions_list(
    entries: &[SubmissionEntry],
    limit: usize,
    card_width: f64,
    now_millis: i64,
    i18n: &Localizer,
    theme: &ResolvedTheme,
) -> String {
    let rows = visible_submissions(entries, limit);
    if rows == 0 {
        return String::new();
    }

    let place = submissions_placement(card_width);
    let mut out = format!(
        r#"
    <g class="submissions-section" transform="translate({}, {})">
      <text x="0" y="15" class="submissions-title">{}</text>"#,
        place.x,
        place.y,
        escape_xml(i18n.translate("submissions"))
    );

    for (row, entry) in entries[..rows].iter().enumerate() {
        out.push_str(&submission_row(row, entry, now_millis, i18n, theme));
    }

    out.push_str("\n    </g>");
    out
}

fn submission_row(
    row: usize,
    entry: &SubmissionEntry,
    now_millis: i64,
    i18n: &Localizer,
    theme: &ResolvedTheme,
) -> String {
    let status = status_style(&entry.status);
    let difficulty = derived_difficulty(&entry.title);
    let age = time_ago(now_millis.saturating_sub(entry.timestamp_millis));
    let meta = if entry.lang.is_empty() {
        age
    } else {
        format!("{} · {age}", entry.lang)
    };
    let y = SUBMISSIONS_HEADER + row as f64 * SUBMISSION_ROW_HEIGHT;

    format!(
        r##"
      <g class="submission-item" transform="translate(0, {y})" style="animation-delay: {delay}ms">
        <circle cx="6" cy="8" r="6" fill="{status_color}" />
        <text x="6" y="11" text-anchor="middle" font-size="9" font-weight="700" fill="#fff" class="status-glyph">{glyph}</text>
        <text x="18" y="12" font-size="12" font-weight="500" fill="{text}" class="submission-title">{title}</text>
        <rect x="178" y="1" width="44" height="14" rx="3" fill="{tag_color}" fill-opacity="0.15" />
        <text x="200" y="11.5" text-anchor="middle" font-size="9" font-weight="600" fill="{tag_color}" class="submission-difficulty">{tag}</text>
        <text x="{meta_x}" y="12" text-anchor="end" font-size="10" fill="{text}" fill-opacity="0.7" class="submission-meta">{meta}</text>
      </g>"##,
        delay = row * 100,
        status_color = status.color,
        glyph = status.glyph,
        text = theme.text_color,
        title = escape_xml(&truncate_title(&entry.title, TITLE_MAX_CHARS)),
        tag_color = difficulty_color(difficulty),
        tag = escape_xml(i18n.translate(difficulty.key())),
        meta_x = SUBMISSIONS_COLUMN_WIDTH,
        meta = escape_xml(&meta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DifficultyBucket;
    use crate::rendering::theme::{resolve_colors, ColorOverrides};

    static TABLE: &crate::rendering::i18n::TranslationTable = &[
        ("easy", &[("en", "Easy")]),
        ("medium", &[("en", "Medium")]),
        ("hard", &[("en", "Hard")]),
        ("submissions", &[("en", "Recent Submissions")]),
    ];

    const NOW: i64 = 1_700_000_000_000;
    const HOUR: i64 = 3_600_000;

    fn theme() -> ResolvedTheme {
        resolve_colors("default", &ColorOverrides::default())
    }

    fn entry(title: &str, hours_ago: i64, status: &str, lang: &str) -> SubmissionEntry {
        SubmissionEntry {
            title: title.to_string(),
            timestamp_millis: NOW - hours_ago * HOUR,
            status: status.to_string(),
            lang: lang.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_styles() {
        assert_eq!(status_style("Accepted").glyph, "✓");
        assert_eq!(status_style("accepted").color, "#00b04f");
        assert_eq!(status_style("Wrong Answer").color, "#ff375f");
        assert_eq!(status_style("Something New"), NEUTRAL_STATUS);
        assert_eq!(status_style(""), NEUTRAL_STATUS);
    }

    #[test]
    fn test_difficulty_colors() {
        assert_eq!(difficulty_color(Difficulty::Easy), "#00b04f");
        assert_eq!(difficulty_color(Difficulty::Medium), "#ffb700");
        assert_eq!(difficulty_color(Difficulty::Hard), "#ff375f");
    }

    #[test]
    fn test_ring_empty_and_full() {
        let empty = total_progress_ring(0, 0, &theme());
        assert!(empty.contains(r#"stroke-dashoffset="282.74""#));
        assert!(empty.contains(r#"class="ac-count">0</text>"#));

        let full = total_progress_ring(1500, 1000, &theme());
        assert!(full.contains(r#"stroke-dashoffset="0.00""#));
        assert!(full.contains(r#"class="ac-count">1.5k</text>"#));
    }

    #[test]
    fn test_ring_uses_ring_color() {
        let theme = resolve_colors(
            "default",
            &ColorOverrides {
                ring_color: Some("ff00ff"),
                ..Default::default()
            },
        );
        let ring = total_progress_ring(10, 20, &theme);
        assert!(ring.contains(r##"stroke="#ff00ff""##));
    }

    #[test]
    fn test_difficulty_bars() {
        let problem = ProblemStats {
            easy: DifficultyBucket::new(50, 100),
            medium: DifficultyBucket::new(30, 200),
            hard: DifficultyBucket::new(20, 10),
            ranking: None,
        };
        let i18n = Localizer::new("en", TABLE);
        let bars = difficulty_bars(&problem, &i18n, &theme());

        assert_eq!(bars.matches(r#"class="difficulty-bar""#).count(), 3);
        assert!(bars.contains(">50/100</text>"));
        assert!(bars.contains(">30/200</text>"));
        assert!(bars.contains(">Easy</text>"));
        // 50% of the 160px track
        assert!(bars.contains(r##"width="80.00" height="6" rx="3" fill="#00b04f""##));
        // over-full bucket is clamped to the track
        assert!(bars.contains(r##"width="160.00" height="6" rx="3" fill="#ff375f""##));
    }

    #[test]
    fn test_submissions_list_limit_and_order() {
        let entries = vec![
            entry("Two Sum", 2, "Accepted", "JavaScript"),
            entry("Add Two Numbers", 5, "Wrong Answer", "Python"),
            entry("Palindrome Number", 30, "Accepted", "Java"),
        ];
        let i18n = Localizer::new("en", TABLE);
        let list = submissions_list(&entries, 2, 850.0, NOW, &i18n, &theme());

        assert_eq!(list.matches(r#"class="submission-item""#).count(), 2);
        assert!(list.contains("Recent Submissions"));
        let first = list.find("Two Sum").unwrap();
        let second = list.find("Add Two Numbers").unwrap();
        assert!(first < second);
        assert!(!list.contains("Palindrome Number"));
        assert!(list.contains("JavaScript · 2h ago"));
        assert!(list.contains("Python · 5h ago"));
    }

    #[test]
    fn test_submissions_list_empty() {
        let i18n = Localizer::new("en", TABLE);
        assert!(submissions_list(&[], 6, 850.0, NOW, &i18n, &theme()).is_empty());
    }

    #[test]
    fn test_submission_row_truncates_and_escapes() {
        let entries = vec![entry(
            "Longest Substring Without Repeating Characters",
            48,
            "Mystery Status",
            "",
        )];
        let i18n = Localizer::new("en", TABLE);
        let list = submissions_list(&entries, 6, 850.0, NOW, &i18n, &theme());

        assert!(list.contains(">Longest Substring With...</text>"));
        assert!(list.contains(">2d ago</text>"));
        assert!(list.contains(r##"fill="#9e9e9e""##));
        assert!(list.contains(">•</text>"));
    }

    #[test]
    fn test_ranking_badge() {
        let badge = ranking_badge(12345, 850.0);
        assert!(badge.contains(r#"x="825" y="15""#));
        assert!(badge.contains(">#12345</text>"));
    }

    #[test]
    fn test_submissions_placement_beside_bars() {
        assert_eq!(
            submissions_placement(850.0),
            ListPlacement { x: 480.0, y: 0.0 }
        );
        // wider cards keep the column flush with the right inset
        assert_eq!(
            submissions_placement(1000.0),
            ListPlacement { x: 630.0, y: 0.0 }
        );
    }

    #[test]
    fn test_submissions_placement_stacks_on_narrow_cards() {
        for width in [500.0, 600.0, 700.0, 849.0] {
            let place = submissions_placement(width);
            assert_eq!(place, ListPlacement { x: 25.0, y: STACKED_SUBMISSIONS_Y });
            assert!(place.x + SUBMISSIONS_COLUMN_WIDTH <= width);
        }
    }

    #[test]
    fn test_submissions_list_translated_to_placement() {
        let entries = vec![entry("Two Sum", 2, "Accepted", "Rust")];
        let i18n = Localizer::new("en", TABLE);

        let wide = submissions_list(&entries, 6, 850.0, NOW, &i18n, &theme());
        assert!(wide.contains(r#"class="submissions-section" transform="translate(480, 0)""#));

        let narrow = submissions_list(&entries, 6, 500.0, NOW, &i18n, &theme());
        assert!(narrow.contains(r#"class="submissions-section" transform="translate(25, 205)""#));
    }
}
