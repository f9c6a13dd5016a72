//! Text formatting helpers shared by the card sections.

use crate::models::Difficulty;

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Escape text for use in SVG element content and attribute values
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Compact a count: values of 1000 and above become `<n>.<d>k`.
///
/// Rounds half up to one decimal, so `1234 -> "1.2k"` and `1250 -> "1.3k"`.
pub fn compact_number(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let tenths = n / 100 + u64::from(n % 100 >= 50);
    format!("{}.{}k", tenths / 10, tenths % 10)
}

/// Cut `title` to `max_chars` characters, appending `...` when shortened
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut truncated: String = title.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Bucket an elapsed duration into `< 1h ago`, `<n>h ago` or `<n>d ago`.
///
/// Negative durations (timestamps in the future) count as no time elapsed.
pub fn time_ago(elapsed_millis: i64) -> String {
    let elapsed = elapsed_millis.max(0);
    let hours = elapsed / HOUR_MS;
    if hours < 1 {
        "< 1h ago".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", elapsed / DAY_MS)
    }
}

/// 31-multiplier string hash over UTF-16 code units, wrapping at 32 bits
pub fn title_hash(title: &str) -> i32 {
    title
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Difficulty tag shown next to a submission.
///
/// This is a cosmetic guess derived from the title alone: the upstream
/// submission list carries no difficulty. It is stable for a given title
/// but says nothing about the problem's real difficulty.
pub fn derived_difficulty(title: &str) -> Difficulty {
    match i64::from(title_hash(title)).abs() % 3 {
        0 => Difficulty::Easy,
        1 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}
