//! Test fixtures and constants.

use serde_json::{json, Value};

use statcard::models::{
    DifficultyBucket, LeetCodeStats, ProblemStats, ProfileStats, SubmissionEntry,
};

/// Fixed clock for deterministic "time ago" labels
pub const NOW: i64 = 1_700_000_000_000;

const HOUR: i64 = 60 * 60 * 1000;
const DAY: i64 = 24 * HOUR;

fn submission(title: &str, ago: i64, status: &str, lang: &str, slug: &str, id: &str) -> SubmissionEntry {
    SubmissionEntry {
        title: title.to_string(),
        timestamp_millis: NOW - ago,
        status: status.to_string(),
        lang: lang.to_string(),
        slug: slug.to_string(),
        id: id.to_string(),
    }
}

/// Seven recent submissions spanning hours to days
pub fn submissions() -> Vec<SubmissionEntry> {
    vec![
        submission("Two Sum", 2 * HOUR, "Accepted", "JavaScript", "two-sum", "123"),
        submission("Add Two Numbers", 5 * HOUR, "Wrong Answer", "Python", "add-two-numbers", "124"),
        submission(
            "Longest Substring Without Repeating Characters",
            8 * HOUR,
            "Accepted",
            "Java",
            "longest-substring-without-repeating-characters",
            "125",
        ),
        submission(
            "Median of Two Sorted Arrays",
            DAY,
            "Time Limit Exceeded",
            "C++",
            "median-of-two-sorted-arrays",
            "126",
        ),
        submission("Palindrome Number", 2 * DAY, "Accepted", "Java", "palindrome-number", "127"),
        submission(
            "Regular Expression Matching",
            3 * DAY,
            "Wrong Answer",
            "Python",
            "regular-expression-matching",
            "128",
        ),
        submission(
            "Container With Most Water",
            4 * DAY,
            "Accepted",
            "JavaScript",
            "container-with-most-water",
            "129",
        ),
    ]
}

/// Statistics for "testuser": 50/100 easy, 30/200 medium, 10/150 hard,
/// ranked 12345, with seven recent submissions
pub fn base_stats() -> LeetCodeStats {
    LeetCodeStats {
        profile: ProfileStats {
            username: "testuser".to_string(),
            realname: Some("Test User".to_string()),
            about: Some("A test user".to_string()),
            avatar: Some("avatar-url".to_string()),
            skills: vec!["JavaScript".to_string(), "Python".to_string()],
            country: Some("USA".to_string()),
        },
        problem: ProblemStats {
            easy: DifficultyBucket::new(50, 100),
            medium: DifficultyBucket::new(30, 200),
            hard: DifficultyBucket::new(10, 150),
            ranking: Some(12345),
        },
        submissions: submissions(),
    }
}

/// A user with the given name and no ranking or submissions
pub fn unranked_stats(username: &str) -> LeetCodeStats {
    let mut stats = base_stats();
    stats.profile.username = username.to_string();
    stats.problem.ranking = None;
    stats.submissions.clear();
    stats
}

/// Upstream GraphQL body matching [`base_stats`] (first submission only)
pub fn graphql_response() -> Value {
    json!({
        "data": {
            "progress": {
                "ac": [
                    { "difficulty": "EASY", "count": 50 },
                    { "difficulty": "MEDIUM", "count": 30 },
                    { "difficulty": "HARD", "count": 10 }
                ],
                "wa": [
                    { "difficulty": "EASY", "count": 10 },
                    { "difficulty": "MEDIUM", "count": 20 },
                    { "difficulty": "HARD", "count": 5 }
                ],
                "un": [
                    { "difficulty": "EASY", "count": 40 },
                    { "difficulty": "MEDIUM", "count": 150 },
                    { "difficulty": "HARD", "count": 135 }
                ]
            },
            "user": {
                "username": "testuser",
                "ranking": 12345,
                "profile": {
                    "realname": "Test User",
                    "about": "A test user",
                    "avatar": "avatar-url",
                    "skills": ["JavaScript", "Python"],
                    "country": "USA"
                }
            },
            "submissions": [
                {
                    "id": "123",
                    "status": 10,
                    "lang": 5,
                    "time": 1_699_992_800,
                    "question": { "title": "Two Sum", "slug": "two-sum" }
                }
            ]
        }
    })
}

/// Upstream GraphQL body for an unknown user
pub fn graphql_user_not_found() -> Value {
    json!({
        "data": {
            "progress": null,
            "user": null,
            "submissions": []
        },
        "errors": [{ "message": "user does not exist" }]
    })
}
