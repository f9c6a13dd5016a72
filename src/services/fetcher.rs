//! LeetCode CN statistics fetcher.
//!
//! Queries the public GraphQL API and normalizes the response into
//! [`LeetCodeStats`]. Status and language codes are mapped to display labels
//! here so the renderer only ever sees strings.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::models::config::UpstreamConfig;
use crate::models::{
    Difficulty, DifficultyBucket, LeetCodeStats, ProblemStats, ProfileStats, SubmissionEntry,
};

/// Error fetching statistics from upstream
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Missing username")]
    MissingUsername,

    #[error("User not found")]
    UserNotFound,

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Upstream(e.to_string())
    }
}

/// Source of user statistics
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    /// Fetch and normalize statistics for `username`
    async fn fetch(&self, username: &str) -> Result<LeetCodeStats, FetchError>;
}

const STATS_QUERY: &str = r#"
query data($username: String!) {
    progress: userProfileUserQuestionProgress(userSlug: $username) {
        ac: numAcceptedQuestions { difficulty count }
        wa: numFailedQuestions { difficulty count }
        un: numUntouchedQuestions { difficulty count }
    }
    user: userProfilePublicProfile(userSlug: $username) {
        username
        ranking: siteRanking
        profile {
            realname: realName
            about: aboutMe
            avatar: userAvatar
            skills: skillTags
            country: countryName
        }
    }
    submissions: recentSubmitted(userSlug: $username) {
        id: submissionId
        status
        lang
        time: submitTime
        question {
            title: translatedTitle
            slug: titleSlug
        }
    }
}"#;

const RESULT_LABELS: &[(i64, &str)] = &[
    (0, "Wrong Answer"),
    (10, "Accepted"),
    (11, "Wrong Answer"),
    (12, "Memory Limit Exceeded"),
    (13, "Output Limit Exceeded"),
    (14, "Time Limit Exceeded"),
    (15, "Runtime Error"),
    (16, "Internal Error"),
    (17, "Compile Error"),
    (18, "Unknown Error"),
    (19, "Security Error"),
    (20, "Wrong Answer"),
    (21, "Wrong Answer"),
    (22, "Presentation Error"),
    (23, "Presentation Error"),
];

const LANGUAGE_LABELS: &[(i64, &str)] = &[
    (0, "C++"),
    (1, "Java"),
    (2, "Python"),
    (3, "C"),
    (4, "C#"),
    (5, "JavaScript"),
    (6, "Ruby"),
    (7, "Swift"),
    (8, "Go"),
    (9, "Scala"),
    (10, "Kotlin"),
    (11, "Rust"),
    (12, "PHP"),
    (13, "TypeScript"),
    (14, "Racket"),
    (15, "Erlang"),
    (16, "Elixir"),
    (17, "Dart"),
];

fn label_for(table: &[(i64, &'static str)], code: Option<i64>) -> &'static str {
    code.and_then(|code| table.iter().find(|(c, _)| *c == code))
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Submission result label for an upstream status code
pub fn status_label(code: Option<i64>) -> &'static str {
    label_for(RESULT_LABELS, code)
}

/// Language label for an upstream language code
pub fn language_label(code: Option<i64>) -> &'static str {
    label_for(LANGUAGE_LABELS, code)
}

// Upstream response shapes (field names follow the query aliases)

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    progress: Option<Progress>,
    user: Option<RawUser>,
    #[serde(default)]
    submissions: Option<Vec<RawSubmission>>,
}

#[derive(Debug, Default, Deserialize)]
struct Progress {
    #[serde(default)]
    ac: Vec<DifficultyCount>,
    #[serde(default)]
    wa: Vec<DifficultyCount>,
    #[serde(default)]
    un: Vec<DifficultyCount>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    username: String,
    ranking: Option<Value>,
    profile: Option<RawProfile>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    realname: Option<String>,
    about: Option<String>,
    avatar: Option<String>,
    skills: Option<Vec<String>>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSubmission {
    id: Option<Value>,
    status: Option<Value>,
    lang: Option<Value>,
    time: Option<Value>,
    question: Option<RawQuestion>,
}

#[derive(Debug, Default, Deserialize)]
struct RawQuestion {
    title: Option<String>,
    slug: Option<String>,
}

/// Read an integer that may be encoded as a JSON number or string
fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count_for(counts: &[DifficultyCount], difficulty: Difficulty) -> u64 {
    counts
        .iter()
        .find(|c| c.difficulty.eq_ignore_ascii_case(difficulty.upstream_name()))
        .and_then(|c| c.count)
        .unwrap_or(0)
}

fn bucket_for(progress: &Progress, difficulty: Difficulty) -> DifficultyBucket {
    let total = [&progress.ac, &progress.wa, &progress.un]
        .iter()
        .fold(0u64, |acc, counts| acc.saturating_add(count_for(counts, difficulty)));
    DifficultyBucket::new(count_for(&progress.ac, difficulty), total)
}

fn normalize_submission(raw: RawSubmission) -> SubmissionEntry {
    let question = raw.question.unwrap_or_default();
    let seconds = raw.time.as_ref().and_then(as_i64).unwrap_or(0);
    let id = match raw.id {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    SubmissionEntry {
        title: question.title.unwrap_or_default(),
        timestamp_millis: seconds.saturating_mul(1000),
        status: status_label(raw.status.as_ref().and_then(as_i64)).to_string(),
        lang: language_label(raw.lang.as_ref().and_then(as_i64)).to_string(),
        slug: question.slug.unwrap_or_default(),
        id,
    }
}

/// Turn a raw GraphQL response body into normalized statistics
fn normalize(response: GraphQlResponse) -> Result<LeetCodeStats, FetchError> {
    let data = response.data.ok_or(FetchError::UserNotFound)?;
    let user = data.user.ok_or(FetchError::UserNotFound)?;
    let progress = data.progress.unwrap_or_default();
    let profile = user.profile.unwrap_or_default();

    Ok(LeetCodeStats {
        profile: ProfileStats {
            username: user.username,
            realname: profile.realname,
            about: profile.about,
            avatar: profile.avatar,
            skills: profile.skills.unwrap_or_default(),
            country: profile.country,
        },
        problem: ProblemStats {
            easy: bucket_for(&progress, Difficulty::Easy),
            medium: bucket_for(&progress, Difficulty::Medium),
            hard: bucket_for(&progress, Difficulty::Hard),
            ranking: user
                .ranking
                .as_ref()
                .and_then(as_i64)
                .and_then(|r| u64::try_from(r).ok()),
        },
        submissions: data
            .submissions
            .unwrap_or_default()
            .into_iter()
            .map(normalize_submission)
            .collect(),
    })
}

/// Fetcher for the LeetCode CN GraphQL API
pub struct LeetCodeCnFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl LeetCodeCnFetcher {
    pub fn new(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl StatsFetcher for LeetCodeCnFetcher {
    async fn fetch(&self, username: &str) -> Result<LeetCodeStats, FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::MissingUsername);
        }

        tracing::debug!(username, endpoint = %self.endpoint, "Fetching LeetCode stats");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "query": STATS_QUERY,
                "variables": { "username": username },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(username, %status, "Upstream returned error status");
            return Err(FetchError::Upstream(format!("HTTP {status}")));
        }

        let body: GraphQlResponse = response.json().await?;
        let stats = normalize(body)?;

        tracing::info!(
            username = %stats.profile.username,
            solved = stats.problem.total_solved(),
            submissions = stats.submissions.len(),
            "Fetched LeetCode stats"
        );

        Ok(stats)
    }
}
