use serde::{Deserialize, Serialize};

/// Public profile of a LeetCode user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub username: String,
    #[serde(default)]
    pub realname: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Solved/total counts for one difficulty tier.
///
/// `solved <= total` is expected but not guaranteed: the two numbers come
/// from independent upstream counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBucket {
    pub solved: u64,
    pub total: u64,
}

impl DifficultyBucket {
    pub fn new(solved: u64, total: u64) -> Self {
        Self { solved, total }
    }
}

/// Problem difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase key used for translations and color lookups
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Uppercase name used by the upstream API
    pub fn upstream_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Problem-solving progress across all tiers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemStats {
    pub easy: DifficultyBucket,
    pub medium: DifficultyBucket,
    pub hard: DifficultyBucket,
    #[serde(default)]
    pub ranking: Option<u64>,
}

impl ProblemStats {
    pub fn bucket(&self, difficulty: Difficulty) -> DifficultyBucket {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Sum of solved counts across tiers
    pub fn total_solved(&self) -> u64 {
        Difficulty::ALL
            .iter()
            .fold(0u64, |acc, &d| acc.saturating_add(self.bucket(d).solved))
    }

    /// Sum of problem counts across tiers
    pub fn total_problems(&self) -> u64 {
        Difficulty::ALL
            .iter()
            .fold(0u64, |acc, &d| acc.saturating_add(self.bucket(d).total))
    }

    /// Ranking, only when it is a positive number
    pub fn visible_ranking(&self) -> Option<u64> {
        self.ranking.filter(|&r| r > 0)
    }
}

/// One recent submission, most recent first in the containing list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionEntry {
    pub title: String,
    /// Submission time in milliseconds since the Unix epoch
    #[serde(rename = "time")]
    pub timestamp_millis: i64,
    pub status: String,
    pub lang: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub id: String,
}

/// Everything the card renderer needs about one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeetCodeStats {
    pub profile: ProfileStats,
    pub problem: ProblemStats,
    #[serde(default)]
    pub submissions: Vec<SubmissionEntry>,
}
