//! Rounds, matches and tournament brackets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::league::TableEntry;
use super::signup::Signup;

/// A single match between two signups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u64,
    #[serde(default)]
    pub signup: Option<Signup>,
    #[serde(default)]
    pub signup_opponent: Option<Signup>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub score_opponent: Option<i64>,
    #[serde(default)]
    pub is_walkover: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which side of a match gets a walkover win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalkoverSide {
    Signup,
    SignupOpponent,
}

/// A match result to submit; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_opponent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkover: Option<WalkoverSide>,
}

impl MatchUpdate {
    pub fn score(score: i64, score_opponent: i64) -> Self {
        Self {
            score: Some(score),
            score_opponent: Some(score_opponent),
            walkover: None,
        }
    }

    pub fn walkover(side: WalkoverSide) -> Self {
        Self {
            walkover: Some(side),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Preliminary group with its current standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub standing: Vec<TableEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One round of a competition.
///
/// Depending on the competition type matches are listed directly or per
/// stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub round_number: Option<u32>,
    /// `PRELIMINARY`, `QUARTERFINALS`, `SEMIFINALS`, `FINAL`, ...
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Round {
    /// Matches listed directly on the round plus those of every stage
    pub fn all_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches
            .iter()
            .chain(self.stages.iter().flat_map(|s| s.matches.iter()))
    }
}

/// A tournament bracket (`group`, `winner`, `loser`, `final`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub round_count: Option<u32>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A bracket layout that can be used as `template` when creating a tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentTemplate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of moving walkovers to the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkoverCount {
    pub count: u32,
}
