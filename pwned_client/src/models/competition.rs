//! Competitions: tournaments, leagues, ladders and rankings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::general::Game;

/// Kind of competition; selects the path prefix of generic endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionType {
    Tournament,
    League,
    Ladder,
    Ranking,
}

impl CompetitionType {
    /// Collection segment used in resource paths (`tournaments`, ...)
    pub fn path_segment(&self) -> &'static str {
        match self {
            CompetitionType::Tournament => "tournaments",
            CompetitionType::League => "leagues",
            CompetitionType::Ladder => "ladders",
            CompetitionType::Ranking => "rankings",
        }
    }

    /// Path of one competition, e.g. `leagues/12`
    pub fn resource(&self, competition_id: u64) -> String {
        format!("{}/{}", self.path_segment(), competition_id)
    }
}

impl fmt::Display for CompetitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompetitionType::Tournament => "tournament",
            CompetitionType::League => "league",
            CompetitionType::Ladder => "ladder",
            CompetitionType::Ranking => "ranking",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Ready,
    Live,
    Finished,
    Deleted,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentType {
    SingleElim,
    DoubleElim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueType {
    League,
    Championship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LadderScoringModel {
    Glicko2,
    Elo,
}

/// Whether a ranking keeps every entry or only the best per signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingType {
    All,
    Unique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingDirection {
    Ascending,
    Descending,
}

/// Base information about any competition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: Option<CompetitionType>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<CompetitionStatus>,
    #[serde(default)]
    pub game: Option<Game>,
    #[serde(default)]
    pub players_on_team: Option<u32>,
    #[serde(default)]
    pub team_count: Option<u32>,
    #[serde(default)]
    pub round_count: Option<u32>,
    #[serde(default)]
    pub round_current: Option<u32>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub group_size: Option<u32>,
    #[serde(default)]
    pub group_count: Option<u32>,
    #[serde(default)]
    pub finished_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields accepted when creating a tournament
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournament {
    pub name: String,
    /// Bracket template, see `get_tournament_templates`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_type: Option<TournamentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players_on_team: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_count: Option<u32>,
    /// `norwegian` or `english`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<u32>,
    /// Move teams on as soon as a result is entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<u64>,
}

impl CreateTournament {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Fields accepted when creating a league or championship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeague {
    pub league_type: LeagueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players_on_team: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<u64>,
    /// See `get_league_scoring_models`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_model_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_count: Option<u32>,
    /// Create several identical leagues in one call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<u64>,
}

impl CreateLeague {
    pub fn new(league_type: LeagueType) -> Self {
        Self {
            league_type,
            name: None,
            game_id: None,
            players_on_team: None,
            country_id: None,
            scoring_model_id: None,
            team_count: None,
            league_count: None,
            rounds: None,
            language: None,
            description: None,
            bundle_id: None,
        }
    }
}

/// Fields accepted when creating a ladder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLadder {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_model: Option<LadderScoringModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players_on_team: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hours of inactivity before a signup is deactivated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_deactivate_delay: Option<u32>,
    /// Hours of inactivity before penalties start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_penalty_delay: Option<u32>,
    /// Hours between penalties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_penalty_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_penalty_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<u64>,
}

impl CreateLadder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Fields accepted when creating a ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRanking {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players_on_team: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_type: Option<RankingType>,
    /// What the entry value measures, e.g. `time` or `score`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_direction: Option<RankingDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<u64>,
}

impl CreateRanking {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Changes to an existing competition.
///
/// Tournament-only fields (`tournament_type`, `team_count`, `group_size`,
/// `group_count`) may only change before the tournament starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players_on_team: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current round; step by one to advance or roll back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompetitionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_type: Option<TournamentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_count: Option<u32>,
}

impl CompetitionUpdate {
    pub fn status(status: CompetitionStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
