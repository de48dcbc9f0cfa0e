//! Typed request and response payloads.
//!
//! Request structs skip unset optional fields. Response structs keep every
//! field they do not model in a flattened `extra` map.

pub mod bundle;
pub mod competition;
pub mod general;
pub mod league;
pub mod ranking;
pub mod round;
pub mod signup;

pub use bundle::{Bundle, BundleInput};
pub use competition::{
    Competition, CompetitionStatus, CompetitionType, CompetitionUpdate, CreateLadder,
    CreateLeague, CreateRanking, CreateTournament, LadderScoringModel, LeagueType,
    RankingDirection, RankingType, TournamentType,
};
pub use general::{Country, Game};
pub use league::{
    RoundResult, ScoringModel, ScoringModelInput, ScoringModelKind, TableEntry, position_points,
};
pub use ranking::{LadderRankingEntry, PositionInfo, RankingEntry, RankingEntryInput};
pub use round::{
    Bracket, Group, Match, MatchUpdate, Round, Stage, TournamentTemplate, WalkoverCount,
    WalkoverSide,
};
pub use signup::{Signup, SignupFetchMode, SignupInput};

use serde::{Deserialize, Serialize};

/// A result that is either a single item or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Lenient decoding for ids the server returns either as numbers or as
/// numeric strings.
pub(crate) mod lenient_id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(n)) => Ok(Some(n)),
            Some(Raw::Text(s)) if s.is_empty() => Ok(None),
            Some(Raw::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
