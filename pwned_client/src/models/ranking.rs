//! Ranking entries and ladder standings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::signup::{Signup, SignupInput};

/// A score submitted to a ranking.
///
/// Identify the entity by `signup_id`, `remote_id`, or an inline `signup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntryInput {
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup: Option<SignupInput>,
}

impl RankingEntryInput {
    pub fn for_signup(signup: SignupInput, value: i64) -> Self {
        Self {
            value,
            signup: Some(signup),
            ..Default::default()
        }
    }
}

/// Position of an entry within its ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionInfo {
    pub position: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub id: u64,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub signup: Option<Signup>,
    #[serde(default)]
    pub position_info: Option<PositionInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One row of a ladder ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderRankingEntry {
    #[serde(default)]
    pub score: Option<f64>,
    /// Change since the last match; empty until one is played
    #[serde(default)]
    pub score_delta: Option<f64>,
    #[serde(default)]
    pub signup: Option<Signup>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_input_with_inline_signup() {
        let input = RankingEntryInput::for_signup(
            SignupInput {
                remote_id: Some(203),
                ..SignupInput::new("Foobar 203")
            },
            1234566,
        );

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"value": 1234566, "signup": {"name": "Foobar 203", "remoteId": 203}})
        );
    }

    #[test]
    fn test_entry_position_info() {
        let entry: RankingEntry = serde_json::from_value(json!({
            "id": 5,
            "value": 1234567,
            "positionInfo": {"position": 1, "total": 2}
        }))
        .unwrap();
        assert_eq!(entry.position_info, Some(PositionInfo { position: 1, total: 2 }));
    }
}
