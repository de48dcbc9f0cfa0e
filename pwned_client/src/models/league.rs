//! League tables, scoring models and championship round results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::signup::Signup;

/// Scoring models apply to either plain leagues or championships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringModelKind {
    League,
    Championship,
}

impl fmt::Display for ScoringModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringModelKind::League => f.write_str("league"),
            ScoringModelKind::Championship => f.write_str("championship"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringModel {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: Option<ScoringModelKind>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub win_points: Option<i64>,
    #[serde(default)]
    pub draw_points: Option<i64>,
    #[serde(default)]
    pub loss_points: Option<i64>,
    /// Points per finishing position keyed by the position ("1", "2", ...),
    /// championships only
    #[serde(default)]
    pub position_points: Option<BTreeMap<String, i64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields for creating or updating a scoring model.
///
/// `kind` and `name` are required on creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringModelInput {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ScoringModelKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_points: Option<BTreeMap<String, i64>>,
}

/// One row of a league table or group standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub signup: Option<Signup>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub draws: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Build a `position_points` map from points listed in position order
pub fn position_points(points: &[i64]) -> BTreeMap<String, i64> {
    points
        .iter()
        .enumerate()
        .map(|(idx, points)| ((idx + 1).to_string(), *points))
        .collect()
}

/// Placement of one signup in a championship round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub signup_id: u64,
    /// 1-based finishing position
    pub position: u32,
    pub score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_position_points_keys() {
        let input = ScoringModelInput {
            kind: Some(ScoringModelKind::Championship),
            name: Some("Top three".to_string()),
            position_points: Some(position_points(&[30, 15, 5])),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "type": "championship",
                "name": "Top three",
                "positionPoints": {"1": 30, "2": 15, "3": 5}
            })
        );

        let model: ScoringModel = serde_json::from_value(json!({
            "id": 2,
            "type": "championship",
            "positionPoints": {"1": 30, "2": 15}
        }))
        .unwrap();
        assert_eq!(model.position_points.unwrap().get("1"), Some(&30));
    }

    #[test]
    fn test_table_entry() {
        let entry: TableEntry = serde_json::from_value(json!({
            "position": 1,
            "signup": {"id": 4, "name": "A"},
            "wins": 1, "draws": 0, "losses": 0,
            "score": 3, "points": 3,
            "retired": false
        }))
        .unwrap();
        assert_eq!(entry.points, Some(3));
        assert_eq!(entry.extra.get("retired"), Some(&json!(false)));
    }
}
