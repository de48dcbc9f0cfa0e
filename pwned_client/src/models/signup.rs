//! Signups: the teams or players entered into a competition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Filter for `get_signups`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignupFetchMode {
    /// Accepted and not on the waiting list (the server default)
    Normal,
    /// Accepted and on the waiting list
    Waiting,
    /// Not accepted
    NotAccepted,
    All,
}

impl SignupFetchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupFetchMode::Normal => "normal",
            SignupFetchMode::Waiting => "waiting",
            SignupFetchMode::NotAccepted => "notaccepted",
            SignupFetchMode::All => "all",
        }
    }
}

impl fmt::Display for SignupFetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signup to submit. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_accepted: Option<bool>,
    /// Signups are placed on the waiting list anyway when the competition is full
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_waiting_list: Option<bool>,
    /// IRC nick, gamer tag or similar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clan_id: Option<u64>,
    /// Caller-side id echoed back in every response containing this signup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<u64>,
}

impl SignupInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A signup as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub has_server: Option<bool>,
    #[serde(default)]
    pub is_accepted: Option<bool>,
    #[serde(default)]
    pub on_waiting_list: Option<bool>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub seeding: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient_id::deserialize")]
    pub clan_id: Option<u64>,
    #[serde(default, deserialize_with = "super::lenient_id::deserialize")]
    pub remote_id: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `signups/replace`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplaceSignup {
    pub replace_signup_id: u64,
    pub replace_with_signup_id: u64,
}
