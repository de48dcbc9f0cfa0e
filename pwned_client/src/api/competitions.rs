//! Operations shared by every competition type.

use serde_json::Value;

use super::optional_segment;
use crate::client::{PwnedClient, json_body};
use crate::error::Result;
use crate::models::signup::ReplaceSignup;
use crate::models::{
    Competition, CompetitionStatus, CompetitionType, CompetitionUpdate, Match, MatchUpdate, Round,
    Signup, SignupFetchMode, SignupInput, WalkoverCount,
};
use crate::signing::RequestDescriptor;
use crate::transport::Transport;

impl<T: Transport> PwnedClient<T> {
    /// Base information for a competition
    pub async fn get_competition(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
    ) -> Result<Competition> {
        self.call(RequestDescriptor::get(kind.resource(competition_id)))
            .await
    }

    /// Update a competition: rename it, change its round, start or delete it.
    pub async fn update_competition(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        update: &CompetitionUpdate,
    ) -> Result<Competition> {
        let descriptor = json_body(RequestDescriptor::post(kind.resource(competition_id)), update)?;
        self.call(descriptor).await
    }

    /// Set the competition live
    pub async fn start_competition(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
    ) -> Result<Competition> {
        self.update_competition(
            kind,
            competition_id,
            &CompetitionUpdate::status(CompetitionStatus::Live),
        )
        .await
    }

    /// Rounds of a competition, optionally limited to one tournament bracket
    pub async fn get_rounds(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        bracket: Option<&str>,
    ) -> Result<Vec<Round>> {
        let bracket = bracket.map(|b| format!("{b}/")).unwrap_or_default();
        self.call(RequestDescriptor::get(format!(
            "{}/{bracket}rounds",
            kind.resource(competition_id)
        )))
        .await
    }

    /// One round of a competition, optionally within a tournament bracket
    pub async fn get_round(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        round_number: u32,
        bracket: Option<&str>,
    ) -> Result<Round> {
        let bracket = bracket.map(|b| format!("{b}/")).unwrap_or_default();
        self.call(RequestDescriptor::get(format!(
            "{}/{bracket}rounds/{round_number}",
            kind.resource(competition_id)
        )))
        .await
    }

    /// Signups of a competition; without a mode the server returns accepted
    /// signups that are not on the waiting list
    pub async fn get_signups(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        fetch_mode: Option<SignupFetchMode>,
    ) -> Result<Vec<Signup>> {
        self.call(RequestDescriptor::get(format!(
            "{}/signups{}",
            kind.resource(competition_id),
            optional_segment(fetch_mode)
        )))
        .await
    }

    /// Submit one or more signups in a single call
    pub async fn add_signups(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        signups: &[SignupInput],
    ) -> Result<Value> {
        let descriptor = json_body(
            RequestDescriptor::post(format!("{}/signups", kind.resource(competition_id))),
            signups,
        )?;
        self.request(descriptor).await
    }

    /// Remove a signup by its server-side id
    pub async fn remove_signup(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        signup_id: u64,
    ) -> Result<Value> {
        self.request(RequestDescriptor::delete(format!(
            "{}/signups/{signup_id}",
            kind.resource(competition_id)
        )))
        .await
    }

    /// Put `replace_with_signup_id` into every unfinished match of `signup_id`
    pub async fn replace_signup(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        signup_id: u64,
        replace_with_signup_id: u64,
    ) -> Result<bool> {
        let body = ReplaceSignup {
            replace_signup_id: signup_id,
            replace_with_signup_id,
        };
        let descriptor = json_body(
            RequestDescriptor::post(format!("{}/signups/replace", kind.resource(competition_id))),
            &body,
        )?;
        self.call(descriptor).await
    }

    pub async fn get_match(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        match_id: u64,
    ) -> Result<Match> {
        self.call(RequestDescriptor::get(format!(
            "{}/matches/{match_id}",
            kind.resource(competition_id)
        )))
        .await
    }

    /// Report a match result or walkover
    pub async fn update_match(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        match_id: u64,
        update: &MatchUpdate,
    ) -> Result<Value> {
        let descriptor = json_body(
            RequestDescriptor::post(format!(
                "{}/matches/{match_id}",
                kind.resource(competition_id)
            )),
            update,
        )?;
        self.request(descriptor).await
    }

    /// Move signups without an opponent in `round_id` on to the next round
    pub async fn move_walkovers_to_next_round(
        &mut self,
        kind: CompetitionType,
        competition_id: u64,
        round_id: u32,
    ) -> Result<WalkoverCount> {
        self.call(RequestDescriptor::post(format!(
            "{}/rounds/{round_id}/handlewalkovers",
            kind.resource(competition_id)
        )))
        .await
    }
}
