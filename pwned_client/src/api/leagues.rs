//! League-specific endpoints: tables, scoring models and championship results.

use serde_json::Value;

use super::optional_segment;
use crate::client::{PwnedClient, json_body};
use crate::error::Result;
use crate::models::{
    Competition, CreateLeague, OneOrMany, RoundResult, ScoringModel, ScoringModelInput,
    ScoringModelKind, TableEntry,
};
use crate::signing::RequestDescriptor;
use crate::transport::Transport;

impl<T: Transport> PwnedClient<T> {
    /// Create a league; with `league_count` > 1 several leagues are returned
    pub async fn create_league(&mut self, league: &CreateLeague) -> Result<OneOrMany<Competition>> {
        let descriptor = json_body(RequestDescriptor::post("leagues"), league)?;
        self.call(descriptor).await
    }

    /// Current table of a league, best position first
    pub async fn get_league_table(&mut self, league_id: u64) -> Result<Vec<TableEntry>> {
        self.call(RequestDescriptor::get(format!("leagues/{league_id}/table")))
            .await
    }

    /// Retire a signup: it keeps its results but drops to the bottom of the table
    pub async fn retire_league_signup(&mut self, league_id: u64, signup_id: u64) -> Result<Value> {
        self.request(RequestDescriptor::post(format!(
            "leagues/{league_id}/signups/{signup_id}/retire"
        )))
        .await
    }

    /// Scoring models, optionally only those for one kind of league
    pub async fn get_league_scoring_models(
        &mut self,
        kind: Option<ScoringModelKind>,
    ) -> Result<Vec<ScoringModel>> {
        self.call(RequestDescriptor::get(format!(
            "leagues/scoringmodels{}",
            optional_segment(kind)
        )))
        .await
    }

    pub async fn get_league_scoring_model(&mut self, scoring_model_id: u64) -> Result<ScoringModel> {
        self.call(RequestDescriptor::get(format!(
            "leagues/scoringmodels/{scoring_model_id}"
        )))
        .await
    }

    /// Create a scoring model; `kind` and `name` are required
    pub async fn create_league_scoring_model(
        &mut self,
        scoring_model: &ScoringModelInput,
    ) -> Result<ScoringModel> {
        let descriptor = json_body(RequestDescriptor::post("leagues/scoringmodels"), scoring_model)?;
        self.call(descriptor).await
    }

    pub async fn update_league_scoring_model(
        &mut self,
        scoring_model_id: u64,
        scoring_model: &ScoringModelInput,
    ) -> Result<ScoringModel> {
        let descriptor = json_body(
            RequestDescriptor::post(format!("leagues/scoringmodels/{scoring_model_id}")),
            scoring_model,
        )?;
        self.call(descriptor).await
    }

    /// Deactivate a scoring model. Leagues already using it keep it.
    pub async fn delete_league_scoring_model(&mut self, scoring_model_id: u64) -> Result<Value> {
        self.request(RequestDescriptor::delete(format!(
            "leagues/scoringmodels/{scoring_model_id}"
        )))
        .await
    }

    /// Submit (or resubmit) the placements of one championship round
    pub async fn update_league_round_results(
        &mut self,
        league_id: u64,
        round_number: u32,
        results: &[RoundResult],
    ) -> Result<Value> {
        let descriptor = json_body(
            RequestDescriptor::post(format!("leagues/{league_id}/rounds/{round_number}/results")),
            results,
        )?;
        self.request(descriptor).await
    }
}
