use crate::client::{PwnedClient, json_body};
use crate::error::Result;
use crate::models::{Competition, CreateRanking, OneOrMany, RankingEntry, RankingEntryInput};
use crate::signing::RequestDescriptor;
use crate::transport::Transport;
use serde_json::Value;

impl<T: Transport> PwnedClient<T> {
    pub async fn create_ranking(&mut self, ranking: &CreateRanking) -> Result<Competition> {
        let descriptor = json_body(RequestDescriptor::post("rankings"), ranking)?;
        self.call(descriptor).await
    }

    /// Add a score entry to a ranking.
    ///
    /// For unique rankings the returned entry reflects the signup's current
    /// best; for all-entry rankings it describes the submitted entry.
    pub async fn add_ranking_entry(
        &mut self,
        ranking_id: u64,
        entry: &RankingEntryInput,
    ) -> Result<RankingEntry> {
        let descriptor = json_body(
            RequestDescriptor::post(format!("rankings/{ranking_id}/entries")),
            entry,
        )?;
        self.call(descriptor).await
    }

    pub async fn remove_ranking_entry(&mut self, ranking_id: u64, entry_id: u64) -> Result<Value> {
        self.request(RequestDescriptor::delete(format!(
            "rankings/{ranking_id}/entries/{entry_id}"
        )))
        .await
    }

    pub async fn get_ranking_entry(&mut self, ranking_id: u64, entry_id: u64) -> Result<RankingEntry> {
        self.call(RequestDescriptor::get(format!(
            "rankings/{ranking_id}/entries/{entry_id}"
        )))
        .await
    }

    /// All entries of a ranking, or with `remote_id` the best entry
    /// registered for that remote id
    pub async fn get_ranking_entries(
        &mut self,
        ranking_id: u64,
        remote_id: Option<u64>,
    ) -> Result<OneOrMany<RankingEntry>> {
        let subpath = remote_id
            .map(|id| format!("/remoteId/{id}"))
            .unwrap_or_default();
        self.call(RequestDescriptor::get(format!(
            "rankings/{ranking_id}/entries{subpath}"
        )))
        .await
    }
}
