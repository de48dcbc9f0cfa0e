use crate::client::{PwnedClient, json_body};
use crate::error::Result;
use crate::models::{Competition, CreateLadder, LadderRankingEntry};
use crate::signing::RequestDescriptor;
use crate::transport::Transport;

pub const DEFAULT_LADDER_OFFSET: u32 = 0;
pub const DEFAULT_LADDER_HITS: u32 = 150;

impl<T: Transport> PwnedClient<T> {
    pub async fn create_ladder(&mut self, ladder: &CreateLadder) -> Result<Competition> {
        let descriptor = json_body(RequestDescriptor::post("ladders"), ladder)?;
        self.call(descriptor).await
    }

    /// Current ranking of a ladder, `hits` rows starting at `offset`.
    ///
    /// The paging parameters travel in the query string and are part of the
    /// signed message.
    pub async fn get_ladder_ranking(
        &mut self,
        ladder_id: u64,
        offset: u32,
        hits: u32,
    ) -> Result<Vec<LadderRankingEntry>> {
        let descriptor = RequestDescriptor::get(format!("ladders/{ladder_id}/ranking"))
            .with_query("offset", offset)
            .with_query("hits", hits);
        self.call(descriptor).await
    }
}
