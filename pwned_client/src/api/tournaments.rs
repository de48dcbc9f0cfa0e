use crate::client::{PwnedClient, json_body};
use crate::error::Result;
use crate::models::{Bracket, Competition, CreateTournament, TournamentTemplate};
use crate::signing::RequestDescriptor;
use crate::transport::Transport;

impl<T: Transport> PwnedClient<T> {
    /// Create a tournament
    pub async fn create_tournament(&mut self, tournament: &CreateTournament) -> Result<Competition> {
        let descriptor = json_body(RequestDescriptor::post("tournaments"), tournament)?;
        self.call(descriptor).await
    }

    /// Brackets of a tournament (`group`, `winner`, `loser`, `final`, ...),
    /// each with its rounds
    pub async fn get_tournament_brackets(&mut self, tournament_id: u64) -> Result<Vec<Bracket>> {
        self.call(RequestDescriptor::get(format!(
            "tournaments/{tournament_id}/brackets"
        )))
        .await
    }

    /// Bracket templates usable when creating a tournament
    pub async fn get_tournament_templates(&mut self) -> Result<Vec<TournamentTemplate>> {
        self.call(RequestDescriptor::get("tournaments/templates"))
            .await
    }
}
