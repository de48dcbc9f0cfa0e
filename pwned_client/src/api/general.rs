//! Lookup data and health check.

use crate::client::PwnedClient;
use crate::error::Result;
use crate::models::{Country, Game};
use crate::signing::RequestDescriptor;
use crate::transport::Transport;

impl<T: Transport> PwnedClient<T> {
    /// List the games competitions can be created for
    pub async fn get_games(&mut self) -> Result<Vec<Game>> {
        self.call(RequestDescriptor::get("games")).await
    }

    /// List the available countries and their settings
    pub async fn get_countries(&mut self) -> Result<Vec<Country>> {
        self.call(RequestDescriptor::get("countries")).await
    }

    /// Check that the API is reachable and the keys are accepted.
    ///
    /// Returns `"pong"` on success.
    pub async fn ping(&mut self) -> Result<String> {
        self.call(RequestDescriptor::get("ping")).await
    }
}
