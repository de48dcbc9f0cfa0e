//! Endpoint bindings.
//!
//! Each submodule adds one group of typed methods to [`crate::PwnedClient`].
//! Every method performs a single signed round-trip through
//! [`crate::PwnedClient::request`].

mod bundles;
mod competitions;
mod general;
mod ladders;
mod leagues;
mod rankings;
mod tournaments;

pub use ladders::{DEFAULT_LADDER_HITS, DEFAULT_LADDER_OFFSET};

/// Optional `/{segment}` path suffix
pub(crate) fn optional_segment(segment: Option<impl std::fmt::Display>) -> String {
    segment.map(|s| format!("/{s}")).unwrap_or_default()
}
