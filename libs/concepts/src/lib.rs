//! Clients for the concept resolution upstreams.
//!
//! This crate provides async clients for the two services the internal
//! concordances pipeline depends on:
//!
//! - [`ConcordancesClient`] — maps external identifiers (optionally scoped by
//!   an issuing authority) to canonical concept identifiers.
//! - [`SearchClient`] — fetches full concept records for canonical
//!   identifiers.
//!
//! Both clients share the same input validation, error taxonomy and
//! canonical-id handling: concept ids returned by the upstreams are reduced
//! to their canonical form via [`strip_thing_prefix`], and records whose id
//! is under neither recognized URI prefix are dropped as upstream
//! data-quality noise.

pub mod concordances;
pub mod error;
pub mod models;
pub mod search;

pub use concordances::{ConcordancesClient, NO_AUTHORITY};
pub use error::{Error, Result};
pub use models::{strip_thing_prefix, Concept, Concordance, Identifier};
pub use search::SearchClient;

use std::collections::HashMap;

/// Canonical identifier -> identifiers concorded to it, in upstream response
/// order (duplicates preserved).
pub type ConcordanceMap = HashMap<String, Vec<Identifier>>;

/// Canonical identifier -> concept record. At most one record per id.
pub type ConceptMap = HashMap<String, Concept>;

/// User-Agent stamped on every outbound upstream request.
pub const USER_AGENT: &str = "UPP internal-concordances";

pub(crate) const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// A probe against an upstream's good-to-go endpoint.
///
/// Returns a human-readable message when the upstream is healthy.
#[async_trait::async_trait]
pub trait HealthCheck {
    async fn health_check(&self) -> Result<String>;
}

/// At least one non-empty id is required to query either upstream.
pub(crate) fn validate_ids(ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::NoIdentifiers);
    }

    if ids.iter().all(|id| id.is_empty()) {
        return Err(Error::AllIdentifiersEmpty);
    }

    Ok(())
}
