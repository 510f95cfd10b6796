//! Client for the public concordances API.

use crate::error::{decode_response_error, Result};
use crate::models::{strip_thing_prefix, Concordance};
use crate::{validate_ids, ConcordanceMap, HealthCheck, REQUEST_ID_HEADER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const CONCEPT_ID_PARAM: &str = "conceptId";
const AUTHORITY_PARAM: &str = "authority";
const IDENTIFIER_VALUE_PARAM: &str = "identifierValue";

/// Empty authority, meaning ids are concorded as raw concept ids.
pub const NO_AUTHORITY: &str = "";

/// Client for the public concordances API.
pub struct ConcordancesClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ConcordancesResponse {
    #[serde(default)]
    concordances: Vec<Concordance>,
}

impl ConcordancesClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Look up concordances for the given ids, keyed by canonical concept
    /// identifier.
    ///
    /// With [`NO_AUTHORITY`] each id is queried as a raw concept id;
    /// otherwise each id is treated as an identifier value within the given
    /// authority. Records whose concept id is under neither recognized URI
    /// prefix are dropped.
    pub async fn get_concordances(
        &self,
        request_id: &str,
        authority: &str,
        ids: &[String],
    ) -> Result<ConcordanceMap> {
        validate_ids(ids)?;

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(ids.len() + 1);
        let id_param = if authority == NO_AUTHORITY {
            CONCEPT_ID_PARAM
        } else {
            query.push((AUTHORITY_PARAM, authority));
            IDENTIFIER_VALUE_PARAM
        };
        for id in ids {
            query.push((id_param, id.as_str()));
        }

        let resp = self
            .client
            .get(format!("{}/concordances", self.base_url))
            .query(&query)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(REQUEST_ID_HEADER, request_id)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(decode_response_error(resp).await);
        }

        let body = resp.text().await?;
        let parsed: ConcordancesResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            request_id,
            concordances = parsed.concordances.len(),
            "Fetched concordances"
        );

        Ok(concordances_to_identifiers(parsed.concordances))
    }
}

fn concordances_to_identifiers(concordances: Vec<Concordance>) -> ConcordanceMap {
    let mut identifiers = ConcordanceMap::new();
    for concordance in concordances {
        if let Some(canonical_id) = strip_thing_prefix(&concordance.concept.id) {
            identifiers
                .entry(canonical_id.to_string())
                .or_default()
                .push(concordance.identifier);
        }
    }
    identifiers
}

#[async_trait::async_trait]
impl HealthCheck for ConcordancesClient {
    async fn health_check(&self) -> Result<String> {
        let resp = self
            .client
            .get(format!("{}/__gtg", self.base_url))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(decode_response_error(resp).await);
        }

        Ok("Public Concordances API is good to go".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Concept, Identifier};

    fn concordance(concept_id: &str, authority: &str, value: &str) -> Concordance {
        Concordance {
            concept: Concept {
                id: concept_id.to_string(),
                ..Concept::default()
            },
            identifier: Identifier {
                identifier_value: value.to_string(),
                authority: authority.to_string(),
            },
        }
    }

    #[test]
    fn groups_identifiers_by_canonical_id() {
        let map = concordances_to_identifiers(vec![
            concordance("http://api.ft.com/things/uuid-a", "TME", "tme-1"),
            concordance("http://www.ft.com/thing/uuid-a", "UPP", "uuid-a"),
            concordance("http://api.ft.com/things/uuid-b", "TME", "tme-2"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map["uuid-a"].len(), 2);
        assert_eq!(map["uuid-a"][0].identifier_value, "tme-1");
        assert_eq!(map["uuid-a"][1].identifier_value, "uuid-a");
        assert_eq!(map["uuid-b"].len(), 1);
    }

    #[test]
    fn drops_records_with_unrecognized_concept_ids() {
        let map = concordances_to_identifiers(vec![concordance(
            "http://example.com/uuid-a",
            "TME",
            "tme-1",
        )]);
        assert!(map.is_empty());
    }

    #[test]
    fn preserves_duplicate_identifiers() {
        let map = concordances_to_identifiers(vec![
            concordance("http://www.ft.com/thing/uuid-a", "TME", "tme-1"),
            concordance("http://www.ft.com/thing/uuid-a", "TME", "tme-1"),
        ]);
        assert_eq!(map["uuid-a"].len(), 2);
    }
}
