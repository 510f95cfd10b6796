//! Client for the concept search API.

use crate::error::{decode_response_error, Result};
use crate::models::{strip_thing_prefix, Concept};
use crate::{validate_ids, ConceptMap, HealthCheck, REQUEST_ID_HEADER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const IDS_PARAM: &str = "ids";

/// Client for the concept search API.
pub struct SearchClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    concepts: Vec<Concept>,
}

impl SearchClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch full concept records for the given canonical ids, keyed by
    /// canonical identifier.
    ///
    /// Concepts whose id is under neither recognized URI prefix are dropped.
    /// If the upstream ever returns duplicates, the last record wins.
    pub async fn search_by_ids(&self, request_id: &str, ids: &[String]) -> Result<ConceptMap> {
        validate_ids(ids)?;

        let query: Vec<(&str, &str)> = ids.iter().map(|id| (IDS_PARAM, id.as_str())).collect();

        let resp = self
            .client
            .get(format!("{}/concepts", self.base_url))
            .query(&query)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(REQUEST_ID_HEADER, request_id)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(decode_response_error(resp).await);
        }

        let body = resp.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            request_id,
            concepts = parsed.concepts.len(),
            "Fetched concepts"
        );

        let mut concepts = ConceptMap::new();
        for concept in parsed.concepts {
            if let Some(canonical_id) = strip_thing_prefix(&concept.id) {
                concepts.insert(canonical_id.to_string(), concept);
            }
        }

        Ok(concepts)
    }
}

#[async_trait::async_trait]
impl HealthCheck for SearchClient {
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

        Ok("Concept Search API is good to go".to_string())
    }
}
