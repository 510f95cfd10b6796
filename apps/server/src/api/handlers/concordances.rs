//! The `/internalconcordances` resource.
//!
//! Concords the requested identifiers via the public concordances API,
//! fetches the full concept model for the resulting canonical ids from the
//! concept search API, and reassembles a response keyed by the caller's
//! original identifiers.

use crate::{
    error::{Error, Result},
    request_context::RequestContext,
    state::AppState,
};
use axum::{
    extract::{RawQuery, State},
    Extension, Json,
};
use concord_concepts::{Concept, ConceptMap, ConcordanceMap};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct InternalConcordancesResponse {
    pub concepts: HashMap<String, Concept>,
}

/// Normalized request parameters.
#[derive(Debug, PartialEq, Eq)]
struct ValidatedQuery {
    ids: Vec<String>,
    authority: String,
    include_deprecated: bool,
}

pub async fn internal_concordances(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    RawQuery(query): RawQuery,
) -> Result<Json<InternalConcordancesResponse>> {
    let params = parse_query(query.as_deref().unwrap_or(""));
    let validated = validate(&params)?;

    let identifiers = state
        .concordances
        .get_concordances(&ctx.request_id, &validated.authority, &validated.ids)
        .await
        .map_err(|err| {
            if err.is_input() {
                Error::EmptyIds
            } else {
                Error::ConcordancesUnavailable(err)
            }
        })?;

    // All requested concepts were either deleted or unknown.
    if identifiers.is_empty() {
        return Ok(Json(InternalConcordancesResponse {
            concepts: HashMap::new(),
        }));
    }

    let canonical_ids: Vec<String> = identifiers.keys().cloned().collect();
    let concepts = state
        .search
        .search_by_ids(&ctx.request_id, &canonical_ids)
        .await
        .map_err(Error::SearchUnavailable)?;

    let merged = merge_concordances_and_concepts(&validated, identifiers, concepts);

    Ok(Json(InternalConcordancesResponse { concepts: merged }))
}

/// Decode the raw query string into ordered (name, value) pairs. Parameters
/// may repeat; cardinality rules are enforced in [`validate`].
fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn validate(params: &[(String, String)]) -> Result<ValidatedQuery> {
    let values = |name: &str| -> Vec<&str> {
        params
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    };

    let ids: Vec<String> = values("ids").into_iter().map(String::from).collect();
    if ids.is_empty() {
        return Err(Error::MissingIds);
    }

    let authority_values = values("authority");
    let authority = match authority_values.as_slice() {
        [] => String::new(),
        [value] if value.is_empty() => return Err(Error::EmptyAuthority),
        [value] => value.to_string(),
        _ => return Err(Error::TooManyAuthorityValues),
    };

    let include_deprecated_values = values("include_deprecated");
    let include_deprecated = match include_deprecated_values.as_slice() {
        [] => false,
        [value] => match value.to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => return Err(Error::InvalidIncludeDeprecated),
        },
        _ => return Err(Error::TooManyIncludeDeprecatedValues),
    };

    Ok(ValidatedQuery {
        ids,
        authority,
        include_deprecated,
    })
}

/// Merge the concorded identifiers with the searched concepts, keyed by the
/// identifiers the caller asked for.
///
/// Each concept's concordance list is overwritten wholesale from the
/// concordance map, so the response lists everything concorded to the
/// concept, not just the requested identifiers. A single concept fans out to
/// every requested identifier that concords to it; identifiers the caller
/// never asked about do not produce entries.
fn merge_concordances_and_concepts(
    query: &ValidatedQuery,
    identifiers: ConcordanceMap,
    concepts: ConceptMap,
) -> HashMap<String, Concept> {
    let mut merged = HashMap::new();

    for (canonical_id, mut concept) in concepts {
        if concept.is_deprecated && !query.include_deprecated {
            continue;
        }

        let concordances = identifiers.get(&canonical_id).cloned().unwrap_or_default();
        concept.concordances = concordances.clone();

        for identifier in &concordances {
            if query
                .ids
                .iter()
                .any(|requested| *requested == identifier.identifier_value)
            {
                merged.insert(identifier.identifier_value.clone(), concept.clone());
            }
        }
    }

    merged
}
