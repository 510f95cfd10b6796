//! Data model shared by both upstream clients.

use serde::{Deserialize, Serialize};

const API_ID_PREFIX: &str = "http://api.ft.com/things/";
const FT_ID_PREFIX: &str = "http://www.ft.com/thing/";

/// An external-system identifier for a concept, scoped by the issuing
/// authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "identifierValue")]
    pub identifier_value: String,
    pub authority: String,
}

/// A canonical concept record as returned by the concept search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub concept_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pref_label: Option<String>,
    #[serde(rename = "isFTAuthor", skip_serializing_if = "Option::is_none")]
    pub is_ft_author: Option<bool>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_deprecated: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concordances: Vec<Identifier>,
}

/// A recorded equivalence between an external identifier and a canonical
/// concept, as returned by the public concordances API.
#[derive(Debug, Clone, Deserialize)]
pub struct Concordance {
    pub concept: Concept,
    pub identifier: Identifier,
}

/// Strip a recognized "thing" URI prefix from a concept id, yielding the
/// canonical identifier. Ids under neither prefix are unresolvable.
pub fn strip_thing_prefix(concept_id: &str) -> Option<&str> {
    concept_id
        .strip_prefix(API_ID_PREFIX)
        .or_else(|| concept_id.strip_prefix(FT_ID_PREFIX))
}
