//! Record query DTOs

use serde::{Deserialize, Serialize};

use crate::domain::record::RecordHit;

/// An abstract request to the record store
///
/// Variants are ordered by escalating looseness: exact equality is the cheap,
/// precise path; token containment recovers reordered partial names; fuzzy
/// ranking is the most forgiving and most expensive. The resolver walks them
/// in exactly this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchQuery {
    /// The field must equal the value exactly
    ExactEqual { field: String, value: String },
    /// Every whitespace-delimited token of the value must appear in the
    /// field, in any order
    ContainsAllTokens { field: String, value: String },
    /// Similarity/hybrid ranking over free text, best hits first
    FuzzyRank { query: String },
}

impl MatchQuery {
    pub fn exact_equal(field: impl Into<String>, value: impl Into<String>) -> Self {
        MatchQuery::ExactEqual {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains_all_tokens(field: impl Into<String>, value: impl Into<String>) -> Self {
        MatchQuery::ContainsAllTokens {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn fuzzy_rank(query: impl Into<String>) -> Self {
        MatchQuery::FuzzyRank {
            query: query.into(),
        }
    }

    /// Short human-readable label for progress notices
    pub fn describe(&self) -> &'static str {
        match self {
            MatchQuery::ExactEqual { .. } => "exact match",
            MatchQuery::ContainsAllTokens { .. } => "contains-all-tokens match",
            MatchQuery::FuzzyRank { .. } => "fuzzy ranked match",
        }
    }
}

/// Query envelope sent to the record store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: MatchQuery,
    pub limit: usize,
}

/// Query response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub hits: Vec<RecordHit>,
}
