//! Record domain types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single hit returned by the record store
///
/// Ranked lookups return hits ordered best-first; `score` is only populated
/// for those. Properties are carried opaquely since the helpers never
/// interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordHit {
    pub id: Uuid,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

/// Outcome of resolving a display name to a stored record
///
/// `NotFound` is a legitimate terminal outcome, not an error; callers must
/// check for it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// A record matched one of the strategies
    Found(Uuid),
    /// No strategy produced a match
    NotFound,
}

impl Resolution {
    /// Whether a record was found
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// The matched record id, if any
    pub fn record_id(&self) -> Option<Uuid> {
        match self {
            Resolution::Found(id) => Some(*id),
            Resolution::NotFound => None,
        }
    }
}
