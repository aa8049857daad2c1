//! Route definition types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Structured match criteria for a route.
///
/// The synchronizer only checks structural validity; interpreting the
/// criteria against incoming requests is the dispatch engine's job.
/// An empty predicate matches everything (wildcard route).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PredicateSpec {
    /// Host header to match (exact match).
    pub host: Option<String>,

    /// Path prefix to match.
    pub path: Option<String>,

    /// Header name/value pairs that must all be present.
    pub headers: BTreeMap<String, String>,
}

impl PredicateSpec {
    /// Returns true if no criteria are set.
    pub fn is_wildcard(&self) -> bool {
        self.host.is_none() && self.path.is_none() && self.headers.is_empty()
    }
}

/// A single routing rule: match criteria, a destination, and an ordered
/// list of transformation filters carried through opaquely.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    /// Identifier, unique within a table.
    pub id: String,

    /// How incoming requests are matched.
    pub predicate: PredicateSpec,

    /// Where matching requests are forwarded.
    pub destination: Url,

    /// Transformation specs, order-preserving, passed through unmodified.
    pub filters: Vec<serde_json::Value>,
}
