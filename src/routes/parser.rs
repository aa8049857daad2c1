//! Routes document parsing.
//!
//! # Responsibilities
//! - Decode the JSON routes document
//! - Validate identifiers (present, non-empty, unique) and destinations
//! - Preserve declaration order
//!
//! # Design Decisions
//! - Serde handles syntactic decoding into raw entries; field-level
//!   validation happens explicitly so errors name the offending route
//! - All-or-nothing: one invalid entry fails the whole parse
//! - A document without a `routes` key is an empty table, not an error

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::routes::definition::{PredicateSpec, RouteDefinition};

/// Error type for routes document parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed routes document: {0}")]
    MalformedDocument(String),

    #[error("route entry is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("duplicate route identifier `{0}`")]
    DuplicateIdentifier(String),

    #[error("route `{0}` has an invalid destination URI")]
    InvalidDestination(String),
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRoute {
    id: Option<String>,
    predicate: Option<PredicateSpec>,
    destination: Option<String>,
    filters: Vec<serde_json::Value>,
}

/// Parse a routes document into an ordered route sequence.
pub fn parse(raw: &str) -> Result<Vec<RouteDefinition>, ParseError> {
    let document: RawDocument =
        serde_json::from_str(raw).map_err(|e| ParseError::MalformedDocument(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut routes = Vec::with_capacity(document.routes.len());

    for entry in document.routes {
        let id = entry
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ParseError::MissingField("id"))?;

        if !seen.insert(id.clone()) {
            return Err(ParseError::DuplicateIdentifier(id));
        }

        let destination = entry
            .destination
            .ok_or(ParseError::MissingField("destination"))?;
        let destination =
            Url::parse(&destination).map_err(|_| ParseError::InvalidDestination(id.clone()))?;

        routes.push(RouteDefinition {
            id,
            predicate: entry.predicate.unwrap_or_default(),
            destination,
            filters: entry.filters,
        });
    }

    Ok(routes)
}
