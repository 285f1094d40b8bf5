//! Error types for the resolution engine.

use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving specs or rewriting structures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A spec's leading character is neither alphanumeric nor a recognized
    /// operator sigil (also raised for an empty spec).
    #[error("invalid spec {spec:?}: expected a name or a '!', '#' or '$' operator")]
    InvalidSpec { spec: String },

    /// An entity name absent from the store: a strict-mode entity lookup
    /// miss, or — regardless of strictness — the entity type a field was
    /// asked of.
    #[error("{spec:?} is not an entity type")]
    UnknownEntity { spec: String },

    /// A strict-mode field lookup miss against a known entity type.
    #[error("{spec:?} is not a field of {entity_type}")]
    UnknownField { entity_type: String, spec: String },

    /// A resolve-one call's underlying resolver produced zero or more than
    /// one candidate.
    #[error("{spec:?} resolved to {count} names, expected exactly one")]
    AmbiguousResolution { spec: String, count: usize },
}
