//! Parse errors for wire statuses.
//!
//! The resolvers themselves are total and have no error channel; parsing a
//! status string outside a serde context is the only fallible surface.

/// A status string outside the known enumeration for its entity.
#[derive(Debug, thiserror::Error)]
#[error("unknown {entity} status '{value}'")]
pub struct StatusParseError {
  pub entity: &'static str,
  pub value: String,
}
