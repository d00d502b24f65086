use serde::{Deserialize, Serialize};

/// Caller role as reported by the auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  Admin,
  Client,
}

/// Explicit caller context for access decisions.
///
/// Supplied by the auth/billing layer at call time. Keeping it a parameter
/// (instead of reading some ambient session state) is what makes the gate
/// referentially transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessContext {
  pub role: Role,
  pub has_paid: bool,
}

impl AccessContext {
  pub fn admin() -> Self {
    Self {
      role: Role::Admin,
      has_paid: false,
    }
  }

  pub fn client(has_paid: bool) -> Self {
    Self {
      role: Role::Client,
      has_paid,
    }
  }

  /// Admins and paying clients see everything, regardless of any
  /// per-framework policy.
  pub fn has_full_access(&self) -> bool {
    self.role == Role::Admin || self.has_paid
  }
}
