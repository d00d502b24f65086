//! Static monetization policy for report framework sections.

use serde::{Deserialize, Serialize};

use crate::context::AccessContext;

/// How much of a framework section a non-paying client may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
  /// Fully visible.
  Free,
  /// Only the declared preview fields are visible; the rest is blurred.
  Partial,
  /// Nothing visible.
  Locked,
}

/// Policy row for one framework section.
struct FrameworkPolicy {
  framework: &'static str,
  level: AccessLevel,
  /// Fields still shown when the level is `Partial`.
  preview_fields: &'static [&'static str],
}

/// One row per framework the report can contain. Frameworks absent from
/// this table are locked.
const POLICIES: &[FrameworkPolicy] = &[
  FrameworkPolicy {
    framework: "swot",
    level: AccessLevel::Free,
    preview_fields: &[],
  },
  FrameworkPolicy {
    framework: "pestel",
    level: AccessLevel::Partial,
    preview_fields: &["political", "economic"],
  },
  FrameworkPolicy {
    framework: "porter",
    level: AccessLevel::Partial,
    preview_fields: &["rivalry", "new_entrants"],
  },
  FrameworkPolicy {
    framework: "market_size",
    level: AccessLevel::Locked,
    preview_fields: &[],
  },
  FrameworkPolicy {
    framework: "okr",
    level: AccessLevel::Locked,
    preview_fields: &[],
  },
  FrameworkPolicy {
    framework: "blue_ocean",
    level: AccessLevel::Locked,
    preview_fields: &[],
  },
  FrameworkPolicy {
    framework: "vrio",
    level: AccessLevel::Locked,
    preview_fields: &[],
  },
  FrameworkPolicy {
    framework: "ansoff",
    level: AccessLevel::Locked,
    preview_fields: &[],
  },
];

fn policy_for(framework: &str) -> Option<&'static FrameworkPolicy> {
  POLICIES.iter().find(|p| p.framework == framework)
}

/// Access level for a framework section under the given caller context.
///
/// Admins and paying clients get `Free` unconditionally. Framework ids
/// without a policy row fail closed: default-open would leak premium
/// content the moment a new framework ships.
pub fn framework_access(framework: &str, ctx: &AccessContext) -> AccessLevel {
  if ctx.has_full_access() {
    return AccessLevel::Free;
  }

  match policy_for(framework) {
    Some(policy) => policy.level,
    None => {
      tracing::debug!(framework, "no access policy for framework, locking");
      AccessLevel::Locked
    }
  }
}

/// Whether a single field of a framework section is visible.
pub fn is_field_visible(framework: &str, field: &str, ctx: &AccessContext) -> bool {
  match framework_access(framework, ctx) {
    AccessLevel::Free => true,
    AccessLevel::Locked => false,
    AccessLevel::Partial => policy_for(framework)
      .map(|p| p.preview_fields.contains(&field))
      .unwrap_or(false),
  }
}
