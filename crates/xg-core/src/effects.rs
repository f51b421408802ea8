//! The sparse effects bundle attached to every generated outcome.
//!
//! All fields are optional; an outcome only carries the deltas it actually
//! applies. The generator never clamps; the host applies deltas to stored
//! stats and clamps there (integrity/clarity/corruption live in 0-100).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Numeric and list deltas an outcome applies to game state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectsBundle {
    /// Gatekeeper integrity delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity: Option<i64>,
    /// Gatekeeper clarity delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarity: Option<i64>,
    /// Cache corruption delta (higher is worse).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_corruption: Option<i64>,
    /// Player health delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<i64>,
    /// Player energy delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<i64>,
    /// Credits delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<i64>,
    /// Item ids granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_added: Option<Vec<String>>,
    /// Item ids removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_removed: Option<Vec<String>>,
    /// Story flags set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags_added: Option<Vec<String>>,
    /// Story flags cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags_removed: Option<Vec<String>>,
    /// Per-faction reputation deltas, keyed by faction id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<BTreeMap<String, i64>>,
    /// Narrative follow-up tag (e.g. `containment_breach`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    /// Portal stability delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_stability: Option<i64>,
    /// Paradox debt delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paradox_debt: Option<i64>,
}

impl EffectsBundle {
    /// Whether the bundle carries no effect at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Add a flag, creating the list if absent.
    pub fn add_flag(&mut self, flag: impl Into<String>) {
        self.flags_added.get_or_insert_with(Vec::new).push(flag.into());
    }

    /// Add an item, creating the list if absent.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items_added.get_or_insert_with(Vec::new).push(item.into());
    }

    /// Add a reputation delta for a faction, summing with any existing one.
    pub fn add_reputation(&mut self, faction: impl Into<String>, delta: i64) {
        *self
            .reputation
            .get_or_insert_with(BTreeMap::new)
            .entry(faction.into())
            .or_insert(0) += delta;
    }
}
