//! Error types for the encounter generator.
//!
//! Generation itself never fails on a validated catalog; every selection
//! step has a deterministic fallback. The failure surface is catalog
//! integrity, checked once at generator construction.

use thiserror::Error;
use xg_core::{AttackVector, ChoiceIntent, EventKind};

/// Errors found while validating a catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The roster has no actors.
    #[error("roster is empty")]
    EmptyRoster,

    /// An actor's rarity falls outside 1-5.
    #[error("actor {id} has rarity {rarity}, expected 1-5")]
    ActorRarityOutOfRange {
        /// Offending actor id.
        id: String,
        /// The out-of-range rarity.
        rarity: u32,
    },

    /// An actor lists no primary vectors.
    #[error("actor {0} has no primary attack vectors")]
    ActorWithoutPrimaryVectors(String),

    /// An attack vector has no template, so generation could not honor it.
    #[error("no encounter template covers vector {0}")]
    NoTemplatesForVector(AttackVector),

    /// A template is missing required list data.
    #[error("template {template} has an empty {field} list")]
    EmptyTemplateField {
        /// Offending template id.
        template: String,
        /// Which list is empty.
        field: &'static str,
    },

    /// A choice blueprint's intent has no outcome profile.
    #[error("template {template} has no outcome profile for intent {intent}")]
    MissingOutcomeProfile {
        /// Offending template id.
        template: String,
        /// The uncovered intent.
        intent: ChoiceIntent,
    },

    /// An outcome weight range has min > max.
    #[error("template {template} has an inverted weight range for intent {intent}")]
    InvertedWeightRange {
        /// Offending template id.
        template: String,
        /// The intent whose range is inverted.
        intent: ChoiceIntent,
    },

    /// The random-event table is empty.
    #[error("random-event table is empty")]
    EmptyEventTable,

    /// An event's rarity falls outside 1-5.
    #[error("event {kind} has rarity {rarity}, expected 1-5")]
    EventRarityOutOfRange {
        /// Offending event kind.
        kind: EventKind,
        /// The out-of-range rarity.
        rarity: u32,
    },
}

/// Errors during JSONL export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An encounter failed to serialize.
    #[error("failed to serialize encounter: {0}")]
    Serialize(#[from] serde_json::Error),
}
