//! Deterministic encounter generation engine.
//!
//! Provides the seeded RNG stream, built-in catalogs (alien roster,
//! encounter templates, random-event table), tier curve model, choice and
//! outcome synthesis, balance evaluation, tag/narrative composition, and
//! JSONL export. Construction validates the catalog so generation itself
//! never fails; identical seed and config always replay the same encounter.

pub mod balance;
pub mod catalog;
pub mod config;
pub mod curves;
pub mod error;
pub mod export;
pub mod generator;
pub mod narrative;
pub mod rng;
pub mod synth;

pub use catalog::Catalog;
pub use config::{GeneratorConfig, PlayerPolicy, TierDistribution};
pub use error::{CatalogError, ExportError};
pub use export::export_jsonl;
pub use generator::EncounterGenerator;
pub use rng::SeedRng;

/// Version stamped into every encounter's `seed_meta`; bumped whenever the
/// draw order or any catalog table changes, since either breaks replays.
pub const GENERATOR_VERSION: &str = "1.0.0";

/// The tier window supported by the built-in curve model.
pub fn tier_bounds() -> (u32, u32) {
    (1, 10)
}
