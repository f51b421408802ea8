//! Core types for the Xenogate encounter engine.
//!
//! Closed enumerations for attack vectors, biomes, intents, and species;
//! the sparse effects bundle; actor archetypes; and the generated-encounter
//! records the generator hands to its host. Everything here is plain data:
//! static catalogs load once, generated records are constructed fresh per
//! encounter and never mutated afterwards.

pub mod actor;
pub mod biome;
pub mod effects;
pub mod encounter;
pub mod event;
pub mod intent;
pub mod vector;

pub use actor::{ActorArchetype, SpeciesType, Temperament};
pub use biome::Biome;
pub use effects::EffectsBundle;
pub use encounter::{
    BalanceSummary, GeneratedChoice, GeneratedEncounter, GeneratedOutcome, SeedMeta,
};
pub use event::EventKind;
pub use intent::{ChoiceIntent, PolicyClass};
pub use vector::AttackVector;
