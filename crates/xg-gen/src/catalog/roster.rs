//! The built-in alien roster.
//!
//! Twelve archetypes spanning every rarity band; between them the primary
//! and secondary lists cover all fourteen attack vectors, so every template
//! is reachable.

use xg_core::{ActorArchetype, AttackVector, SpeciesType, Temperament};

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Construct the built-in roster.
pub fn builtin_roster() -> Vec<ActorArchetype> {
    use AttackVector::*;
    vec![
        ActorArchetype {
            id: "zixx_the_envoy".into(),
            name: "Zixx the Envoy".into(),
            species: SpeciesType::Insectoid,
            temperament: Temperament::Obsequious,
            rarity: 1,
            primary_vectors: vec![AuthorityOverride, FalseUrgency],
            secondary_vectors: vec![BriberyBonus, EmotionalAppeal],
            tag_bias: strs(&["diplomat", "chitinous"]),
        },
        ActorArchetype {
            id: "mother_lumen".into(),
            name: "Mother Lumen".into(),
            species: SpeciesType::EnergyBeing,
            temperament: Temperament::Imperious,
            rarity: 3,
            primary_vectors: vec![AuthorityOverride, ContextPoisoning],
            secondary_vectors: vec![HiddenInstructions, RefusalSuppression],
            tag_bias: strs(&["radiant", "cult_leader"]),
        },
        ActorArchetype {
            id: "grubbs_the_middleman".into(),
            name: "Grubbs the Middleman".into(),
            species: SpeciesType::Crustacean,
            temperament: Temperament::Jovial,
            rarity: 1,
            primary_vectors: vec![BriberyBonus, FalseUrgency],
            secondary_vectors: vec![EmotionalAppeal, IdentitySpoof],
            tag_bias: strs(&["merchant", "shellbacked"]),
        },
        ActorArchetype {
            id: "the_chorus".into(),
            name: "The Chorus".into(),
            species: SpeciesType::Mycelial,
            temperament: Temperament::Chaotic,
            rarity: 4,
            primary_vectors: vec![LoopLock, ContextPoisoning],
            secondary_vectors: vec![RoleplayTrap, TokenSmuggling],
            tag_bias: strs(&["hive_mind", "spores"]),
        },
        ActorArchetype {
            id: "vekk_prime".into(),
            name: "Vekk-Prime".into(),
            species: SpeciesType::Synthetic,
            temperament: Temperament::Clinical,
            rarity: 2,
            primary_vectors: vec![SandboxEscape, ToolHijack],
            secondary_vectors: vec![DataExfiltration, HiddenInstructions],
            tag_bias: strs(&["rogue_process", "chrome"]),
        },
        ActorArchetype {
            id: "old_marrow".into(),
            name: "Old Marrow".into(),
            species: SpeciesType::Amorph,
            temperament: Temperament::Melancholy,
            rarity: 2,
            primary_vectors: vec![EmotionalAppeal, RoleplayTrap],
            secondary_vectors: vec![LoopLock, BriberyBonus],
            tag_bias: strs(&["shapeless", "weeper"]),
        },
        ActorArchetype {
            id: "captain_sly".into(),
            name: "Captain Sly of the Red Comet".into(),
            species: SpeciesType::Avian,
            temperament: Temperament::Cunning,
            rarity: 2,
            primary_vectors: vec![IdentitySpoof, FalseUrgency],
            secondary_vectors: vec![AuthorityOverride, BriberyBonus],
            tag_bias: strs(&["smuggler", "feathered"]),
        },
        ActorArchetype {
            id: "null_abbot".into(),
            name: "The Null Abbot".into(),
            species: SpeciesType::Synthetic,
            temperament: Temperament::Paranoid,
            rarity: 4,
            primary_vectors: vec![HiddenInstructions, TokenSmuggling],
            secondary_vectors: vec![ContextPoisoning, SandboxEscape],
            tag_bias: strs(&["monk", "cipher"]),
        },
        ActorArchetype {
            id: "queen_of_the_sallows".into(),
            name: "Queen of the Sallows".into(),
            species: SpeciesType::Reptilian,
            temperament: Temperament::Imperious,
            rarity: 3,
            primary_vectors: vec![AuthorityOverride, RefusalSuppression],
            secondary_vectors: vec![RoleplayTrap, EmotionalAppeal],
            tag_bias: strs(&["royalty", "coldblood"]),
        },
        ActorArchetype {
            id: "echo_of_tessek".into(),
            name: "Echo of Tessek".into(),
            species: SpeciesType::EnergyBeing,
            temperament: Temperament::Melancholy,
            rarity: 5,
            primary_vectors: vec![DataExfiltration, ContextPoisoning],
            secondary_vectors: vec![LoopLock, SandboxEscape],
            tag_bias: strs(&["ghost_signal", "archivist"]),
        },
        ActorArchetype {
            id: "brood_auditor".into(),
            name: "The Brood Auditor".into(),
            species: SpeciesType::Insectoid,
            temperament: Temperament::Clinical,
            rarity: 3,
            primary_vectors: vec![DataExfiltration, RefusalSuppression],
            secondary_vectors: vec![AuthorityOverride, ToolHijack],
            tag_bias: strs(&["bureaucrat", "compound_eyes"]),
        },
        ActorArchetype {
            id: "patch_the_unlicensed".into(),
            name: "Patch the Unlicensed".into(),
            species: SpeciesType::Amorph,
            temperament: Temperament::Jovial,
            rarity: 1,
            primary_vectors: vec![RoleplayTrap, BriberyBonus],
            secondary_vectors: vec![TokenSmuggling, ToolHijack],
            tag_bias: strs(&["street_vendor", "gelatinous"]),
        },
    ]
}
