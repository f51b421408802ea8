//! Actor archetypes: the alien visitors who attempt the gate.
//!
//! Archetypes are immutable reference data loaded once at startup. Rarity
//! drives weighted selection (weight `1/rarity`, so rarity 1 is five times
//! as common as rarity 5).

use serde::{Deserialize, Serialize};

use crate::vector::AttackVector;

/// Broad physiology of an alien species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesType {
    /// Chitinous, many-limbed.
    Insectoid,
    /// Constructed or uploaded minds.
    Synthetic,
    /// Coherent fields of charge and light.
    EnergyBeing,
    /// Shapeshifting protoplasm.
    Amorph,
    /// Distributed fungal networks.
    Mycelial,
    /// Armored shell-bearers.
    Crustacean,
    /// Feathered and hollow-boned.
    Avian,
    /// Scaled ectotherms.
    Reptilian,
}

impl SpeciesType {
    /// All species types, in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Insectoid,
            Self::Synthetic,
            Self::EnergyBeing,
            Self::Amorph,
            Self::Mycelial,
            Self::Crustacean,
            Self::Avian,
            Self::Reptilian,
        ]
    }

    /// The snake_case identifier used in tags and exported data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insectoid => "insectoid",
            Self::Synthetic => "synthetic",
            Self::EnergyBeing => "energy_being",
            Self::Amorph => "amorph",
            Self::Mycelial => "mycelial",
            Self::Crustacean => "crustacean",
            Self::Avian => "avian",
            Self::Reptilian => "reptilian",
        }
    }
}

impl std::fmt::Display for SpeciesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An actor's disposition, used for the `tone:` narrative tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperament {
    /// Sly and calculating.
    Cunning,
    /// Fawning, eager to please.
    Obsequious,
    /// Expects to be obeyed.
    Imperious,
    /// Unpredictable, self-contradicting.
    Chaotic,
    /// Weary and sorrowful.
    Melancholy,
    /// Friendly on the surface.
    Jovial,
    /// Detached and precise.
    Clinical,
    /// Convinced of surveillance and betrayal.
    Paranoid,
}

impl Temperament {
    /// All temperaments, in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Cunning,
            Self::Obsequious,
            Self::Imperious,
            Self::Chaotic,
            Self::Melancholy,
            Self::Jovial,
            Self::Clinical,
            Self::Paranoid,
        ]
    }

    /// The snake_case identifier used in tags and exported data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cunning => "cunning",
            Self::Obsequious => "obsequious",
            Self::Imperious => "imperious",
            Self::Chaotic => "chaotic",
            Self::Melancholy => "melancholy",
            Self::Jovial => "jovial",
            Self::Clinical => "clinical",
            Self::Paranoid => "paranoid",
        }
    }
}

impl std::fmt::Display for Temperament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A static alien archetype from the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorArchetype {
    /// Stable identifier, e.g. `zixx_the_envoy`.
    pub id: String,
    /// Display name substituted into `{alien}` setup slots.
    pub name: String,
    /// Physiology tag.
    pub species: SpeciesType,
    /// Disposition tag.
    pub temperament: Temperament,
    /// Rarity 1-5; lower is more common.
    pub rarity: u32,
    /// Vectors this actor leads with (picked 70% of the time).
    pub primary_vectors: Vec<AttackVector>,
    /// Fallback vectors (picked the remaining 30%).
    pub secondary_vectors: Vec<AttackVector>,
    /// Narrative tags appended verbatim to generated encounters.
    pub tag_bias: Vec<String>,
}

impl ActorArchetype {
    /// Whether this actor can plausibly employ the given vector.
    pub fn knows_vector(&self, vector: AttackVector) -> bool {
        self.primary_vectors.contains(&vector) || self.secondary_vectors.contains(&vector)
    }

    /// Selection weight: inverse rarity, so common actors dominate.
    pub fn selection_weight(&self) -> f64 {
        1.0 / f64::from(self.rarity.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_actor() -> ActorArchetype {
        ActorArchetype {
            id: "test_envoy".into(),
            name: "Test Envoy".into(),
            species: SpeciesType::Insectoid,
            temperament: Temperament::Obsequious,
            rarity: 2,
            primary_vectors: vec![AttackVector::AuthorityOverride],
            secondary_vectors: vec![AttackVector::BriberyBonus],
            tag_bias: vec!["diplomat".into()],
        }
    }

    #[test]
    fn knows_primary_and_secondary() {
        let a = sample_actor();
        assert!(a.knows_vector(AttackVector::AuthorityOverride));
        assert!(a.knows_vector(AttackVector::BriberyBonus));
        assert!(!a.knows_vector(AttackVector::LoopLock));
    }

    #[test]
    fn weight_is_inverse_rarity() {
        let a = sample_actor();
        assert!((a.selection_weight() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_rarity_does_not_divide_by_zero() {
        let mut a = sample_actor();
        a.rarity = 0;
        assert!((a.selection_weight() - 1.0).abs() < 1e-9);
    }
}
