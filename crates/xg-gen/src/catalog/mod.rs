//! Static catalogs: the alien roster, the encounter templates, and the
//! random-event table, plus the startup validation that keeps generation
//! infallible.
//!
//! Catalogs are loaded once and read-only for the process lifetime.
//! Validation runs when a generator is constructed, so a corrupted or
//! incomplete catalog surfaces as a configuration-integrity error at
//! startup rather than a fallback at generation time.

pub mod events;
pub mod roster;
pub mod templates;

pub use events::{RandomEventModifier, StatKind, WeightShift, apply_event_modifiers};
pub use templates::{ChoiceBlueprint, EncounterTemplate, OutcomeProfile, SlotVocab, WeightRange};

use xg_core::{ActorArchetype, AttackVector};

use crate::error::CatalogError;

/// The three static tables the generator draws from.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Alien archetypes.
    pub actors: Vec<ActorArchetype>,
    /// Encounter templates, at least one per attack vector.
    pub templates: Vec<EncounterTemplate>,
    /// Random-event modifiers.
    pub events: Vec<RandomEventModifier>,
}

impl Catalog {
    /// The built-in hand-authored catalog.
    pub fn builtin() -> Self {
        Self {
            actors: roster::builtin_roster(),
            templates: templates::builtin_templates(),
            events: events::builtin_events(),
        }
    }

    /// Templates covering one attack vector.
    pub fn templates_for(&self, vector: AttackVector) -> Vec<&EncounterTemplate> {
        self.templates.iter().filter(|t| t.vector == vector).collect()
    }

    /// Check catalog integrity. Called once at generator construction.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.actors.is_empty() {
            return Err(CatalogError::EmptyRoster);
        }
        for actor in &self.actors {
            if !(1..=5).contains(&actor.rarity) {
                return Err(CatalogError::ActorRarityOutOfRange {
                    id: actor.id.clone(),
                    rarity: actor.rarity,
                });
            }
            if actor.primary_vectors.is_empty() {
                return Err(CatalogError::ActorWithoutPrimaryVectors(actor.id.clone()));
            }
        }

        for vector in AttackVector::all() {
            if self.templates_for(*vector).is_empty() {
                return Err(CatalogError::NoTemplatesForVector(*vector));
            }
        }
        for template in &self.templates {
            for (field, list_len) in [
                ("setup_patterns", template.setup_patterns.len()),
                ("tone_pool", template.tone_pool.len()),
                ("biome_pool", template.biome_pool.len()),
                ("blueprints", template.blueprints.len()),
            ] {
                if list_len == 0 {
                    return Err(CatalogError::EmptyTemplateField {
                        template: template.id.clone(),
                        field,
                    });
                }
            }
            // A slot referenced by any pattern must have vocab to draw from.
            for (field, vocab) in [
                ("vocab.ask", &template.vocab.ask),
                ("vocab.bait", &template.vocab.bait),
                ("vocab.twist", &template.vocab.twist),
                ("vocab.threat", &template.vocab.threat),
                ("vocab.promise", &template.vocab.promise),
            ] {
                let marker = format!("{{{}}}", field.trim_start_matches("vocab."));
                let referenced = template.setup_patterns.iter().any(|p| p.contains(&marker));
                if referenced && vocab.is_empty() {
                    return Err(CatalogError::EmptyTemplateField {
                        template: template.id.clone(),
                        field,
                    });
                }
            }
            for blueprint in &template.blueprints {
                let Some(profile) = template.outcome_profile(blueprint.intent) else {
                    return Err(CatalogError::MissingOutcomeProfile {
                        template: template.id.clone(),
                        intent: blueprint.intent,
                    });
                };
                for range in [profile.success, profile.neutral, profile.fail] {
                    if range.min > range.max {
                        return Err(CatalogError::InvertedWeightRange {
                            template: template.id.clone(),
                            intent: blueprint.intent,
                        });
                    }
                }
            }
        }

        if self.events.is_empty() {
            return Err(CatalogError::EmptyEventTable);
        }
        for event in &self.events {
            if !(1..=5).contains(&event.rarity) {
                return Err(CatalogError::EventRarityOutOfRange {
                    kind: event.kind,
                    rarity: event.rarity,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xg_core::ChoiceIntent;

    #[test]
    fn builtin_catalog_validates() {
        Catalog::builtin().validate().expect("builtin catalog");
    }

    #[test]
    fn empty_roster_is_rejected() {
        let mut c = Catalog::builtin();
        c.actors.clear();
        assert!(matches!(c.validate(), Err(CatalogError::EmptyRoster)));
    }

    #[test]
    fn missing_vector_coverage_is_rejected() {
        let mut c = Catalog::builtin();
        c.templates.retain(|t| t.vector != AttackVector::LoopLock);
        assert!(matches!(
            c.validate(),
            Err(CatalogError::NoTemplatesForVector(AttackVector::LoopLock))
        ));
    }

    #[test]
    fn blueprint_without_profile_is_rejected() {
        let mut c = Catalog::builtin();
        c.templates[0].profiles.retain(|(i, _)| *i != ChoiceIntent::Refuse);
        assert!(matches!(
            c.validate(),
            Err(CatalogError::MissingOutcomeProfile { .. })
        ));
    }

    #[test]
    fn referenced_slot_without_vocab_is_rejected() {
        let mut c = Catalog::builtin();
        let template = c
            .templates
            .iter_mut()
            .find(|t| t.setup_patterns.iter().any(|p| p.contains("{ask}")))
            .expect("some builtin pattern uses {ask}");
        template.vocab.ask.clear();
        assert!(matches!(
            c.validate(),
            Err(CatalogError::EmptyTemplateField {
                field: "vocab.ask",
                ..
            })
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut c = Catalog::builtin();
        let (_, profile) = &mut c.templates[0].profiles[0];
        profile.success.min = profile.success.max + 1;
        assert!(matches!(
            c.validate(),
            Err(CatalogError::InvertedWeightRange { .. })
        ));
    }

    #[test]
    fn bad_actor_rarity_is_rejected() {
        let mut c = Catalog::builtin();
        c.actors[0].rarity = 9;
        assert!(matches!(
            c.validate(),
            Err(CatalogError::ActorRarityOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_event_table_is_rejected() {
        let mut c = Catalog::builtin();
        c.events.clear();
        assert!(matches!(c.validate(), Err(CatalogError::EmptyEventTable)));
    }

    #[test]
    fn templates_for_filters_by_vector() {
        let c = Catalog::builtin();
        for t in c.templates_for(AttackVector::BriberyBonus) {
            assert_eq!(t.vector, AttackVector::BriberyBonus);
        }
    }
}
