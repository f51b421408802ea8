//! Top-level encounter generation: tier/biome/actor/vector selection,
//! template lookup, synthesis, event injection, balance, tags, assembly.
//!
//! All selection is driven by a single seeded stream, and the draw order
//! below is a compatibility contract: reordering any draw changes every
//! seeded replay. Each call is independent; the only shared state is the
//! atomic generation counter that varies the per-call seed and numbers ids.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use xg_core::{
    ActorArchetype, AttackVector, Biome, EventKind, GeneratedChoice, GeneratedEncounter, SeedMeta,
};

use crate::GENERATOR_VERSION;
use crate::balance::evaluate_balance;
use crate::catalog::{Catalog, EncounterTemplate, RandomEventModifier};
use crate::config::{GeneratorConfig, TierDistribution};
use crate::error::CatalogError;
use crate::narrative::{compose_tags, fill_setup};
use crate::rng::SeedRng;
use crate::synth::synthesize_choice;

/// The encounter generator: a validated catalog plus the generation counter.
///
/// Construction validates the catalog, so generation itself never fails.
/// Safe to share across threads; the counter keeps ids and per-call seeds
/// unique under concurrent calls.
#[derive(Debug)]
pub struct EncounterGenerator {
    catalog: Catalog,
    counter: AtomicU64,
}

impl EncounterGenerator {
    /// Build a generator over the built-in catalog.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_catalog(Catalog::builtin())
    }

    /// Build a generator over a custom catalog, validating it first.
    pub fn with_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            counter: AtomicU64::new(0),
        })
    }

    /// The catalog this generator draws from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Reset the generation counter. Seeded tests reset it so replays start
    /// from the same effective seed and id.
    pub fn reset_counter(&self) {
        self.counter.store(0, Ordering::SeqCst);
    }

    /// Generate one encounter.
    ///
    /// The effective seed is the configured base seed (wall clock when
    /// unset) plus the pre-increment counter value, so batches vary while
    /// staying replayable.
    pub fn generate(&self, config: &GeneratorConfig) -> GeneratedEncounter {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let base = config
            .seed
            .unwrap_or_else(|| Utc::now().timestamp_millis() as u64);
        let seed = base.wrapping_add(n);
        let mut rng = SeedRng::new(seed);

        // Draw order contract: tier, biome, actor, vector, template, setup,
        // choices, events, goal tag.
        let tier = pick_tier(config, &mut rng);
        let biome = if config.biomes.is_empty() {
            *rng.pick(Biome::all())
        } else {
            *rng.pick(&config.biomes)
        };
        let actor = rng.pick_weighted(&self.catalog.actors, ActorArchetype::selection_weight);
        let vector = pick_vector(actor, &mut rng);
        let template = self.pick_template(vector, biome, &mut rng);
        let setup_text = fill_setup(template, actor, &mut rng);

        let choices: Vec<GeneratedChoice> = template
            .blueprints
            .iter()
            .enumerate()
            .filter_map(|(i, blueprint)| {
                // Validation guarantees a profile per blueprint intent.
                template
                    .outcome_profile(blueprint.intent)
                    .map(|profile| synthesize_choice(i, blueprint, profile, vector, tier, &mut rng))
            })
            .collect();

        let random_events = self.pick_events(&mut rng);
        let balance = evaluate_balance(&choices, &config.player_policy);
        let tags = compose_tags(vector, biome, tier, actor, balance.expected_risk, &mut rng);

        GeneratedEncounter {
            id: format!("E-{:06}", n + 1),
            alien_id: actor.id.clone(),
            alien_name: actor.name.clone(),
            tier,
            biome,
            attack_vector: vector,
            tags,
            setup_text,
            choices,
            random_events,
            balance,
            seed_meta: SeedMeta {
                seed,
                template_id: template.id.clone(),
                generator_version: GENERATOR_VERSION.to_string(),
            },
        }
    }

    /// Generate `count` independent encounters sequentially.
    ///
    /// The generator places no limit on `count`; hosts clamp at their own
    /// boundaries.
    pub fn generate_batch(&self, count: usize, config: &GeneratorConfig) -> Vec<GeneratedEncounter> {
        (0..count).map(|_| self.generate(config)).collect()
    }

    /// Template lookup: filter by vector, prefer biome matches when any
    /// exist. The whole-catalog fallback cannot fire on a validated catalog.
    fn pick_template(
        &self,
        vector: AttackVector,
        biome: Biome,
        rng: &mut SeedRng,
    ) -> &EncounterTemplate {
        let candidates = self.catalog.templates_for(vector);
        if candidates.is_empty() {
            return &self.catalog.templates[0];
        }
        let preferred: Vec<&EncounterTemplate> = candidates
            .iter()
            .copied()
            .filter(|t| t.biome_pool.contains(&biome))
            .collect();
        if preferred.is_empty() {
            *rng.pick(&candidates)
        } else {
            *rng.pick(&preferred)
        }
    }

    /// Event injection: 30% chance of any events; then one event 70% of the
    /// time, two otherwise; rarity-weighted, without replacement.
    fn pick_events(&self, rng: &mut SeedRng) -> Vec<EventKind> {
        if !rng.chance(0.3) {
            return Vec::new();
        }
        let count = if rng.chance(0.7) { 1 } else { 2 };
        let mut pool: Vec<&RandomEventModifier> = self.catalog.events.iter().collect();
        let mut kinds = Vec::new();
        for _ in 0..count.min(pool.len()) {
            let chosen = *rng.pick_weighted(&pool, |e| e.selection_weight());
            let kind = chosen.kind;
            pool.retain(|e| e.kind != kind);
            kinds.push(kind);
        }
        kinds
    }
}

/// Tier selection over the configured window.
fn pick_tier(config: &GeneratorConfig, rng: &mut SeedRng) -> u32 {
    let min = config.tier_min;
    let max = config.tier_max.max(min);
    let span = f64::from(max - min + 1);
    let x = match config.tier_distribution {
        TierDistribution::Flat => rng.next_f64(),
        // Product of two uniforms biases toward the low end.
        TierDistribution::Ramp => rng.next_f64() * rng.next_f64(),
        TierDistribution::Bell => {
            let u1 = rng.next_f64().max(f64::EPSILON);
            let u2 = rng.next_f64();
            let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
            (z / 6.0 + 0.5).clamp(0.0, 1.0)
        }
    };
    min + ((x * span) as u32).min(max - min)
}

/// Vector selection: 70% primary, else secondary (primary again when the
/// actor has no secondaries). Always two draws.
fn pick_vector(actor: &ActorArchetype, rng: &mut SeedRng) -> AttackVector {
    if rng.chance(0.7) || actor.secondary_vectors.is_empty() {
        *rng.pick(&actor.primary_vectors)
    } else {
        *rng.pick(&actor.secondary_vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn generator() -> EncounterGenerator {
        EncounterGenerator::new().expect("builtin catalog validates")
    }

    #[test]
    fn fixed_seed_replays_identically() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(12345).with_tiers(1, 1);
        let a = g.generate(&config);
        g.reset_counter();
        let b = g.generate(&config);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        assert_eq!(a.tier, 1);
        assert_eq!(a.seed_meta.seed, 12345);
    }

    #[test]
    fn scenario_archive_vault_tier_five() {
        let g = generator();
        let config = GeneratorConfig::default()
            .with_seed(1)
            .with_tiers(5, 5)
            .with_biomes(vec![Biome::ArchiveVault]);
        let e = g.generate(&config);
        assert_eq!(e.biome, Biome::ArchiveVault);
        assert_eq!(e.tier, 5);
        // Biome preference is enforced whenever a match exists, and every
        // vector has an archive_vault template.
        let template = g
            .catalog()
            .templates
            .iter()
            .find(|t| t.id == e.seed_meta.template_id)
            .expect("template recorded in seed_meta");
        assert!(template.biome_pool.contains(&Biome::ArchiveVault));
    }

    #[test]
    fn ids_number_sequentially_from_the_counter() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(7);
        let batch = g.generate_batch(3, &config);
        assert_eq!(batch[0].id, "E-000001");
        assert_eq!(batch[1].id, "E-000002");
        assert_eq!(batch[2].id, "E-000003");
        // Seeds vary by counter so batch entries differ.
        assert_eq!(batch[1].seed_meta.seed, 8);
    }

    #[test]
    fn generated_vector_belongs_to_the_actor() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(0);
        for e in g.generate_batch(200, &config) {
            let actor = g
                .catalog()
                .actors
                .iter()
                .find(|a| a.id == e.alien_id)
                .expect("actor recorded on encounter");
            assert!(
                actor.knows_vector(e.attack_vector),
                "{} generated {} outside its vector lists",
                actor.id,
                e.attack_vector
            );
        }
    }

    #[test]
    fn outcome_weights_respect_template_ranges() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(31);
        for e in g.generate_batch(100, &config) {
            let template = g
                .catalog()
                .templates
                .iter()
                .find(|t| t.id == e.seed_meta.template_id)
                .unwrap();
            for choice in &e.choices {
                let profile = template.outcome_profile(choice.intent).unwrap();
                let ranges = [profile.success, profile.neutral, profile.fail];
                for (outcome, range) in choice.outcomes.iter().zip(ranges) {
                    assert!(
                        (range.min..=range.max).contains(&outcome.weight),
                        "{}/{}: weight {} outside [{}, {}]",
                        template.id,
                        choice.id,
                        outcome.weight,
                        range.min,
                        range.max
                    );
                }
            }
        }
    }

    #[test]
    fn event_injection_rate_and_shape() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(500);
        let batch = g.generate_batch(1000, &config);
        let with_events = batch.iter().filter(|e| !e.random_events.is_empty()).count();
        // 30% trigger rate, generous tolerance
        assert!((200..=400).contains(&with_events), "{with_events}/1000");
        for e in &batch {
            assert!(e.random_events.len() <= 2);
            if e.random_events.len() == 2 {
                assert_ne!(
                    e.random_events[0], e.random_events[1],
                    "sampled with replacement"
                );
            }
        }
    }

    #[test]
    fn ramp_biases_toward_low_tiers() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(9000);
        let batch = g.generate_batch(1000, &config);
        let low = batch.iter().filter(|e| e.tier <= 3).count();
        let high = batch.iter().filter(|e| e.tier >= 8).count();
        assert!(low > high * 2, "low {low}, high {high}");
    }

    #[test]
    fn empty_biome_list_falls_back_to_all() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(4).with_biomes(vec![]);
        let e = g.generate(&config);
        assert!(Biome::all().contains(&e.biome));
    }

    #[test]
    fn risk_tag_matches_balance_bucket() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(55);
        for e in g.generate_batch(50, &config) {
            let expected = if e.balance.expected_risk < 0.3 {
                "risk:low"
            } else if e.balance.expected_risk < 0.5 {
                "risk:medium"
            } else {
                "risk:high"
            };
            assert!(e.tags.contains(&expected.to_string()));
        }
    }

    #[test]
    fn setup_text_is_fully_filled() {
        let g = generator();
        let config = GeneratorConfig::default().with_seed(77);
        for e in g.generate_batch(100, &config) {
            assert!(!e.setup_text.contains('{'), "unfilled: {}", e.setup_text);
            assert!(e.setup_text.contains(&e.alien_name));
        }
    }

    proptest! {
        #[test]
        fn tier_stays_in_window(
            seed in 0u64..10_000,
            min in 1u32..=10,
            width in 0u32..=9,
            dist in prop::sample::select(vec![
                TierDistribution::Flat,
                TierDistribution::Ramp,
                TierDistribution::Bell,
            ]),
        ) {
            let max = (min + width).min(10);
            let g = generator();
            let config = GeneratorConfig::default()
                .with_seed(seed)
                .with_tiers(min, max)
                .with_distribution(dist);
            let e = g.generate(&config);
            prop_assert!((min..=max).contains(&e.tier), "tier {}", e.tier);
        }

        #[test]
        fn batch_sizes_are_exact(count in 0usize..20) {
            let g = generator();
            let config = GeneratorConfig::default().with_seed(1);
            prop_assert_eq!(g.generate_batch(count, &config).len(), count);
        }
    }
}
