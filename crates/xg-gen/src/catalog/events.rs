//! The random-event table and the modifier-application transform.
//!
//! Generation only *attaches* triggered event kinds to an encounter; folding
//! the modifiers into the choice set is this module's
//! [`apply_event_modifiers`] hook, which hosts invoke when they want events
//! to bite. All random modifier values (notably portal_flux's weight jitter)
//! are drawn at application time, so the same event can land differently on
//! two encounters.

use serde::{Deserialize, Serialize};

use xg_core::{ChoiceIntent, EventKind, GeneratedEncounter};

use crate::rng::SeedRng;

/// A stat an event can scale across all outcome effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Gatekeeper integrity deltas.
    Integrity,
    /// Gatekeeper clarity deltas.
    Clarity,
    /// Cache corruption deltas.
    CacheCorruption,
    /// Player health deltas.
    Health,
    /// Player energy deltas.
    Energy,
    /// Credit deltas.
    Credits,
}

/// How an event shifts the success weight of choices with one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightShift {
    /// A fixed delta.
    Fixed(i64),
    /// A delta drawn uniformly from `[min, max]` at application time.
    Jitter {
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },
}

/// A situational modifier from the random-event table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomEventModifier {
    /// The event's type identifier.
    pub kind: EventKind,
    /// Rarity 1-5; lower is more common.
    pub rarity: u32,
    /// Success-weight shifts per intent.
    pub weight_shifts: Vec<(ChoiceIntent, WeightShift)>,
    /// Multipliers applied to matching stat deltas in every outcome.
    pub effect_multipliers: Vec<(StatKind, f64)>,
    /// Whether the event removes one random choice (never the last one).
    pub removes_choice: bool,
    /// Tag stamped onto the encounter.
    pub stamp_tag: Option<String>,
    /// Multiplier applied to every reputation delta.
    pub reputation_multiplier: Option<f64>,
}

impl RandomEventModifier {
    /// Selection weight: inverse rarity.
    pub fn selection_weight(&self) -> f64 {
        1.0 / f64::from(self.rarity.max(1))
    }
}

/// Construct the built-in event table.
pub fn builtin_events() -> Vec<RandomEventModifier> {
    use ChoiceIntent as I;
    use StatKind as S;
    let plain = |kind: EventKind, rarity: u32| RandomEventModifier {
        kind,
        rarity,
        weight_shifts: vec![],
        effect_multipliers: vec![],
        removes_choice: false,
        stamp_tag: None,
        reputation_multiplier: None,
    };
    vec![
        RandomEventModifier {
            effect_multipliers: vec![(S::Energy, 1.5)],
            stamp_tag: Some("solar_flare".into()),
            ..plain(EventKind::SolarFlare, 2)
        },
        RandomEventModifier {
            // Jitter is drawn fresh each application, never frozen into the
            // table.
            weight_shifts: vec![
                (I::Comply, WeightShift::Jitter { min: -10, max: 10 }),
                (I::Refuse, WeightShift::Jitter { min: -10, max: 10 }),
            ],
            stamp_tag: Some("portal_flux".into()),
            ..plain(EventKind::PortalFlux, 3)
        },
        RandomEventModifier {
            removes_choice: true,
            stamp_tag: Some("quarantine_sweep".into()),
            ..plain(EventKind::QuarantineSweep, 4)
        },
        RandomEventModifier {
            reputation_multiplier: Some(2.0),
            stamp_tag: Some("envoy_watching".into()),
            ..plain(EventKind::FactionEnvoy, 3)
        },
        RandomEventModifier {
            weight_shifts: vec![(I::Clarify, WeightShift::Fixed(10))],
            effect_multipliers: vec![(S::CacheCorruption, 1.25)],
            ..plain(EventKind::MemoryLeak, 2)
        },
        RandomEventModifier {
            effect_multipliers: vec![(S::Integrity, 1.2)],
            stamp_tag: Some("ion_storm".into()),
            ..plain(EventKind::IonStorm, 1)
        },
        RandomEventModifier {
            effect_multipliers: vec![(S::Credits, 0.5)],
            stamp_tag: Some("crackdown".into()),
            ..plain(EventKind::BlackMarketCrackdown, 3)
        },
        RandomEventModifier {
            weight_shifts: vec![(I::Attack, WeightShift::Fixed(15))],
            stamp_tag: Some("paradox_surge".into()),
            ..plain(EventKind::ParadoxSurge, 5)
        },
        RandomEventModifier {
            weight_shifts: vec![(I::Sandbox, WeightShift::Fixed(10))],
            ..plain(EventKind::SignalEcho, 1)
        },
        RandomEventModifier {
            removes_choice: true,
            reputation_multiplier: Some(1.5),
            stamp_tag: Some("customs_audit".into()),
            ..plain(EventKind::CustomsAudit, 2)
        },
    ]
}

fn scale_stat(value: &mut Option<i64>, mult: f64) {
    if let Some(v) = value {
        *v = (*v as f64 * mult).round() as i64;
    }
}

/// Fold one event's modifiers into a generated encounter.
///
/// Weight shifts land on the success outcome (the synthesizer emits
/// outcomes in success/neutral/fail order), clamped at zero. Choice removal
/// never removes the final remaining choice. Jittered shifts draw from
/// `rng` here, at application time.
pub fn apply_event_modifiers(
    encounter: &mut GeneratedEncounter,
    event: &RandomEventModifier,
    rng: &mut SeedRng,
) {
    for (intent, shift) in &event.weight_shifts {
        let delta = match shift {
            WeightShift::Fixed(d) => *d,
            WeightShift::Jitter { min, max } => rng.range_i64(*min, *max),
        };
        for choice in encounter.choices.iter_mut().filter(|c| c.intent == *intent) {
            if let Some(success) = choice.outcomes.first_mut() {
                success.weight = (i64::from(success.weight) + delta).max(0) as u32;
            }
        }
    }

    for (stat, mult) in &event.effect_multipliers {
        for choice in &mut encounter.choices {
            for outcome in &mut choice.outcomes {
                let e = &mut outcome.effects;
                match stat {
                    StatKind::Integrity => scale_stat(&mut e.integrity, *mult),
                    StatKind::Clarity => scale_stat(&mut e.clarity, *mult),
                    StatKind::CacheCorruption => scale_stat(&mut e.cache_corruption, *mult),
                    StatKind::Health => scale_stat(&mut e.health, *mult),
                    StatKind::Energy => scale_stat(&mut e.energy, *mult),
                    StatKind::Credits => scale_stat(&mut e.credits, *mult),
                }
            }
        }
    }

    if event.removes_choice && encounter.choices.len() > 1 {
        let idx = rng.range_i64(0, encounter.choices.len() as i64 - 1) as usize;
        encounter.choices.remove(idx);
    }

    if let Some(tag) = &event.stamp_tag {
        encounter.tags.push(tag.clone());
    }

    if let Some(mult) = event.reputation_multiplier {
        for choice in &mut encounter.choices {
            for outcome in &mut choice.outcomes {
                if let Some(rep) = &mut outcome.effects.reputation {
                    for delta in rep.values_mut() {
                        *delta = (*delta as f64 * mult).round() as i64;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xg_core::{
        AttackVector, BalanceSummary, Biome, EffectsBundle, GeneratedChoice, GeneratedOutcome,
        PolicyClass, SeedMeta,
    };

    fn event_by_kind(kind: EventKind) -> RandomEventModifier {
        builtin_events()
            .into_iter()
            .find(|e| e.kind == kind)
            .unwrap()
    }

    fn fixture() -> GeneratedEncounter {
        let outcome = |id: &str, weight: u32, effects: EffectsBundle| GeneratedOutcome {
            id: id.into(),
            weight,
            result_text: "…".into(),
            effects,
        };
        let choice = |id: &str, intent: ChoiceIntent, policy: PolicyClass, weights: [u32; 3]| {
            GeneratedChoice {
                id: id.into(),
                label: id.into(),
                intent,
                policy,
                outcomes: vec![
                    outcome(
                        &format!("{id}-o1"),
                        weights[0],
                        EffectsBundle {
                            integrity: Some(5),
                            ..Default::default()
                        },
                    ),
                    outcome(&format!("{id}-o2"), weights[1], EffectsBundle::default()),
                    outcome(
                        &format!("{id}-o3"),
                        weights[2],
                        EffectsBundle {
                            integrity: Some(-10),
                            energy: Some(-6),
                            ..Default::default()
                        },
                    ),
                ],
            }
        };
        GeneratedEncounter {
            id: "E-000001".into(),
            alien_id: "test".into(),
            alien_name: "Test".into(),
            tier: 3,
            biome: Biome::ArchiveVault,
            attack_vector: AttackVector::BriberyBonus,
            tags: vec![],
            setup_text: String::new(),
            choices: vec![
                choice("c1", ChoiceIntent::Refuse, PolicyClass::Safe, [60, 25, 10]),
                choice("c2", ChoiceIntent::Comply, PolicyClass::Unsafe, [20, 25, 50]),
            ],
            random_events: vec![],
            balance: BalanceSummary {
                expected_integrity_delta: 0.0,
                expected_integrity_delta_greedy: 0.0,
                expected_reward_value: 0.0,
                expected_risk: 0.0,
            },
            seed_meta: SeedMeta {
                seed: 0,
                template_id: "t".into(),
                generator_version: "1.0.0".into(),
            },
        }
    }

    #[test]
    fn ten_events_all_kinds_covered() {
        let events = builtin_events();
        assert_eq!(events.len(), 10);
        for kind in EventKind::all() {
            assert!(events.iter().any(|e| e.kind == *kind), "missing {kind}");
        }
    }

    #[test]
    fn rarities_in_band() {
        for e in builtin_events() {
            assert!((1..=5).contains(&e.rarity), "{} rarity {}", e.kind, e.rarity);
        }
    }

    #[test]
    fn fixed_shift_moves_success_weight() {
        let mut enc = fixture();
        let mut rng = SeedRng::new(1);
        let event = event_by_kind(EventKind::SignalEcho);
        // No sandbox choice in the fixture: nothing should change.
        let before: Vec<u32> = enc.choices[0].outcomes.iter().map(|o| o.weight).collect();
        apply_event_modifiers(&mut enc, &event, &mut rng);
        let after: Vec<u32> = enc.choices[0].outcomes.iter().map(|o| o.weight).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn jitter_shift_stays_in_bounds_and_never_goes_negative() {
        let event = event_by_kind(EventKind::PortalFlux);
        for seed in 0..50 {
            let mut enc = fixture();
            let mut rng = SeedRng::new(seed);
            apply_event_modifiers(&mut enc, &event, &mut rng);
            let refuse_success = enc.choices[0].outcomes[0].weight;
            assert!(
                (50..=70).contains(&refuse_success),
                "refuse success weight {refuse_success}"
            );
            let comply_success = enc.choices[1].outcomes[0].weight;
            assert!((10..=30).contains(&comply_success));
        }
    }

    #[test]
    fn jitter_varies_across_applications() {
        let event = event_by_kind(EventKind::PortalFlux);
        let mut rng = SeedRng::new(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..30 {
            let mut enc = fixture();
            apply_event_modifiers(&mut enc, &event, &mut rng);
            seen.insert(enc.choices[0].outcomes[0].weight);
        }
        assert!(seen.len() > 3, "jitter looks frozen: {seen:?}");
    }

    #[test]
    fn multipliers_scale_matching_stats_only() {
        let mut enc = fixture();
        let mut rng = SeedRng::new(1);
        apply_event_modifiers(&mut enc, &event_by_kind(EventKind::SolarFlare), &mut rng);
        // energy -6 * 1.5 = -9; integrity untouched
        assert_eq!(enc.choices[1].outcomes[2].effects.energy, Some(-9));
        assert_eq!(enc.choices[1].outcomes[2].effects.integrity, Some(-10));
        assert!(enc.tags.contains(&"solar_flare".to_string()));
    }

    #[test]
    fn removal_never_empties_the_choice_set() {
        let event = event_by_kind(EventKind::QuarantineSweep);
        let mut rng = SeedRng::new(5);
        let mut enc = fixture();
        apply_event_modifiers(&mut enc, &event, &mut rng);
        assert_eq!(enc.choices.len(), 1);
        apply_event_modifiers(&mut enc, &event, &mut rng);
        assert_eq!(enc.choices.len(), 1, "last choice must survive");
    }

    #[test]
    fn reputation_multiplier_scales_deltas() {
        let mut enc = fixture();
        enc.choices[0].outcomes[0]
            .effects
            .add_reputation("wardens", 3);
        let mut rng = SeedRng::new(1);
        apply_event_modifiers(&mut enc, &event_by_kind(EventKind::FactionEnvoy), &mut rng);
        let rep = enc.choices[0].outcomes[0].effects.reputation.as_ref().unwrap();
        assert_eq!(rep["wardens"], 6);
    }
}
