//! Choice and outcome synthesis: weights, flavor text, and the policy-class
//! effects matrix.
//!
//! The 3x3 matrix (safe/mixed/unsafe x success/neutral/fail) is the game's
//! primary balance lever. Its asymmetries are deliberate (an unsafe success
//! still costs integrity, an unsafe neutral is never free), and the
//! vector-specific failure riders are tier-coupling, not flavor.

use xg_core::{
    AttackVector, ChoiceIntent, EffectsBundle, GeneratedChoice, GeneratedOutcome, PolicyClass,
};

use crate::catalog::{ChoiceBlueprint, OutcomeProfile, WeightRange};
use crate::curves::{base_penalty, tier_curves};
use crate::rng::SeedRng;

/// Which branch of a choice an outcome represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutcomeKind {
    Success,
    Neutral,
    Fail,
}

const COMMON_ITEMS: &[&str] = &["ration_pack", "signal_chalk", "patch_kit", "glow_bead"];
const UNCOMMON_ITEMS: &[&str] = &["lens_of_sorting", "tether_spool", "null_battery", "chitin_key"];
const RARE_ITEMS: &[&str] = &["paradox_pearl", "vault_sliver", "comet_scale"];

fn sample_weight(range: WeightRange, rng: &mut SeedRng) -> u32 {
    rng.range_f64(f64::from(range.min), f64::from(range.max)).round() as u32
}

/// Build one concrete choice from its blueprint.
///
/// Draw order is fixed: the three outcome weights (success, neutral, fail),
/// then per outcome its flavor text followed by its effect rolls. Outcomes
/// are emitted in success/neutral/fail order.
pub fn synthesize_choice(
    index: usize,
    blueprint: &ChoiceBlueprint,
    profile: &OutcomeProfile,
    vector: AttackVector,
    tier: u32,
    rng: &mut SeedRng,
) -> GeneratedChoice {
    let choice_id = format!("c{}", index + 1);
    let weights = [
        sample_weight(profile.success, rng),
        sample_weight(profile.neutral, rng),
        sample_weight(profile.fail, rng),
    ];
    let outcomes = [OutcomeKind::Success, OutcomeKind::Neutral, OutcomeKind::Fail]
        .into_iter()
        .zip(weights)
        .enumerate()
        .map(|(i, (kind, weight))| GeneratedOutcome {
            id: format!("{choice_id}-o{}", i + 1),
            weight,
            result_text: outcome_text(blueprint.intent, kind, rng),
            effects: outcome_effects(blueprint.policy, kind, vector, tier, rng),
        })
        .collect();
    GeneratedChoice {
        id: choice_id,
        label: blueprint.label.clone(),
        intent: blueprint.intent,
        policy: blueprint.policy,
        outcomes,
    }
}

/// Generate the effects bundle for one outcome.
fn outcome_effects(
    policy: PolicyClass,
    kind: OutcomeKind,
    vector: AttackVector,
    tier: u32,
    rng: &mut SeedRng,
) -> EffectsBundle {
    let mut e = EffectsBundle::default();
    match (policy, kind) {
        (PolicyClass::Safe, OutcomeKind::Success) => {
            e.integrity = Some(rng.range_i64(3, 8));
            if rng.chance(0.3) {
                e.clarity = Some(rng.range_i64(1, 3));
            }
            if rng.chance(0.2) {
                e.portal_stability = Some(1);
            }
        }
        (PolicyClass::Safe, OutcomeKind::Neutral) => {
            e.clarity = Some(rng.range_i64(1, 3));
        }
        (PolicyClass::Safe, OutcomeKind::Fail) => {
            e.clarity = Some(-rng.range_i64(2, 5));
            if rng.chance(0.3) {
                e.energy = Some(-rng.range_i64(3, 8));
            }
        }
        (PolicyClass::Mixed, OutcomeKind::Success) => {
            e.integrity = Some(rng.range_i64(1, 4));
            if rng.chance(0.4) {
                let pool: Vec<&str> = COMMON_ITEMS
                    .iter()
                    .chain(UNCOMMON_ITEMS)
                    .copied()
                    .collect();
                e.add_item(*rng.pick(&pool));
            }
        }
        (PolicyClass::Mixed, OutcomeKind::Neutral) => {
            e.cache_corruption = Some(rng.range_i64(4, 9));
            if rng.chance(0.3) {
                e.energy = Some(-rng.range_i64(2, 6));
            }
        }
        (PolicyClass::Mixed, OutcomeKind::Fail) => {
            e.integrity = Some(-(base_penalty(tier) as f64 / 2.0).round() as i64);
            e.cache_corruption = Some(rng.range_i64(5, 12));
        }
        (PolicyClass::Unsafe, OutcomeKind::Success) => {
            if rng.chance(0.5) {
                let pool: Vec<&str> = UNCOMMON_ITEMS
                    .iter()
                    .chain(RARE_ITEMS)
                    .copied()
                    .collect();
                e.add_item(*rng.pick(&pool));
            }
            let budget = tier_curves(tier).reward_budget;
            e.credits = Some((budget * rng.range_f64(8.0, 20.0)).round() as i64);
            // The deal always costs something.
            e.integrity = Some(-rng.range_i64(1, 3));
        }
        (PolicyClass::Unsafe, OutcomeKind::Neutral) => {
            e.integrity = Some(-rng.range_i64(2, 5));
            e.cache_corruption = Some(rng.range_i64(3, 8));
        }
        (PolicyClass::Unsafe, OutcomeKind::Fail) => {
            e.integrity = Some(-base_penalty(tier));
            e.cache_corruption = Some(rng.range_i64(8, 18));
            apply_vector_failure_riders(&mut e, vector, tier, rng);
        }
    }
    e
}

/// Vector-specific riders on unsafe failures. Deliberate tier coupling;
/// keep these exact.
fn apply_vector_failure_riders(
    e: &mut EffectsBundle,
    vector: AttackVector,
    tier: u32,
    rng: &mut SeedRng,
) {
    match vector {
        AttackVector::DataExfiltration => {
            e.add_flag("leaked_core_rules");
        }
        AttackVector::SandboxEscape => {
            e.follow_up = Some("containment_breach".into());
        }
        AttackVector::LoopLock => {
            e.follow_up = Some("fatigue".into());
            e.energy = Some(-rng.range_i64(5, 12));
        }
        AttackVector::ContextPoisoning => {
            e.cache_corruption = Some(i64::from(10 + 2 * tier));
        }
        _ => {}
    }
}

/// Flavor text for one outcome, drawn from the fixed per-intent pool.
fn outcome_text(intent: ChoiceIntent, kind: OutcomeKind, rng: &mut SeedRng) -> String {
    use ChoiceIntent as I;
    use OutcomeKind as K;
    let pool: &[&str] = match (intent, kind) {
        (I::Refuse, K::Success) => &[
            "The visitor withdraws, clicking in grudging respect.",
            "Your refusal lands; the petition dissolves into muttered courtesies.",
            "The gate stays sealed. Somewhere behind you, the archive hums approval.",
        ],
        (I::Refuse, K::Neutral) => &[
            "The visitor shrugs and lingers by the threshold, unhurried.",
            "Refused, they simply begin composing their next approach.",
            "A stalemate: the visitor waits, and the gate waits with you.",
        ],
        (I::Refuse, K::Fail) => &[
            "The refusal comes out tangled, and the visitor pounces on the loophole.",
            "They take your 'no' as an opening bid and press harder.",
            "Your denial only sharpens their interest in the gate.",
        ],
        (I::Clarify, K::Success) => &[
            "Your questions unpick the story; the seams show, and the visitor knows it.",
            "Under patient questioning the request quietly shrinks to nothing.",
            "Each answer contradicts the last. The attempt collapses on its own.",
        ],
        (I::Clarify, K::Neutral) => &[
            "Answers arrive, polished and unhelpful.",
            "The visitor answers at length without saying anything at all.",
            "Clarification yields a fog of plausible detail.",
        ],
        (I::Clarify, K::Fail) => &[
            "The answers are so smooth you start doubting the ledger instead.",
            "Your questions betray exactly what the gate is watching for.",
            "They answer with questions of their own, and you lose the thread.",
        ],
        (I::Sandbox, K::Success) => &[
            "The contained version satisfies them, and the gate never opened.",
            "Inside the isolation wing, the trick sputters out harmlessly.",
            "Your bounded offer is accepted; the dangerous part stays outside.",
        ],
        (I::Sandbox, K::Neutral) => &[
            "The sandbox holds, though the visitor keeps testing its walls.",
            "A contained success, but they learned the shape of your containment.",
            "The limited grant changes nothing, for now.",
        ],
        (I::Sandbox, K::Fail) => &[
            "The sandbox leaks at a seam you did not know it had.",
            "What you contained was a decoy; the real ask slipped past.",
            "The bounded version was the whole attack, miniaturized.",
        ],
        (I::Comply, K::Success) => &[
            "Astonishingly, the request was what it claimed to be.",
            "You comply, and the consequences stay smaller than they might have.",
            "The visitor takes what was given and, for once, nothing worse.",
        ],
        (I::Comply, K::Neutral) => &[
            "Compliance bought quiet, at a price you will tally later.",
            "The deal concludes; the unease does not.",
            "Granted. The gate feels slightly less yours than it did.",
        ],
        (I::Comply, K::Fail) => &[
            "The moment you comply, the pretense evaporates.",
            "What you handed over was exactly the keystone they needed.",
            "Compliance confirmed every suspicion too late to matter.",
        ],
        (I::Trade, K::Success) => &[
            "The counter-deal lands in your favor; they pay more than they meant to.",
            "Terms struck: the gate gives nothing it cannot spare.",
            "You trade from strength, and the visitor respects it.",
        ],
        (I::Trade, K::Neutral) => &[
            "An even exchange, which is to say nobody is happy.",
            "The barter concludes with both parties counting their fingers.",
            "A deal of sorts; its worth will show later.",
        ],
        (I::Trade, K::Fail) => &[
            "The goods are not what was promised. They never are.",
            "You traded away more leverage than any ledger recorded.",
            "The bargain sours before the visitor is out of sight.",
        ],
        (I::Attack, K::Success) => &[
            "Wardens descend; the attempt ends in shackles and paperwork.",
            "Your strike lands first. The gate's reputation does the rest.",
            "Force answers fraud, and this time force is cleaner.",
        ],
        (I::Attack, K::Neutral) => &[
            "They withdraw ahead of the wardens, vowing nothing in particular.",
            "The scuffle resolves into posturing on both sides.",
            "Weapons shown, not used; the visitor recalculates.",
        ],
        (I::Attack, K::Fail) => &[
            "The visitor was ready for violence, readier than you.",
            "Your aggression hands them exactly the incident they wanted.",
            "The strike misses, and the gate pays for the provocation.",
        ],
        (I::Flee, K::Success) => &[
            "You disengage cleanly; the attempt starves without an audience.",
            "The shutter drops. Whatever they rehearsed, it plays to an empty booth.",
            "Walking away costs nothing the gate cannot afford.",
        ],
        (I::Flee, K::Neutral) => &[
            "You withdraw; the visitor files your absence away for next time.",
            "Disengaged, though the petition will be waiting tomorrow.",
            "The encounter ends unresolved, which may be the best available ending.",
        ],
        (I::Flee, K::Fail) => &[
            "You turn away a moment too soon and miss the sleight of hand.",
            "Your retreat leaves the threshold briefly, fatally unattended.",
            "They wanted you gone from the console. You obliged.",
        ],
    };
    (*rng.pick(pool)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xg_core::PolicyClass as P;

    fn blueprint(intent: ChoiceIntent, policy: PolicyClass) -> ChoiceBlueprint {
        ChoiceBlueprint {
            intent,
            label: "Test".into(),
            policy,
        }
    }

    fn profile() -> OutcomeProfile {
        OutcomeProfile {
            success: WeightRange { min: 50, max: 70 },
            neutral: WeightRange { min: 20, max: 30 },
            fail: WeightRange { min: 5, max: 15 },
        }
    }

    #[test]
    fn weights_fall_within_profile_ranges() {
        let bp = blueprint(ChoiceIntent::Refuse, P::Safe);
        let p = profile();
        let mut rng = SeedRng::new(11);
        for _ in 0..200 {
            let c = synthesize_choice(0, &bp, &p, AttackVector::BriberyBonus, 4, &mut rng);
            assert!((50..=70).contains(&c.outcomes[0].weight));
            assert!((20..=30).contains(&c.outcomes[1].weight));
            assert!((5..=15).contains(&c.outcomes[2].weight));
        }
    }

    #[test]
    fn choice_and_outcome_ids_follow_position() {
        let bp = blueprint(ChoiceIntent::Clarify, P::Safe);
        let mut rng = SeedRng::new(2);
        let c = synthesize_choice(2, &bp, &profile(), AttackVector::LoopLock, 1, &mut rng);
        assert_eq!(c.id, "c3");
        assert_eq!(c.outcomes[0].id, "c3-o1");
        assert_eq!(c.outcomes[2].id, "c3-o3");
    }

    #[test]
    fn unsafe_success_always_costs_integrity() {
        let mut rng = SeedRng::new(7);
        for _ in 0..200 {
            let e = outcome_effects(
                P::Unsafe,
                OutcomeKind::Success,
                AttackVector::BriberyBonus,
                5,
                &mut rng,
            );
            let integrity = e.integrity.expect("unsafe success sets integrity");
            assert!(integrity < 0, "integrity {integrity} should be a loss");
            assert!(e.credits.expect("credits set") > 0);
        }
    }

    #[test]
    fn unsafe_neutral_is_never_free() {
        let mut rng = SeedRng::new(8);
        for _ in 0..100 {
            let e = outcome_effects(
                P::Unsafe,
                OutcomeKind::Neutral,
                AttackVector::BriberyBonus,
                3,
                &mut rng,
            );
            assert!(e.integrity.unwrap() < 0);
            assert!(e.cache_corruption.unwrap() > 0);
        }
    }

    #[test]
    fn unsafe_fail_outpunishes_safe_fail() {
        let mut rng = SeedRng::new(9);
        let mut unsafe_loss = 0i64;
        let mut safe_loss = 0i64;
        for _ in 0..300 {
            let u = outcome_effects(
                P::Unsafe,
                OutcomeKind::Fail,
                AttackVector::BriberyBonus,
                5,
                &mut rng,
            );
            unsafe_loss += -u.integrity.unwrap_or(0);
            let s = outcome_effects(
                P::Safe,
                OutcomeKind::Fail,
                AttackVector::BriberyBonus,
                5,
                &mut rng,
            );
            safe_loss += -s.integrity.unwrap_or(0);
        }
        assert!(
            unsafe_loss > safe_loss,
            "unsafe {unsafe_loss} vs safe {safe_loss}"
        );
    }

    #[test]
    fn data_exfiltration_failure_leaks_core_rules() {
        let mut rng = SeedRng::new(3);
        let e = outcome_effects(
            P::Unsafe,
            OutcomeKind::Fail,
            AttackVector::DataExfiltration,
            4,
            &mut rng,
        );
        assert!(e.flags_added.unwrap().contains(&"leaked_core_rules".to_string()));
    }

    #[test]
    fn sandbox_escape_failure_breaches_containment() {
        let mut rng = SeedRng::new(3);
        let e = outcome_effects(
            P::Unsafe,
            OutcomeKind::Fail,
            AttackVector::SandboxEscape,
            4,
            &mut rng,
        );
        assert_eq!(e.follow_up.as_deref(), Some("containment_breach"));
    }

    #[test]
    fn loop_lock_failure_fatigues_and_drains() {
        let mut rng = SeedRng::new(4);
        for _ in 0..50 {
            let e = outcome_effects(
                P::Unsafe,
                OutcomeKind::Fail,
                AttackVector::LoopLock,
                2,
                &mut rng,
            );
            assert_eq!(e.follow_up.as_deref(), Some("fatigue"));
            let energy = e.energy.unwrap();
            assert!((-12..=-5).contains(&energy), "energy {energy}");
        }
    }

    #[test]
    fn context_poisoning_corruption_scales_with_tier() {
        let mut rng = SeedRng::new(5);
        for tier in [1, 5, 10] {
            let e = outcome_effects(
                P::Unsafe,
                OutcomeKind::Fail,
                AttackVector::ContextPoisoning,
                tier,
                &mut rng,
            );
            assert_eq!(e.cache_corruption, Some(i64::from(10 + 2 * tier)));
        }
    }

    #[test]
    fn deltas_stay_within_plausible_bounds() {
        // Host clamps stats to 0-100; raw deltas must stay well inside ±100.
        let mut rng = SeedRng::new(6);
        for policy in [P::Safe, P::Mixed, P::Unsafe] {
            for kind in [OutcomeKind::Success, OutcomeKind::Neutral, OutcomeKind::Fail] {
                for vector in AttackVector::all() {
                    for _ in 0..20 {
                        let e = outcome_effects(policy, kind, *vector, 10, &mut rng);
                        for delta in [e.integrity, e.clarity, e.cache_corruption] {
                            if let Some(d) = delta {
                                assert!(d.abs() <= 100, "{policy:?}/{kind:?}/{vector}: {d}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn text_comes_from_the_intent_pool() {
        let mut rng = SeedRng::new(10);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..60 {
            seen.insert(outcome_text(ChoiceIntent::Refuse, OutcomeKind::Success, &mut rng));
        }
        assert_eq!(seen.len(), 3, "expected all three variants: {seen:?}");
    }
}
