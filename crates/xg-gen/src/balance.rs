//! Expected-value diagnostics over a generated choice set.
//!
//! Purely telemetry for content designers; the result never feeds back
//! into generation. Probabilities always normalize by each choice's actual
//! weight sum; nothing assumes weights total 100.

use xg_core::{BalanceSummary, GeneratedChoice};

use crate::config::PlayerPolicy;

/// An outcome counts as high-risk when it costs this much integrity.
const HIGH_RISK_INTEGRITY: i64 = -5;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Compute the four expected-value scalars for a choice set under the given
/// assumed player policy (plus the fixed greedy override).
pub fn evaluate_balance(choices: &[GeneratedChoice], policy: &PlayerPolicy) -> BalanceSummary {
    let greedy = PlayerPolicy::greedy();
    let mut ev_integrity = 0.0;
    let mut ev_integrity_greedy = 0.0;
    let mut ev_reward = 0.0;
    let mut risk_mass = 0.0;

    for choice in choices {
        let p_reasonable = policy.probability(choice.intent);
        let p_greedy = greedy.probability(choice.intent);
        for outcome in &choice.outcomes {
            let p_outcome = choice.outcome_probability(outcome);
            let integrity = outcome.effects.integrity.unwrap_or(0) as f64;
            let credits = outcome.effects.credits.unwrap_or(0) as f64;
            ev_integrity += p_reasonable * p_outcome * integrity;
            ev_integrity_greedy += p_greedy * p_outcome * integrity;
            ev_reward += p_reasonable * p_outcome * credits;
            if outcome.effects.integrity.unwrap_or(0) < HIGH_RISK_INTEGRITY {
                risk_mass += p_reasonable * p_outcome;
            }
        }
    }

    BalanceSummary {
        expected_integrity_delta: round1(ev_integrity),
        expected_integrity_delta_greedy: round1(ev_integrity_greedy),
        expected_reward_value: round1(ev_reward),
        expected_risk: round2(risk_mass),
    }
}
