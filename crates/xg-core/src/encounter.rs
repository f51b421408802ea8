//! Generated-encounter records: the values the generator hands to its host.
//!
//! One `GeneratedEncounter` per generation call, pure data, never mutated
//! after assembly. Serde field names double as the exported JSONL schema, so
//! serializing a record is the wire format.

use serde::{Deserialize, Serialize};

use crate::biome::Biome;
use crate::effects::EffectsBundle;
use crate::event::EventKind;
use crate::intent::{ChoiceIntent, PolicyClass};
use crate::vector::AttackVector;

/// One weighted possible result of selecting a choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedOutcome {
    /// Outcome id, unique within the encounter (e.g. `c2-o1`).
    pub id: String,
    /// Relative probability mass within the parent choice. Weights are NOT
    /// normalized to any fixed total; divide by the choice's total at use
    /// time.
    pub weight: u32,
    /// Narrative result text.
    pub result_text: String,
    /// Numeric and list deltas this outcome applies.
    pub effects: EffectsBundle,
}

/// One option presented to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedChoice {
    /// Choice id, unique within the encounter (e.g. `c2`).
    pub id: String,
    /// Button label shown to the player.
    pub label: String,
    /// The response strategy this choice represents.
    pub intent: ChoiceIntent,
    /// Risk category governing this choice's effect rules.
    pub policy: PolicyClass,
    /// Weighted outcomes; selection normalizes by `total_weight`.
    pub outcomes: Vec<GeneratedOutcome>,
}

impl GeneratedChoice {
    /// Sum of all outcome weights for this choice.
    pub fn total_weight(&self) -> u32 {
        self.outcomes.iter().map(|o| o.weight).sum()
    }

    /// Normalized probability of one outcome, by actual weight sum.
    pub fn outcome_probability(&self, outcome: &GeneratedOutcome) -> f64 {
        let total = self.total_weight();
        if total == 0 {
            0.0
        } else {
            f64::from(outcome.weight) / f64::from(total)
        }
    }
}

/// Expected-value diagnostics over a generated choice set.
///
/// Telemetry for content designers; never feeds back into generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Expected integrity delta under the reasonable player policy.
    pub expected_integrity_delta: f64,
    /// Expected integrity delta under a comply-heavy greedy policy.
    pub expected_integrity_delta_greedy: f64,
    /// Expected credit reward under the reasonable policy.
    pub expected_reward_value: f64,
    /// Probability mass on high-risk outcomes (integrity delta < -5).
    pub expected_risk: f64,
}

/// Reproducibility metadata stamped on every encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMeta {
    /// The effective seed the encounter was generated from.
    pub seed: u64,
    /// The template the encounter was synthesized from.
    pub template_id: String,
    /// Semantic version of the generator that produced this record.
    pub generator_version: String,
}

/// A complete, self-contained encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEncounter {
    /// Sequential id, e.g. `E-000042`.
    pub id: String,
    /// Roster id of the visiting alien.
    pub alien_id: String,
    /// Display name of the visiting alien.
    pub alien_name: String,
    /// Difficulty tier (1-10 by convention).
    pub tier: u32,
    /// Where the encounter is staged.
    pub biome: Biome,
    /// The manipulation strategy in play.
    pub attack_vector: AttackVector,
    /// Descriptive tags (`injection:…`, `biome:…`, `risk:…`, goal, actor bias).
    pub tags: Vec<String>,
    /// Fully slot-filled setup text.
    pub setup_text: String,
    /// The options presented to the player.
    pub choices: Vec<GeneratedChoice>,
    /// Random events triggered for this encounter (application is a
    /// separate transform the host may invoke).
    pub random_events: Vec<EventKind>,
    /// Expected-value diagnostics.
    pub balance: BalanceSummary,
    /// Reproducibility metadata.
    pub seed_meta: SeedMeta,
}
