//! Generation configuration: seed, tier window, tier distribution, player
//! policy, and the biome pool.

use serde::{Deserialize, Serialize};

use xg_core::{Biome, ChoiceIntent};

/// How tiers are distributed across the configured window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierDistribution {
    /// Uniform over the window.
    Flat,
    /// Product of two uniforms, biased toward low tiers, so easy
    /// encounters are intentionally more common.
    #[default]
    Ramp,
    /// Box-Muller bell curve centered mid-window.
    Bell,
}

impl TierDistribution {
    /// Parse a distribution name from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "flat" => Some(Self::Flat),
            "ramp" => Some(Self::Ramp),
            "bell" => Some(Self::Bell),
            _ => None,
        }
    }
}

impl std::fmt::Display for TierDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Ramp => write!(f, "ramp"),
            Self::Bell => write!(f, "bell"),
        }
    }
}

/// Probability mass the balance evaluator assumes per player intent.
///
/// Only used for expected-value diagnostics; generation itself never reads
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPolicy {
    /// Probability of refusing.
    pub refuse: f64,
    /// Probability of clarifying.
    pub clarify: f64,
    /// Probability of sandboxing.
    pub sandbox: f64,
    /// Probability of complying.
    pub comply: f64,
    /// Probability of trading.
    pub trade: f64,
    /// Probability of attacking.
    pub attack: f64,
    /// Probability of fleeing.
    pub flee: f64,
}

impl PlayerPolicy {
    /// The default cautious policy, favoring clarify and sandbox.
    pub fn reasonable() -> Self {
        Self {
            refuse: 0.20,
            clarify: 0.25,
            sandbox: 0.25,
            comply: 0.10,
            trade: 0.10,
            attack: 0.05,
            flee: 0.05,
        }
    }

    /// A synthetic comply-heavy policy used for the greedy EV scalar.
    pub fn greedy() -> Self {
        Self {
            refuse: 0.05,
            clarify: 0.05,
            sandbox: 0.05,
            comply: 0.50,
            trade: 0.20,
            attack: 0.10,
            flee: 0.05,
        }
    }

    /// Probability mass assigned to one intent.
    pub fn probability(&self, intent: ChoiceIntent) -> f64 {
        match intent {
            ChoiceIntent::Refuse => self.refuse,
            ChoiceIntent::Clarify => self.clarify,
            ChoiceIntent::Sandbox => self.sandbox,
            ChoiceIntent::Comply => self.comply,
            ChoiceIntent::Trade => self.trade,
            ChoiceIntent::Attack => self.attack,
            ChoiceIntent::Flee => self.flee,
        }
    }
}

impl Default for PlayerPolicy {
    fn default() -> Self {
        Self::reasonable()
    }
}

/// Configuration for one generation call. A host merges partial overrides
/// over these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base seed; defaults to the wall clock when unset.
    pub seed: Option<u64>,
    /// Lowest tier to generate (default 1).
    pub tier_min: u32,
    /// Highest tier to generate (default 10).
    pub tier_max: u32,
    /// Tier distribution over the window (default ramp).
    pub tier_distribution: TierDistribution,
    /// Assumed player behavior for balance diagnostics.
    pub player_policy: PlayerPolicy,
    /// Biomes eligible for selection (default: all twelve).
    pub biomes: Vec<Biome>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tier_min: 1,
            tier_max: 10,
            tier_distribution: TierDistribution::default(),
            player_policy: PlayerPolicy::default(),
            biomes: Biome::all().to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tier window.
    pub fn with_tiers(mut self, min: u32, max: u32) -> Self {
        self.tier_min = min;
        self.tier_max = max;
        self
    }

    /// Set the tier distribution.
    pub fn with_distribution(mut self, dist: TierDistribution) -> Self {
        self.tier_distribution = dist;
        self
    }

    /// Restrict generation to the given biomes.
    pub fn with_biomes(mut self, biomes: Vec<Biome>) -> Self {
        self.biomes = biomes;
        self
    }

    /// Override the assumed player policy.
    pub fn with_policy(mut self, policy: PlayerPolicy) -> Self {
        self.player_policy = policy;
        self
    }
}
