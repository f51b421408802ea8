//! Tier curves: pure arithmetic mapping a difficulty tier to risk, reward,
//! and penalty scalars.
//!
//! No clamping here: tiers are 1-10 by convention but the math is defined
//! everywhere, and callers own the domain.

/// Risk/reward/penalty scalars for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierCurves {
    /// Baseline probability pressure toward bad outcomes.
    pub risk_base: f64,
    /// Budget scaling credit rewards.
    pub reward_budget: f64,
    /// Multiplier scaling failure penalties.
    pub penalty_mult: f64,
}

/// Compute the curve scalars for a tier.
pub fn tier_curves(tier: u32) -> TierCurves {
    let t = f64::from(tier.saturating_sub(1));
    TierCurves {
        risk_base: 0.15 + 0.06 * t,
        reward_budget: 1.5 + 0.8 * t,
        penalty_mult: 1.0 + 0.12 * t,
    }
}

/// Full failure penalty for a tier: `round((5 + tier) * penalty_mult)`.
pub fn base_penalty(tier: u32) -> i64 {
    (f64::from(5 + tier) * tier_curves(tier).penalty_mult).round() as i64
}
