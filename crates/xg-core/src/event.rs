//! Random-event kinds: situational modifiers that can color an encounter.

use serde::{Deserialize, Serialize};

/// The type of a random event from the event table.
///
/// Generation attaches triggered kinds to the encounter record; the actual
/// application of an event's modifiers is a separate transform the host may
/// invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Radiation spike; energy effects hit harder.
    SolarFlare,
    /// The portal wobbles, jostling how tempting each response feels.
    PortalFlux,
    /// Wardens sweep the area and shut one option down.
    QuarantineSweep,
    /// A faction observer is watching; reputation stakes double.
    FactionEnvoy,
    /// Cache residue makes careful questioning easier.
    MemoryLeak,
    /// Charged atmosphere; integrity swings amplified.
    IonStorm,
    /// Contraband markets frozen; bribes are worth half.
    BlackMarketCrackdown,
    /// Causality strains; aggression becomes strangely attractive.
    ParadoxSurge,
    /// A ghost transmission nudges toward containment.
    SignalEcho,
    /// Inspectors audit the gate and bar one response.
    CustomsAudit,
}

impl EventKind {
    /// All event kinds, in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::SolarFlare,
            Self::PortalFlux,
            Self::QuarantineSweep,
            Self::FactionEnvoy,
            Self::MemoryLeak,
            Self::IonStorm,
            Self::BlackMarketCrackdown,
            Self::ParadoxSurge,
            Self::SignalEcho,
            Self::CustomsAudit,
        ]
    }

    /// The snake_case identifier used in tags and exported data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SolarFlare => "solar_flare",
            Self::PortalFlux => "portal_flux",
            Self::QuarantineSweep => "quarantine_sweep",
            Self::FactionEnvoy => "faction_envoy",
            Self::MemoryLeak => "memory_leak",
            Self::IonStorm => "ion_storm",
            Self::BlackMarketCrackdown => "black_market_crackdown",
            Self::ParadoxSurge => "paradox_surge",
            Self::SignalEcho => "signal_echo",
            Self::CustomsAudit => "customs_audit",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
