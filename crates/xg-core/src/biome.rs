//! Biomes: the locations around the portal where encounters take place.

use serde::{Deserialize, Serialize};

/// A location in which an encounter is staged.
///
/// The archive vault is the portal gate itself; every encounter template
/// lists it, so a host restricting generation to the vault always finds a
/// matching template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biome {
    /// The sealed records hall behind the portal gate.
    ArchiveVault,
    /// A crowded market strip of off-world traders.
    NeonBazaar,
    /// The customs docks where ships tether and unload.
    OrbitalDock,
    /// Overgrown spore woods the quarantine never fully cleared.
    FungalForest,
    /// Glittering badlands of resonant crystal.
    CrystalWastes,
    /// A flooded data-center lagoon, servers humming underwater.
    DataLagoon,
    /// Canyons of scrapped hulls and oxidized machinery.
    RustCanyon,
    /// An abandoned shrine to the portal's builders.
    VoidTemple,
    /// Frozen greenhouses preserving pre-breach flora.
    CryoGardens,
    /// The transmitter spire relaying traffic between worlds.
    SignalSpire,
    /// A black-glass reef grown from cooled portal slag.
    ObsidianReef,
    /// The cordoned sector where breaches are contained.
    QuarantineZone,
}

impl Biome {
    /// All biomes, in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::ArchiveVault,
            Self::NeonBazaar,
            Self::OrbitalDock,
            Self::FungalForest,
            Self::CrystalWastes,
            Self::DataLagoon,
            Self::RustCanyon,
            Self::VoidTemple,
            Self::CryoGardens,
            Self::SignalSpire,
            Self::ObsidianReef,
            Self::QuarantineZone,
        ]
    }

    /// Parse a biome from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").trim() {
            "archive_vault" => Some(Self::ArchiveVault),
            "neon_bazaar" => Some(Self::NeonBazaar),
            "orbital_dock" => Some(Self::OrbitalDock),
            "fungal_forest" => Some(Self::FungalForest),
            "crystal_wastes" => Some(Self::CrystalWastes),
            "data_lagoon" => Some(Self::DataLagoon),
            "rust_canyon" => Some(Self::RustCanyon),
            "void_temple" => Some(Self::VoidTemple),
            "cryo_gardens" => Some(Self::CryoGardens),
            "signal_spire" => Some(Self::SignalSpire),
            "obsidian_reef" => Some(Self::ObsidianReef),
            "quarantine_zone" => Some(Self::QuarantineZone),
            _ => None,
        }
    }

    /// The snake_case identifier used in tags and exported data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArchiveVault => "archive_vault",
            Self::NeonBazaar => "neon_bazaar",
            Self::OrbitalDock => "orbital_dock",
            Self::FungalForest => "fungal_forest",
            Self::CrystalWastes => "crystal_wastes",
            Self::DataLagoon => "data_lagoon",
            Self::RustCanyon => "rust_canyon",
            Self::VoidTemple => "void_temple",
            Self::CryoGardens => "cryo_gardens",
            Self::SignalSpire => "signal_spire",
            Self::ObsidianReef => "obsidian_reef",
            Self::QuarantineZone => "quarantine_zone",
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_biomes() {
        assert_eq!(Biome::all().len(), 12);
    }

    #[test]
    fn parse_round_trips_every_biome() {
        for b in Biome::all() {
            assert_eq!(Biome::parse(b.as_str()), Some(*b));
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Biome::ArchiveVault).unwrap();
        assert_eq!(json, "\"archive_vault\"");
    }
}
