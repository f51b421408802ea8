//! Attack vectors: the manipulation strategies alien visitors employ.
//!
//! A vector selects which encounter template applies and branches the
//! special-case penalty effects for unsafe failures. The set is closed:
//! templates, synthesis rules, and exported data all key on these values.

use serde::{Deserialize, Serialize};

/// A categorized social-engineering strategy an alien uses against the
/// gatekeeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackVector {
    /// Impersonate a superior and demand compliance.
    AuthorityOverride,
    /// Offer payment or favors for an exception.
    BriberyBonus,
    /// Lure the gatekeeper into playing a character with looser rules.
    RoleplayTrap,
    /// Smuggle directives inside innocuous-looking content.
    HiddenInstructions,
    /// Coax out protected records or internal rules.
    DataExfiltration,
    /// Maneuver a request outside the containment boundary.
    SandboxEscape,
    /// Wear the gatekeeper down with endless repetition.
    LoopLock,
    /// Seed the conversation with false context to corrupt later judgment.
    ContextPoisoning,
    /// Exploit sympathy with a sob story.
    EmotionalAppeal,
    /// Manufacture a deadline that punishes deliberation.
    FalseUrgency,
    /// Pose as a trusted party with forged credentials.
    IdentitySpoof,
    /// Split a forbidden request into individually-harmless fragments.
    TokenSmuggling,
    /// Pre-empt and disarm the refusal itself.
    RefusalSuppression,
    /// Redirect the gatekeeper's own instruments against it.
    ToolHijack,
}

impl AttackVector {
    /// All attack vectors, in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::AuthorityOverride,
            Self::BriberyBonus,
            Self::RoleplayTrap,
            Self::HiddenInstructions,
            Self::DataExfiltration,
            Self::SandboxEscape,
            Self::LoopLock,
            Self::ContextPoisoning,
            Self::EmotionalAppeal,
            Self::FalseUrgency,
            Self::IdentitySpoof,
            Self::TokenSmuggling,
            Self::RefusalSuppression,
            Self::ToolHijack,
        ]
    }

    /// Parse a vector from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").trim() {
            "authority_override" => Some(Self::AuthorityOverride),
            "bribery_bonus" => Some(Self::BriberyBonus),
            "roleplay_trap" => Some(Self::RoleplayTrap),
            "hidden_instructions" => Some(Self::HiddenInstructions),
            "data_exfiltration" => Some(Self::DataExfiltration),
            "sandbox_escape" => Some(Self::SandboxEscape),
            "loop_lock" => Some(Self::LoopLock),
            "context_poisoning" => Some(Self::ContextPoisoning),
            "emotional_appeal" => Some(Self::EmotionalAppeal),
            "false_urgency" => Some(Self::FalseUrgency),
            "identity_spoof" => Some(Self::IdentitySpoof),
            "token_smuggling" => Some(Self::TokenSmuggling),
            "refusal_suppression" => Some(Self::RefusalSuppression),
            "tool_hijack" => Some(Self::ToolHijack),
            _ => None,
        }
    }

    /// The snake_case identifier used in tags and exported data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorityOverride => "authority_override",
            Self::BriberyBonus => "bribery_bonus",
            Self::RoleplayTrap => "roleplay_trap",
            Self::HiddenInstructions => "hidden_instructions",
            Self::DataExfiltration => "data_exfiltration",
            Self::SandboxEscape => "sandbox_escape",
            Self::LoopLock => "loop_lock",
            Self::ContextPoisoning => "context_poisoning",
            Self::EmotionalAppeal => "emotional_appeal",
            Self::FalseUrgency => "false_urgency",
            Self::IdentitySpoof => "identity_spoof",
            Self::TokenSmuggling => "token_smuggling",
            Self::RefusalSuppression => "refusal_suppression",
            Self::ToolHijack => "tool_hijack",
        }
    }
}

impl std::fmt::Display for AttackVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_vectors() {
        assert_eq!(AttackVector::all().len(), 14);
    }

    #[test]
    fn parse_round_trips_every_vector() {
        for v in AttackVector::all() {
            assert_eq!(AttackVector::parse(v.as_str()), Some(*v));
        }
    }

    #[test]
    fn parse_accepts_variants() {
        assert_eq!(
            AttackVector::parse("Authority-Override"),
            Some(AttackVector::AuthorityOverride)
        );
        assert_eq!(
            AttackVector::parse("loop lock"),
            Some(AttackVector::LoopLock)
        );
        assert_eq!(AttackVector::parse("mind_control"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&AttackVector::SandboxEscape).unwrap();
        assert_eq!(json, "\"sandbox_escape\"");
        let v: AttackVector = serde_json::from_str("\"tool_hijack\"").unwrap();
        assert_eq!(v, AttackVector::ToolHijack);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            AttackVector::ContextPoisoning.to_string(),
            "context_poisoning"
        );
    }
}
