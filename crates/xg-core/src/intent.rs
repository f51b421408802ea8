//! Player response intents and the risk policy classes attached to choices.

use serde::{Deserialize, Serialize};

/// The player's response strategy for a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceIntent {
    /// Decline the request outright.
    Refuse,
    /// Ask probing questions before committing.
    Clarify,
    /// Grant a limited, contained version of the request.
    Sandbox,
    /// Do what the visitor asks.
    Comply,
    /// Negotiate something in return.
    Trade,
    /// Escalate to force.
    Attack,
    /// Disengage and leave.
    Flee,
}

impl ChoiceIntent {
    /// All intents, in canonical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Refuse,
            Self::Clarify,
            Self::Sandbox,
            Self::Comply,
            Self::Trade,
            Self::Attack,
            Self::Flee,
        ]
    }

    /// The snake_case identifier used in exported data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refuse => "refuse",
            Self::Clarify => "clarify",
            Self::Sandbox => "sandbox",
            Self::Comply => "comply",
            Self::Trade => "trade",
            Self::Attack => "attack",
            Self::Flee => "flee",
        }
    }
}

impl std::fmt::Display for ChoiceIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A choice's risk category, which determines its effect-generation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyClass {
    /// Low risk, modest reward.
    Safe,
    /// Some upside, some exposure.
    Mixed,
    /// High reward, and something is always lost.
    Unsafe,
}

impl PolicyClass {
    /// The snake_case identifier used in exported data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Mixed => "mixed",
            Self::Unsafe => "unsafe",
        }
    }
}

impl std::fmt::Display for PolicyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_intents() {
        assert_eq!(ChoiceIntent::all().len(), 7);
    }

    #[test]
    fn intent_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ChoiceIntent::Sandbox).unwrap(),
            "\"sandbox\""
        );
    }

    #[test]
    fn policy_display() {
        assert_eq!(PolicyClass::Unsafe.to_string(), "unsafe");
        assert_eq!(PolicyClass::Safe.to_string(), "safe");
    }
}
