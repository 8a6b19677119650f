//! The fixed set of axioms every article is scored against.

use serde::{Deserialize, Serialize};

/// Highest score an article can receive on a single axiom.
pub const MAX_AXIOM_SCORE: u8 = 3;

/// One of the seven thematic dimensions.
///
/// Declaration order is the canonical display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axiom {
    AttentionEconomy,
    DataSovereignty,
    PowerConsolidation,
    CoercionCooperation,
    FearTrust,
    Democratization,
    SystemicDesign,
}

impl Axiom {
    /// All axioms in display order.
    pub const ALL: [Axiom; 7] = [
        Axiom::AttentionEconomy,
        Axiom::DataSovereignty,
        Axiom::PowerConsolidation,
        Axiom::CoercionCooperation,
        Axiom::FearTrust,
        Axiom::Democratization,
        Axiom::SystemicDesign,
    ];

    /// Key used in the data document and in the query string.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AttentionEconomy => "attention_economy",
            Self::DataSovereignty => "data_sovereignty",
            Self::PowerConsolidation => "power_consolidation",
            Self::CoercionCooperation => "coercion_cooperation",
            Self::FearTrust => "fear_trust",
            Self::Democratization => "democratization",
            Self::SystemicDesign => "systemic_design",
        }
    }

    /// Display name for UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AttentionEconomy => "Attention Economy",
            Self::DataSovereignty => "Data Sovereignty",
            Self::PowerConsolidation => "Power Consolidation",
            Self::CoercionCooperation => "Coercion vs. Cooperation",
            Self::FearTrust => "Fear vs. Trust",
            Self::Democratization => "Democratization",
            Self::SystemicDesign => "Systemic Design",
        }
    }

    /// Parse from a key. Exact match only.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

impl std::fmt::Display for Axiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        for axiom in Axiom::ALL {
            assert_eq!(Axiom::from_key(axiom.key()), Some(axiom));
        }
    }

    #[test]
    fn unknown_key() {
        assert_eq!(Axiom::from_key("privacy"), None);
        assert_eq!(Axiom::from_key("Fear_Trust"), None);
        assert_eq!(Axiom::from_key(""), None);
    }

    #[test]
    fn ordering_follows_display_order() {
        let mut shuffled = vec![Axiom::SystemicDesign, Axiom::AttentionEconomy, Axiom::FearTrust];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Axiom::AttentionEconomy, Axiom::FearTrust, Axiom::SystemicDesign]
        );
    }

    #[test]
    fn serde_uses_keys() {
        let json = serde_json::to_string(&Axiom::CoercionCooperation).unwrap();
        assert_eq!(json, "\"coercion_cooperation\"");
    }
}
