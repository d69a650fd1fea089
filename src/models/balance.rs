// ============================================================================
// Structures : RawBalance / BalanceView
// ============================================================================
// Le solde agrégé arrive en texte décimal (il peut dépasser la précision
// d'un entier) et repart en trois chaînes monétaires pour les cartes.
// ============================================================================

use serde::Deserialize;

/// Solde brut reçu du service
///
/// Les trois champs sont des nombres décimaux encodés en texte.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBalance {
    pub income: String,

    pub outcome: String,

    pub total: String,
}

impl RawBalance {
    pub fn new(income: impl Into<String>, outcome: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            income: income.into(),
            outcome: outcome.into(),
            total: total.into(),
        }
    }

    /// Les trois champs dans l'ordre des cartes, avec leur nom
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("income", self.income.as_str()),
            ("outcome", self.outcome.as_str()),
            ("total", self.total.as_str()),
        ]
    }
}

/// Solde prêt pour les cartes de résumé
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceView {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_fields() {
        let json = r#"{ "income": "1000", "outcome": "300", "total": "700" }"#;
        let balance: RawBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance, RawBalance::new("1000", "300", "700"));
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let json = r#"{ "income": "1000", "outcome": "300" }"#;
        assert!(serde_json::from_str::<RawBalance>(json).is_err());
    }

    #[test]
    fn test_fields_order() {
        let balance = RawBalance::new("1", "2", "3");
        let names: Vec<_> = balance.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["income", "outcome", "total"]);
    }
}
