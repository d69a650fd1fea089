// ============================================================================
// Structures : RawTransaction / DisplayTransaction
// ============================================================================
// RawTransaction : transaction telle que reçue de GET /transactions
// DisplayTransaction : la même, enrichie des champs prêts à afficher
//
// CONCEPTS RUST :
// 1. #[serde(rename = "type")] : "type" est un mot-clé réservé en Rust
// 2. #[serde(rename_all = "lowercase")] : "income" / "outcome" sur le fil
// 3. Enum plutôt que String pour le type : le compilateur vérifie les cas
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Sens d'une transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,  // Entrée
    Outcome, // Sortie
}

impl TransactionType {
    pub fn is_outcome(&self) -> bool {
        matches!(self, TransactionType::Outcome)
    }
}

/// Catégorie d'une transaction (seul le titre est affiché)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub title: String,
}

/// Transaction brute reçue du service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTransaction {
    pub id: String,

    pub title: String,

    /// Montant en unité de base (pas en centimes)
    pub value: f64,

    /// Champ JSON "type" (mot-clé réservé en Rust)
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub category: Category,

    /// Horodatage ISO-8601, encore en texte
    pub created_at: String,
}

/// Transaction prête pour l'affichage
///
/// `formatted_value` ne dépend que de `value`, `formatted_date` que de
/// `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransaction {
    pub id: String,
    pub title: String,
    pub value: f64,
    pub transaction_type: TransactionType,
    pub category: Category,

    /// Horodatage parsé (remplace la chaîne brute)
    pub created_at: DateTime<Utc>,

    /// Montant formaté en devise (ex: "R$ 1.234,56")
    pub formatted_value: String,

    /// Date formatée "DD/MM/YYYY"
    pub formatted_date: String,
}

impl DisplayTransaction {
    /// Texte de la cellule "Preço" dans le tableau
    ///
    /// Une sortie est préfixée par "- ", quel que soit le signe de `value` :
    /// seul le type décide.
    pub fn value_cell(&self) -> String {
        if self.transaction_type.is_outcome() {
            format!("- {}", self.formatted_value)
        } else {
            self.formatted_value.clone()
        }
    }

    pub fn is_outcome(&self) -> bool {
        self.transaction_type.is_outcome()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
