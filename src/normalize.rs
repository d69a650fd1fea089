// ============================================================================
// TransactionNormalizer
// ============================================================================
// Transforme la réponse brute du service en données prêtes à afficher :
// - chaque transaction reçoit formatted_value et formatted_date
// - le solde devient trois chaînes monétaires
//
// La transformation est pure et "tout ou rien" : une seule date ou un seul
// solde illisible et aucune sortie partielle n'est produite.
//
// CONCEPTS RUST :
// 1. Generics avec valeur par défaut : Normalizer<P = Iso8601Parser>
// 2. collect::<Result<Vec<_>, _>>() : s'arrête à la première erreur
// 3. thiserror : #[source] chaîne l'erreur de parsing
// ============================================================================

use thiserror::Error;

use crate::format::{format_date, parse_integer, DateParseError, DateParser, Iso8601Parser, ValueFormatter};
use crate::models::{BalanceView, DisplayTransaction, RawBalance, RawTransaction};

/// Résultat de la normalisation : ce que le dashboard affiche
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Dans l'ordre reçu du service (aucun tri)
    pub transactions: Vec<DisplayTransaction>,
    pub balance: BalanceView,
}

/// Entrée que la normalisation refuse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("transaction {id} : {source}")]
    InvalidDate {
        id: String,
        #[source]
        source: DateParseError,
    },

    #[error("solde {field} : aucun entier lisible dans {raw:?}")]
    InvalidBalance { field: &'static str, raw: String },
}

/// Normaliseur : formateur monétaire + parseur de dates
#[derive(Debug, Clone, Default)]
pub struct Normalizer<P = Iso8601Parser> {
    formatter: ValueFormatter,
    parser: P,
}

impl<P: DateParser> Normalizer<P> {
    pub fn new(formatter: ValueFormatter, parser: P) -> Self {
        Self { formatter, parser }
    }

    /// Normalise transactions et solde
    pub fn normalize(
        &self,
        raw_transactions: &[RawTransaction],
        raw_balance: &RawBalance,
    ) -> Result<Dashboard, NormalizeError> {
        let transactions = raw_transactions
            .iter()
            .map(|raw| self.normalize_transaction(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let balance = self.normalize_balance(raw_balance)?;

        Ok(Dashboard { transactions, balance })
    }

    /// Enrichit une transaction de ses champs formatés
    pub fn normalize_transaction(&self, raw: &RawTransaction) -> Result<DisplayTransaction, NormalizeError> {
        let created_at = self
            .parser
            .parse_iso8601(&raw.created_at)
            .map_err(|source| NormalizeError::InvalidDate {
                id: raw.id.clone(),
                source,
            })?;

        Ok(DisplayTransaction {
            id: raw.id.clone(),
            title: raw.title.clone(),
            value: raw.value,
            transaction_type: raw.transaction_type,
            category: raw.category.clone(),
            created_at,
            formatted_value: self.formatter.format(raw.value),
            formatted_date: format_date(&created_at),
        })
    }

    /// Parse entier (troncature) puis formatage de chaque champ du solde
    ///
    /// Les soldes restent en `Decimal` de bout en bout : aucun chiffre n'est
    /// perdu, même au-delà de 2^53.
    pub fn normalize_balance(&self, raw: &RawBalance) -> Result<BalanceView, NormalizeError> {
        let [income, outcome, total] = raw.fields().map(|(field, text)| {
            parse_integer(text)
                .map(|amount| self.formatter.format_decimal(amount))
                .ok_or_else(|| NormalizeError::InvalidBalance {
                    field,
                    raw: text.to_string(),
                })
        });

        Ok(BalanceView {
            income: income?,
            outcome: outcome?,
            total: total?,
        })
    }
}

/// Normalise avec le formateur BRL et le parseur ISO-8601 par défaut
pub fn normalize(
    raw_transactions: &[RawTransaction],
    raw_balance: &RawBalance,
) -> Result<Dashboard, NormalizeError> {
    Normalizer::<Iso8601Parser>::default().normalize(raw_transactions, raw_balance)
}

// ============================================================================
// Tests unitaires
// ============================================================================
