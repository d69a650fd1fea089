// ============================================================================
// Module : models
// ============================================================================
// Structures de données : ce que le service envoie et ce que la vue affiche
// ============================================================================

pub mod transaction; // RawTransaction, DisplayTransaction
pub mod balance;     // RawBalance, BalanceView

pub use balance::{BalanceView, RawBalance};
pub use transaction::{Category, DisplayTransaction, RawTransaction, TransactionType};
