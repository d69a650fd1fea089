// ============================================================================
// Module : api
// ============================================================================
// Client HTTP du service de transactions
// ============================================================================

pub mod transactions; // GET /transactions

pub use transactions::{fetch_transactions, parse_transactions_response, TransactionsResponse};
