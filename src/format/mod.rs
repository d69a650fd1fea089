// ============================================================================
// Module : format
// ============================================================================
// Règles de présentation : montants en devise locale et dates DD/MM/YYYY
// ============================================================================

pub mod value; // Formatage monétaire (R$ 1.234,56)
pub mod date;  // Parsing ISO-8601 et composition DD/MM/YYYY

pub use date::{format_date, DateParseError, DateParser, Iso8601Parser};
pub use value::{format_value, parse_integer, CurrencyFormat, ValueFormatter};
