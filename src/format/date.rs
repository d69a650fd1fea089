// ============================================================================
// Dates : parsing ISO-8601 et affichage DD/MM/YYYY
// ============================================================================
// Le parsing passe par le trait DateParser pour que l'échec soit une erreur
// explicite plutôt qu'une date "invalide" silencieuse.
//
// CONCEPTS RUST :
// 1. Traits : interface remplaçable (tests, autres formats)
// 2. thiserror : erreur typée avec message
// 3. Chrono : DateTime<Utc>, NaiveDateTime, Datelike
// ============================================================================

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Formats avec fuseau que RFC 3339 refuse : secondes absentes, offset sans
/// deux-points ("+0000") ou en heures seules ("+03")
///
/// `%#z` accepte aussi "Z".
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Formats acceptés pour une date-heure sans fuseau (interprétée en UTC)
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Une chaîne `created_at` qui n'est pas une date ISO-8601
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("date ISO-8601 invalide : {raw:?}")]
pub struct DateParseError {
    pub raw: String,
}

/// Interface de parsing des dates ISO-8601
pub trait DateParser {
    fn parse_iso8601(&self, raw: &str) -> Result<DateTime<Utc>, DateParseError>;
}

/// Parseur par défaut basé sur chrono
///
/// Accepte :
/// - RFC 3339 avec fuseau ("2020-03-05T10:00:00Z", "2020-03-05T07:00:00-03:00"),
///   ramené en UTC
/// - les variantes ISO-8601 courantes : minutes seules ("2020-03-05T10:00Z"),
///   offset compact ("2020-03-05T10:00:00+0000")
/// - date-heure sans fuseau ("2020-03-05T10:00:00", "2020-03-05T10:00"),
///   lue comme UTC
/// - date seule ("2020-03-05"), minuit UTC
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso8601Parser;

impl DateParser for Iso8601Parser {
    fn parse_iso8601(&self, raw: &str) -> Result<DateTime<Utc>, DateParseError> {
        let trimmed = raw.trim();

        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(datetime.with_timezone(&Utc));
        }

        for format in OFFSET_DATETIME_FORMATS {
            if let Ok(datetime) = DateTime::parse_from_str(trimmed, format) {
                return Ok(datetime.with_timezone(&Utc));
            }
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| DateParseError {
                raw: raw.to_string(),
            })
    }
}

/// Compose "DD/MM/YYYY" en UTC
///
/// Le mois est le mois calendaire (janvier = 01), jour et mois sur deux
/// chiffres.
pub fn format_date(datetime: &DateTime<Utc>) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        datetime.day(),
        datetime.month(),
        datetime.year()
    )
}

// ============================================================================
// Tests unitaires
// ============================================================================
