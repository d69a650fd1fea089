// ============================================================================
// ValueFormatter : montants en devise locale
// ============================================================================
// Convertit un montant (unité de base, pas des centimes) en chaîne affichable
// selon les conventions pt-BR : "R$ 1.234,56"
//
// CONCEPTS RUST :
// 1. const fn : constructeur évalué à la compilation
// 2. Formatage avec {:.2} : arrondi à deux décimales
// 3. split_once : découpe une &str sans allocation
// 4. rust_decimal : soldes exacts, sans la perte de précision d'un f64
// ============================================================================

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Conventions d'affichage d'une devise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Symbole placé avant le montant (ex: "R$")
    pub symbol: &'static str,

    /// Séparateur décimal (',' en pt-BR)
    pub decimal_separator: char,

    /// Séparateur des milliers ('.' en pt-BR)
    pub group_separator: char,
}

impl CurrencyFormat {
    /// Real brésilien : "R$ 1.234,56"
    pub const fn brl() -> Self {
        Self {
            symbol: "R$",
            decimal_separator: ',',
            group_separator: '.',
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

/// Formate des montants selon une `CurrencyFormat`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueFormatter {
    currency: CurrencyFormat,
}

impl ValueFormatter {
    pub const fn new(currency: CurrencyFormat) -> Self {
        Self { currency }
    }

    /// Formate un montant : symbole, espace, milliers groupés, 2 décimales
    ///
    /// Les montants négatifs sont préfixés par '-' devant le symbole
    /// ("-R$ 10,00"). Un montant qui s'arrondit à zéro n'a jamais de signe.
    ///
    /// Les valeurs non finies (NaN, infini) ne sont pas des montants : le
    /// résultat est le symbole suivi du texte Rust de la valeur, sans panic.
    ///
    /// # Exemple
    /// ```
    /// use lazyfinances::format::ValueFormatter;
    ///
    /// let formatter = ValueFormatter::default();
    /// assert_eq!(formatter.format(1234.56), "R$ 1.234,56");
    /// ```
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{} {}", self.currency.symbol, amount);
        }

        // CONCEPT RUST : {:.2} arrondit la valeur absolue à 2 décimales
        // - Le signe est géré à part pour le placer devant le symbole
        let fixed = format!("{:.2}", amount.abs());
        self.compose(amount < 0.0, &fixed)
    }

    /// Formate un montant décimal exact (soldes)
    ///
    /// Même rendu que `format`, sans passer par un f64 : chaque chiffre de
    /// la partie entière est conservé. Arrondi à 2 décimales, demi vers
    /// l'extérieur.
    pub fn format_decimal(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{:.2}", rounded.abs());
        self.compose(rounded.is_sign_negative(), &fixed)
    }

    /// Assemble signe, symbole et "entier.fraction" déjà arrondi
    fn compose(&self, negative: bool, fixed: &str) -> String {
        let (integer_part, fraction_part) = fixed.split_once('.').unwrap_or((fixed, "00"));

        // "-0,00" n'a pas de sens : on ne garde le signe que si un chiffre non nul reste
        let negative = negative && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let sign = if negative { "-" } else { "" };

        format!(
            "{}{} {}{}{}",
            sign,
            self.currency.symbol,
            group_thousands(integer_part, self.currency.group_separator),
            self.currency.decimal_separator,
            fraction_part
        )
    }
}

/// Formate un montant avec le formateur par défaut (BRL)
pub fn format_value(amount: f64) -> String {
    ValueFormatter::default().format(amount)
}

/// Insère le séparateur de milliers dans une suite de chiffres
///
/// "1234567" -> "1.234.567"
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

/// Parse entier en base 10 d'une chaîne décimale (politique des soldes)
///
/// Lit des espaces optionnels, un signe optionnel, puis la plus longue suite
/// de chiffres ASCII. Tout ce qui suit est ignoré : "99.9" donne 99, la
/// partie fractionnaire est tronquée vers zéro.
///
/// Les soldes transitent en texte car ils peuvent dépasser la précision d'un
/// f64 : le résultat est un `Decimal` exact (jusqu'à 28 chiffres).
///
/// Retourne None si aucun chiffre n'est trouvé, ou si la suite de chiffres
/// dépasse la capacité d'un `Decimal`.
pub fn parse_integer(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if end == 0 {
        return None;
    }

    let magnitude = Decimal::from_str(&unsigned[..end]).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic_amounts() {
        assert_eq!(format_value(500.0), "R$ 500,00");
        assert_eq!(format_value(120.5), "R$ 120,50");
        assert_eq!(format_value(0.0), "R$ 0,00");
        assert_eq!(format_value(0.07), "R$ 0,07");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_value(1000.0), "R$ 1.000,00");
        assert_eq!(format_value(1234.56), "R$ 1.234,56");
        assert_eq!(format_value(999_999.99), "R$ 999.999,99");
        assert_eq!(format_value(1_234_567.0), "R$ 1.234.567,00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_value(-120.5), "-R$ 120,50");
        assert_eq!(format_value(-1500.0), "-R$ 1.500,00");
    }

    #[test]
    fn test_format_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_value(-0.001), "R$ 0,00");
        assert_eq!(format_value(-0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_always_two_fraction_digits() {
        for amount in [0.0, 1.0, 1.5, 1.005, 12.345, -7.1, 1e6, 123_456_789.123] {
            let formatted = format_value(amount);
            let commas: Vec<_> = formatted.match_indices(',').collect();
            assert_eq!(commas.len(), 1, "{formatted}");

            let fraction = &formatted[commas[0].0 + 1..];
            assert_eq!(fraction.len(), 2, "{formatted}");
            assert!(fraction.chars().all(|c| c.is_ascii_digit()), "{formatted}");
        }
    }

    #[test]
    fn test_format_non_finite_does_not_panic() {
        assert!(format_value(f64::NAN).starts_with("R$ "));
        assert!(format_value(f64::INFINITY).starts_with("R$ "));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("123456", '.'), "123.456");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("1000"), Some(Decimal::from(1000)));
        assert_eq!(parse_integer("99.9"), Some(Decimal::from(99)));
        assert_eq!(parse_integer("  42"), Some(Decimal::from(42)));
        assert_eq!(parse_integer("-300"), Some(Decimal::from(-300)));
        assert_eq!(parse_integer("+7"), Some(Decimal::from(7)));
        assert_eq!(parse_integer("12abc"), Some(Decimal::from(12)));
    }

    #[test]
    fn test_parse_integer_without_digits() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer(".5"), None);
    }

    #[test]
    fn test_parse_integer_keeps_every_digit() {
        // 2^53 + 1 : le premier entier qu'un f64 ne représente pas
        let parsed = parse_integer("9007199254740993").unwrap();
        assert_eq!(parsed.to_string(), "9007199254740993");

        let parsed = parse_integer("12345678901234567890").unwrap();
        assert_eq!(parsed.to_string(), "12345678901234567890");
    }

    #[test]
    fn test_parse_integer_beyond_decimal_capacity() {
        assert_eq!(parse_integer("123456789012345678901234567890"), None);
    }

    #[test]
    fn test_format_decimal_large_balances() {
        let formatter = ValueFormatter::default();

        let amount = parse_integer("12345678901234567890").unwrap();
        assert_eq!(formatter.format_decimal(amount), "R$ 12.345.678.901.234.567.890,00");

        let amount = parse_integer("9007199254740993").unwrap();
        assert_eq!(formatter.format_decimal(amount), "R$ 9.007.199.254.740.993,00");
    }

    #[test]
    fn test_format_decimal_matches_format() {
        let formatter = ValueFormatter::default();

        assert_eq!(formatter.format_decimal(Decimal::from(1000)), "R$ 1.000,00");
        assert_eq!(formatter.format_decimal(Decimal::from(-300)), "-R$ 300,00");
        assert_eq!(formatter.format_decimal(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(formatter.format_decimal(Decimal::new(1005, 3)), "R$ 1,01");
        assert_eq!(formatter.format_decimal(Decimal::new(-1, 3)), "R$ 0,00");
        assert_eq!(formatter.format_decimal(Decimal::ZERO), "R$ 0,00");
    }
}
