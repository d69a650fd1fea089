// ============================================================================
// Configuration
// ============================================================================
// Adresse du service et timeout HTTP, lus depuis l'environnement :
// - LAZYFINANCES_API_URL      (défaut : http://localhost:3333)
// - LAZYFINANCES_TIMEOUT_SECS (défaut : 10)
// ============================================================================

use std::time::Duration;

use anyhow::{Context, Result};

pub const API_URL_ENV: &str = "LAZYFINANCES_API_URL";
pub const TIMEOUT_ENV: &str = "LAZYFINANCES_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration du client HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL de base du service (sans "/transactions")
    pub api_url: String,

    /// Timeout de la requête GET /transactions
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// CONCEPT RUST : closure en paramètre
    /// - Les tests fournissent leur propre source de variables
    /// - Pas besoin de modifier l'environnement du process
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} invalide : {:?}", TIMEOUT_ENV, raw))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// URL complète de GET /transactions
    pub fn transactions_url(&self) -> String {
        format!("{}/transactions", self.api_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.transactions_url(), "http://localhost:3333/transactions");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (API_URL_ENV, "https://api.example.com/"),
            (TIMEOUT_ENV, "3"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.transactions_url(), "https://api.example.com/transactions");
    }

    #[test]
    fn test_blank_url_keeps_default() {
        let config = Config::from_lookup(lookup(&[(API_URL_ENV, "  ")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[(TIMEOUT_ENV, "ten")])).unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }
}
