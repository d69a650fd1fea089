// ============================================================================
// API Client : GET /transactions
// ============================================================================
// Récupère les transactions et le solde agrégé depuis le service distant
//
// CONCEPTS RUST :
// 1. async/await : la requête ne bloque pas le thread UI
// 2. anyhow::Context : chaque étape ajoute son contexte à l'erreur
// 3. Serde : désérialisation de la réponse JSON
// ============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::models::{RawBalance, RawTransaction};

/// Corps de la réponse de GET /transactions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<RawTransaction>,
    pub balance: RawBalance,
}

/// Récupère transactions et solde
///
/// Un statut HTTP hors 2xx est une erreur. Pas de retry : l'appelant
/// affiche l'échec.
///
/// # Exemple
/// let response = fetch_transactions(&Config::default()).await?;
/// println!("{} transactions", response.transactions.len());
#[instrument(skip(config), fields(url = %config.transactions_url()))]
pub async fn fetch_transactions(config: &Config) -> Result<TransactionsResponse> {
    let url = config.transactions_url();

    debug!(timeout = ?config.request_timeout, "Creating HTTP client");
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Échec de la création du client HTTP")?;

    debug!("Sending GET /transactions");
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Échec de la requête HTTP vers {}", url))?;

    let status = response.status();
    debug!(status = %status, "Received HTTP response");

    if !status.is_success() {
        error!(status = %status, "Transactions service returned error status");
        anyhow::bail!("Le service a retourné une erreur : HTTP {}", status);
    }

    let body = response
        .text()
        .await
        .context("Échec de la lecture du corps de la réponse")?;
    debug!(bytes = body.len(), "Parsing JSON response");

    let parsed = parse_transactions_response(&body)?;

    info!(transactions = parsed.transactions.len(), "Successfully fetched transactions");
    Ok(parsed)
}

/// Désérialise le corps JSON `{ transactions: [...], balance: {...} }`
pub fn parse_transactions_response(body: &str) -> Result<TransactionsResponse> {
    serde_json::from_str(body).context("Échec du parsing JSON de la réponse /transactions")
}

// ============================================================================
// Tests unitaires
// ============================================================================
