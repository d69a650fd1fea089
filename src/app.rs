// ============================================================================
// Structure : App
// ============================================================================
// État de la vue dashboard, possédé par la boucle UI
//
// Cycle de vie :
// - Loading au démarrage (tableau vide, cartes en attente)
// - Loaded(Dashboard) ou Failed(message) après l'unique fetch
// - Jamais modifié ensuite, détruit avec l'App
//
// CONCEPTS RUST :
// 1. Enum pour state machine : un seul état de chargement à la fois
// 2. Encapsulation : l'état change via les méthodes de App
// ============================================================================

use tracing::{error, info};

use crate::api::TransactionsResponse;
use crate::format::{CurrencyFormat, Iso8601Parser, ValueFormatter};
use crate::models::{BalanceView, DisplayTransaction};
use crate::normalize::{Dashboard, Normalizer};

/// État du chargement des données
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Fetch en cours
    Loading,

    /// Données normalisées, prêtes à afficher
    Loaded(Dashboard),

    /// Fetch ou normalisation en échec
    Failed(String),
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    pub load_state: LoadState,

    /// Ligne sélectionnée dans le tableau des transactions
    pub selected_index: usize,

    /// Première pression de 'q' reçue, attend la seconde
    pub confirm_quit: bool,

    /// Formateur BRL + parseur ISO-8601 appliqués à la réponse
    normalizer: Normalizer,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            load_state: LoadState::Loading,
            selected_index: 0,
            confirm_quit: false,
            normalizer: Normalizer::new(ValueFormatter::new(CurrencyFormat::brl()), Iso8601Parser),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ========================================================================
    // Chargement
    // ========================================================================

    /// Reçoit la réponse du service et la normalise
    ///
    /// Une normalisation en échec fait passer la vue en Failed : rien de
    /// partiel n'est affiché.
    pub fn load_response(&mut self, response: TransactionsResponse) {
        match self.normalizer.normalize(&response.transactions, &response.balance) {
            Ok(dashboard) => {
                info!(transactions = dashboard.transactions.len(), "Dashboard normalized");
                self.selected_index = 0;
                self.load_state = LoadState::Loaded(dashboard);
            }
            Err(e) => {
                error!(error = %e, "Failed to normalize transactions");
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    /// Le fetch a échoué
    pub fn load_failed(&mut self, message: String) {
        self.load_state = LoadState::Failed(message);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    /// Transactions affichées (vide tant que rien n'est chargé)
    pub fn transactions(&self) -> &[DisplayTransaction] {
        match &self.load_state {
            LoadState::Loaded(dashboard) => &dashboard.transactions,
            _ => &[],
        }
    }

    pub fn balance(&self) -> Option<&BalanceView> {
        match &self.load_state {
            LoadState::Loaded(dashboard) => Some(&dashboard.balance),
            _ => None,
        }
    }

    // ========================================================================
    // Navigation dans le tableau
    // ========================================================================

    /// CONCEPT RUST : saturating_sub ne descend pas sous 0
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        let max_index = self.transactions().len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    pub fn selected_transaction(&self) -> Option<&DisplayTransaction> {
        self.transactions().get(self.selected_index)
    }

    // ========================================================================
    // Quit en deux temps
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
