// ============================================================================
// LazyFinances - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;       // Client GET /transactions
pub mod app;       // État de la vue
pub mod config;    // Configuration (variables d'environnement)
pub mod format;    // Devise et dates
pub mod models;    // Structures de données
pub mod normalize; // Données brutes -> données affichables
pub mod ui;        // Interface utilisateur
