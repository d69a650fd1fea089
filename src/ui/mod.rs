// ============================================================================
// Module : ui
// ============================================================================
// Interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;    // Gestion des événements clavier
pub mod dashboard; // Cartes de résumé et tableau des transactions

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use dashboard::render;
