//! Historique des calculs : cache local + miroir distant best-effort
//!
//! Organisation interne :
//! - cache.rs     : 10 dernières entrées, la plus récente en tête
//! - connexion.rs : garde NonConfigure / Connecte / HorsLigne
//! - depot.rs     : trait du dépôt distant + erreurs
//! - lanceur.rs   : tâches détachées (tokio natif, spawn_local web)
//! - supabase.rs  : dépôt REST (table calc_history)
//! - synchro.rs   : assemblage, écriture miroir, sonde + hydratation au montage

pub mod cache;
pub mod connexion;
pub mod depot;
pub mod lanceur;
pub mod supabase;
pub mod synchro;


pub use cache::EntreeHistorique;
pub use connexion::EtatConnexion;
pub use depot::Depot;
pub use supabase::DepotSupabase;
pub use synchro::Historique;
