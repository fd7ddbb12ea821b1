//! Dépôt distant de l’historique (interface minimale : écrire, lire, sonder).
//!
//! Les futures retournées sont paresseuses : aucune requête ne part avant le premier poll.

use thiserror::Error;

use super::cache::EntreeHistorique;
use super::lanceur::Boite;

#[derive(Debug, Error)]
pub enum ErreurDepot {
    #[error("requête impossible : {0}")]
    Transport(#[from] reqwest::Error),

    #[error("réponse HTTP {statut} : {corps}")]
    Statut { statut: u16, corps: String },

    #[error("réponse illisible : {0}")]
    Decodage(String),
}

pub type Resultat<T> = Result<T, ErreurDepot>;

pub type FutureDepot<T> = Boite<Resultat<T>>;

pub trait Depot {
    /// Insère `{expression, result}` sans relire la ligne créée.
    fn inserer(&self, entree: &EntreeHistorique) -> FutureDepot<()>;

    /// Les `limite` lignes les plus récentes, de la plus récente à la plus ancienne.
    fn lire_recents(&self, limite: usize) -> FutureDepot<Vec<EntreeHistorique>>;

    /// Vérifie que la ressource existe et répond avant de s’y fier en lecture.
    fn sonder(&self) -> FutureDepot<()>;
}
