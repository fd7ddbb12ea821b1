//! Garde de connectivité : NonConfigure / Connecte / HorsLigne.
//!
//! - NonConfigure : pas d’identifiants, figé pour la session.
//! - Connecte → HorsLigne au premier échec (écriture, lecture, sonde). Jamais de retour.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatConnexion {
    NonConfigure,
    Connecte,
    HorsLigne,
}

#[derive(Clone, Debug)]
pub struct GardeConnexion {
    etat: EtatConnexion,
}

impl GardeConnexion {
    pub fn new(configure: bool) -> Self {
        let etat = if configure {
            EtatConnexion::Connecte
        } else {
            EtatConnexion::NonConfigure
        };
        Self { etat }
    }

    pub fn etat(&self) -> EtatConnexion {
        self.etat
    }

    /// Le dépôt distant peut être lu / écrit.
    pub fn ouverte(&self) -> bool {
        self.etat == EtatConnexion::Connecte
    }

    /// Passe HorsLigne (terminal). Sans effet hors de l’état Connecte.
    pub fn degrader(&mut self, raison: impl fmt::Display) {
        if self.etat != EtatConnexion::Connecte {
            return;
        }
        tracing::warn!(%raison, "historique distant hors ligne pour la session");
        self.etat = EtatConnexion::HorsLigne;
    }

    /// Libellé du voyant (purement informatif).
    pub fn indicateur(&self) -> &'static str {
        match self.etat {
            EtatConnexion::NonConfigure => "Local",
            EtatConnexion::Connecte => "Synchronisé",
            EtatConnexion::HorsLigne => "Hors ligne",
        }
    }
}
