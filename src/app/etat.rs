//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier l’automate de saisie (noyau) à l’historique synchronisé.
//!
//! Contrats :
//! - Une commande = une transition de la saisie, puis (si calcul) un enregistrement.
//! - L’affichage est à jour AVANT toute requête distante (enregistrement local d’abord).
//! - Aucune erreur remontée à l’utilisateur : NaN à l’écran, voyant pour la connectivité.

use crate::historique::Historique;
use crate::noyau::{Commande, Saisie};

pub struct AppCalc {
    // --- automate de saisie ---
    pub saisie: Saisie,

    // --- historique (cache local + miroir distant) ---
    pub historique: Historique,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Historique::local())
    }
}

impl AppCalc {
    /// Monte l’historique (sonde + hydratation si le dépôt est configuré).
    pub fn new(mut historique: Historique) -> Self {
        historique.monter();
        Self {
            saisie: Saisie::default(),
            historique,
        }
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    pub fn commande(&mut self, cmd: Commande) {
        if let Some(calcul) = self.saisie.appliquer(cmd) {
            self.historique.enregistrer(calcul);
        }
    }

    pub fn commandes(&mut self, cmds: impl IntoIterator<Item = Commande>) {
        for cmd in cmds {
            self.commande(cmd);
        }
    }

    /// À chaque frame : applique les fins de requêtes d’historique.
    pub fn synchroniser(&mut self) {
        self.historique.pomper();
    }
}
