//! Cache local de l’historique : 10 entrées max, la plus récente en tête.
//!
//! Toujours alimenté, que le dépôt distant soit joignable ou non.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Nombre d’entrées gardées (et lues au montage).
pub const CAPACITE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    pub horodatage: DateTime<Utc>,
}

impl EntreeHistorique {
    pub fn maintenant(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
            horodatage: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CacheHistorique {
    entrees: VecDeque<EntreeHistorique>,
}

impl CacheHistorique {
    /// Ajoute en tête, évince la plus ancienne au-delà de `CAPACITE`.
    /// Retourne une copie de l’entrée (pour l’écriture miroir).
    pub fn enregistrer(
        &mut self,
        expression: impl Into<String>,
        resultat: impl Into<String>,
    ) -> EntreeHistorique {
        let entree = EntreeHistorique::maintenant(expression, resultat);
        self.entrees.push_front(entree.clone());
        self.entrees.truncate(CAPACITE);
        entree
    }

    /// Écrase le cache (hydratation). Les entrées doivent arriver de la plus récente à la plus ancienne.
    pub fn remplacer(&mut self, entrees: Vec<EntreeHistorique>) {
        self.entrees = entrees.into_iter().take(CAPACITE).collect();
    }

    pub fn plus_recente(&self) -> Option<&EntreeHistorique> {
        self.entrees.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
