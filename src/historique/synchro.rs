//! Historique synchronisé : cache local + garde + dépôt injecté + lanceur injecté.
//!
//! Contrats :
//! - L’enregistrement local précède TOUJOURS l’expédition de l’écriture miroir.
//! - Rien n’est attendu : les tâches renvoient un `Evenement` par canal, appliqué par `pomper()`.
//! - Un événement ne touche que la connectivité (et le cache pour l’hydratation du montage),
//!   jamais un résultat déjà affiché.
//! - Premier échec => HorsLigne pour la session : plus aucune requête, succès tardifs ignorés.

use std::rc::Rc;
use std::sync::Arc;

use super::cache::{CacheHistorique, EntreeHistorique, CAPACITE};
use super::connexion::{EtatConnexion, GardeConnexion};
use super::depot::{Depot, ErreurDepot};
use super::lanceur::{emballer, Boite, Lanceur, SansLanceur};
use crate::noyau::Calcul;

/// Rappel appelé quand un événement arrive (ex: repaint egui).
pub type Reveil = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
enum Evenement {
    Ecrit,
    EcritureEchouee(ErreurDepot),
    SondeEchouee(ErreurDepot),
    LectureEchouee(ErreurDepot),
    Hydrate(Vec<EntreeHistorique>),
}

pub struct Historique {
    cache: CacheHistorique,
    garde: GardeConnexion,
    depot: Option<Box<dyn Depot>>,
    lanceur: Rc<dyn Lanceur>,
    tx: flume::Sender<Evenement>,
    rx: flume::Receiver<Evenement>,
    reveil: Option<Reveil>,
    monte: bool,
}

impl Historique {
    /// `depot = None` : pas d’identifiants => NonConfigure pour la session.
    pub fn new(depot: Option<Box<dyn Depot>>, lanceur: Rc<dyn Lanceur>) -> Self {
        let garde = GardeConnexion::new(depot.is_some());
        tracing::info!(etat = ?garde.etat(), "historique initialisé");

        let (tx, rx) = flume::unbounded();
        Self {
            cache: CacheHistorique::default(),
            garde,
            depot,
            lanceur,
            tx,
            rx,
            reveil: None,
            monte: false,
        }
    }

    /// Historique purement local (aucun dépôt).
    pub fn local() -> Self {
        Self::new(None, Rc::new(SansLanceur))
    }

    pub fn avec_reveil(mut self, reveil: Reveil) -> Self {
        self.reveil = Some(reveil);
        self
    }

    pub fn etat(&self) -> EtatConnexion {
        self.garde.etat()
    }

    pub fn indicateur(&self) -> &'static str {
        self.garde.indicateur()
    }

    pub fn cache(&self) -> &CacheHistorique {
        &self.cache
    }

    pub fn entrees(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.cache.iter()
    }

    /* ------------------------ Écriture ------------------------ */

    /// Enregistre localement, puis (garde ouverte) expédie l’écriture miroir sans l’attendre.
    pub fn enregistrer(&mut self, calcul: Calcul) {
        let entree = self.cache.enregistrer(calcul.expression, calcul.resultat);

        if !self.garde.ouverte() {
            return;
        }
        let Some(depot) = self.depot.as_ref() else {
            return;
        };

        let ecriture = depot.inserer(&entree);
        self.expedier(emballer(async move {
            match ecriture.await {
                Ok(()) => Evenement::Ecrit,
                Err(e) => Evenement::EcritureEchouee(e),
            }
        }));
    }

    /* ------------------------ Montage ------------------------ */

    /// Une seule fois par session : sonde, puis hydratation depuis les lignes les plus récentes.
    pub fn monter(&mut self) {
        if self.monte {
            return;
        }
        self.monte = true;

        if !self.garde.ouverte() {
            tracing::debug!(etat = ?self.garde.etat(), "montage sans dépôt distant");
            return;
        }
        let Some(depot) = self.depot.as_ref() else {
            return;
        };

        let sonde = depot.sonder();
        let lecture = depot.lire_recents(CAPACITE);
        tracing::info!("sonde du dépôt distant puis hydratation");

        self.expedier(emballer(async move {
            if let Err(e) = sonde.await {
                return Evenement::SondeEchouee(e);
            }
            match lecture.await {
                Ok(entrees) => Evenement::Hydrate(entrees),
                Err(e) => Evenement::LectureEchouee(e),
            }
        }));
    }

    /* ------------------------ Fin des tâches ------------------------ */

    /// Applique les événements arrivés depuis le dernier appel. Retourne leur nombre.
    pub fn pomper(&mut self) -> usize {
        let mut n = 0;
        while let Ok(ev) = self.rx.try_recv() {
            n += 1;
            self.traiter(ev);
        }
        n
    }

    fn traiter(&mut self, ev: Evenement) {
        match ev {
            Evenement::Ecrit => tracing::debug!("écriture miroir acceptée"),
            Evenement::EcritureEchouee(e) => self.garde.degrader(format!("écriture : {e}")),
            Evenement::SondeEchouee(e) => self.garde.degrader(format!("sonde : {e}")),
            Evenement::LectureEchouee(e) => self.garde.degrader(format!("lecture : {e}")),
            Evenement::Hydrate(entrees) => {
                if !self.garde.ouverte() {
                    tracing::debug!("hydratation ignorée : dépôt hors ligne");
                    return;
                }
                tracing::info!(lignes = entrees.len(), "historique hydraté");
                // les entrées locales enregistrées avant la fin de la lecture sont écrasées
                self.cache.remplacer(entrees);
            }
        }
    }

    fn expedier(&self, travail: Boite<Evenement>) {
        let tx = self.tx.clone();
        let reveil = self.reveil.clone();

        self.lanceur.lancer(emballer(async move {
            let ev = travail.await;
            if tx.send(ev).is_ok() {
                if let Some(r) = reveil {
                    r();
                }
            }
        }));
    }
}
