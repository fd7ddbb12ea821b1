// src/historique/lanceur.rs
//
// Lancement “fire-and-forget” des requêtes d’historique
// ------------------------------------------------------
// - NATIF : runtime tokio dédié (1 worker), futures `Send`
// - WEB   : wasm_bindgen_futures::spawn_local, futures locales
//
// La saisie n’attend jamais une tâche : seul un message de fin revient (canal).

use std::future::Future;

use futures::FutureExt;

#[cfg(not(target_arch = "wasm32"))]
pub type Boite<T> = futures::future::BoxFuture<'static, T>;

#[cfg(target_arch = "wasm32")]
pub type Boite<T> = futures::future::LocalBoxFuture<'static, T>;

/// Tâche détachée (son résultat passe par un canal, pas par le retour).
pub type FutureTache = Boite<()>;

#[cfg(not(target_arch = "wasm32"))]
pub fn emballer<T, F>(f: F) -> Boite<T>
where
    F: Future<Output = T> + Send + 'static,
{
    f.boxed()
}

#[cfg(target_arch = "wasm32")]
pub fn emballer<T, F>(f: F) -> Boite<T>
where
    F: Future<Output = T> + 'static,
{
    f.boxed_local()
}

pub trait Lanceur {
    /// Démarre `tache` sans l’attendre. Ne bloque jamais l’appelant.
    fn lancer(&self, tache: FutureTache);
}

/// Aucun dépôt : les tâches sont abandonnées.
pub struct SansLanceur;

impl Lanceur for SansLanceur {
    fn lancer(&self, _tache: FutureTache) {}
}

/* ------------------------ NATIF ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
pub struct LanceurTokio {
    rt: tokio::runtime::Runtime,
}

#[cfg(not(target_arch = "wasm32"))]
impl LanceurTokio {
    pub fn new() -> std::io::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("historique")
            .enable_all()
            .build()?;
        Ok(Self { rt })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Lanceur for LanceurTokio {
    fn lancer(&self, tache: FutureTache) {
        // JoinHandle abandonné : tâche détachée
        let _ = self.rt.spawn(tache);
    }
}

/* ------------------------ WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
pub struct LanceurNavigateur;

#[cfg(target_arch = "wasm32")]
impl Lanceur for LanceurNavigateur {
    fn lancer(&self, tache: FutureTache) {
        wasm_bindgen_futures::spawn_local(tache);
    }
}
