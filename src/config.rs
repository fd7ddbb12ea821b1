// src/config.rs
//
// Identifiants du dépôt d’historique (optionnels)
// -----------------------------------------------
// - NATIF : <config_dir>/calculatrice-historique/config.toml, puis variables d’environnement
// - WEB   : variables lues à la compilation (option_env!)
//
// Fichier attendu :
//   [historique]
//   url   = "https://xyz.supabase.co"
//   cle   = "<clé publique>"
//   table = "calc_history"   # optionnel

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const VAR_URL: &str = "CALC_SUPABASE_URL";
pub const VAR_CLE: &str = "CALC_SUPABASE_CLE";
pub const VAR_TABLE: &str = "CALC_SUPABASE_TABLE";

const TABLE_DEFAUT: &str = "calc_history";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin:?} impossible : {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{chemin:?} invalide : {source}")]
    Syntaxe {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigCalc {
    pub historique: Option<ConfigHistorique>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigHistorique {
    pub url: Option<String>,
    pub cle: Option<String>,
    pub table: Option<String>,
}

/// Identifiants complets : URL de base + clé publique (+ table).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifiants {
    pub url: String,
    pub cle: String,
    pub table: String,
}

fn non_vide(v: Option<&String>) -> Option<String> {
    v.map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ConfigCalc {
    /// Fichier (natif) puis environnement. Jamais d’échec : au pire, aucun identifiant.
    pub fn charger() -> Self {
        Self::depuis_fichier()
            .unwrap_or_default()
            .avec_variables(variable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn depuis_fichier() -> Option<Self> {
        let chemin = chemin_config()?;
        match Self::lire(&chemin) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn depuis_fichier() -> Option<Self> {
        None
    }

    /// `Ok(None)` si le fichier n’existe pas.
    pub fn lire(chemin: &Path) -> Result<Option<Self>, ErreurConfig> {
        if !chemin.exists() {
            return Ok(None);
        }

        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;

        toml::from_str(&texte)
            .map(Some)
            .map_err(|source| ErreurConfig::Syntaxe {
                chemin: chemin.to_path_buf(),
                source,
            })
    }

    /// Les variables présentes (non vides) remplacent les valeurs du fichier.
    pub fn avec_variables(mut self, lire: impl Fn(&str) -> Option<String>) -> Self {
        let h = self.historique.get_or_insert_with(ConfigHistorique::default);

        for (nom, champ) in [
            (VAR_URL, &mut h.url),
            (VAR_CLE, &mut h.cle),
            (VAR_TABLE, &mut h.table),
        ] {
            if let Some(v) = non_vide(lire(nom).as_ref()) {
                *champ = Some(v);
            }
        }
        self
    }

    /// `None` tant que l’URL ou la clé manque (ou est vide) : historique local seulement.
    pub fn identifiants(&self) -> Option<Identifiants> {
        let h = self.historique.as_ref()?;
        Some(Identifiants {
            url: non_vide(h.url.as_ref())?,
            cle: non_vide(h.cle.as_ref())?,
            table: non_vide(h.table.as_ref()).unwrap_or_else(|| TABLE_DEFAUT.to_string()),
        })
    }
}

pub fn chemin_config() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("calculatrice-historique").join("config.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
fn variable(nom: &str) -> Option<String> {
    std::env::var(nom).ok()
}

#[cfg(target_arch = "wasm32")]
fn variable(nom: &str) -> Option<String> {
    let v = match nom {
        VAR_URL => option_env!("CALC_SUPABASE_URL"),
        VAR_CLE => option_env!("CALC_SUPABASE_CLE"),
        VAR_TABLE => option_env!("CALC_SUPABASE_TABLE"),
        _ => None,
    };
    v.map(str::to_string)
}
