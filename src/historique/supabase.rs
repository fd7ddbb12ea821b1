// src/historique/supabase.rs
//
// Dépôt REST (PostgREST / Supabase) pour la table `calc_history`
// -------------------------------------------------------------
//   calc_history(id uuid pk, expression text, result text, created_at timestamptz)
//
// - écriture : POST, `Prefer: return=minimal` (pas de relecture => pas besoin du droit SELECT)
// - lecture  : GET ?select=*&order=created_at.desc&limit=N
// - sonde    : GET ?select=id&limit=1
// - chaque requête porte `apikey` + `Authorization: Bearer` (clé publique)
// - pas de timeout : une requête bloquée ne se résout simplement jamais

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use super::cache::EntreeHistorique;
use super::depot::{Depot, ErreurDepot, FutureDepot, Resultat};
use super::lanceur::emballer;
use crate::config::Identifiants;

/// Taille max du corps d’erreur gardé dans le message.
const CORPS_ERREUR_MAX: usize = 512;

#[derive(Clone, Debug)]
pub struct DepotSupabase {
    client: Client,
    url_table: String,
    cle: String,
}

#[derive(Serialize)]
struct NouvelleLigne {
    expression: String,
    result: String,
}

/// Ligne lue (`id` ignoré).
#[derive(Deserialize)]
struct Ligne {
    expression: String,
    result: String,
    created_at: DateTime<Utc>,
}

impl From<Ligne> for EntreeHistorique {
    fn from(l: Ligne) -> Self {
        Self {
            expression: l.expression,
            resultat: l.result,
            horodatage: l.created_at,
        }
    }
}

impl DepotSupabase {
    pub fn new(ids: &Identifiants) -> Self {
        Self::avec_client(Client::new(), ids)
    }

    pub fn avec_client(client: Client, ids: &Identifiants) -> Self {
        let base = ids.url.trim().trim_end_matches('/');
        Self {
            client,
            url_table: format!("{base}/rest/v1/{}", ids.table),
            cle: ids.cle.clone(),
        }
    }

    fn authentifier(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.cle).bearer_auth(&self.cle)
    }

    fn get(&self, requete: &str) -> RequestBuilder {
        let url = format!("{}?{requete}", self.url_table);
        self.authentifier(self.client.get(url))
    }
}

/// Statut non 2xx => ErreurDepot::Statut (corps tronqué).
async fn verifier(rep: Response) -> Resultat<Response> {
    let statut = rep.status();
    if statut.is_success() {
        return Ok(rep);
    }

    let mut corps = rep.text().await.unwrap_or_default();
    if corps.len() > CORPS_ERREUR_MAX {
        let mut fin = CORPS_ERREUR_MAX;
        while !corps.is_char_boundary(fin) {
            fin -= 1;
        }
        corps.truncate(fin);
    }

    Err(ErreurDepot::Statut {
        statut: statut.as_u16(),
        corps,
    })
}

async fn envoyer(req: RequestBuilder) -> Resultat<()> {
    verifier(req.send().await?).await?;
    Ok(())
}

async fn lire_lignes(req: RequestBuilder) -> Resultat<Vec<EntreeHistorique>> {
    let rep = verifier(req.send().await?).await?;
    let lignes: Vec<Ligne> = rep
        .json()
        .await
        .map_err(|e| ErreurDepot::Decodage(e.to_string()))?;
    Ok(lignes.into_iter().map(EntreeHistorique::from).collect())
}

impl Depot for DepotSupabase {
    fn inserer(&self, entree: &EntreeHistorique) -> FutureDepot<()> {
        let req = self
            .authentifier(self.client.post(&self.url_table))
            .header("Prefer", "return=minimal")
            .json(&NouvelleLigne {
                expression: entree.expression.clone(),
                result: entree.resultat.clone(),
            });
        emballer(envoyer(req))
    }

    fn lire_recents(&self, limite: usize) -> FutureDepot<Vec<EntreeHistorique>> {
        let req = self.get(&format!("select=*&order=created_at.desc&limit={limite}"));
        emballer(lire_lignes(req))
    }

    fn sonder(&self) -> FutureDepot<()> {
        emballer(envoyer(self.get("select=id&limit=1")))
    }
}
