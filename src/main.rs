// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions + runtime tokio (historique)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas> + spawn_local (historique)
// - Historique distant         : seulement si URL + clé publique sont configurées
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use std::sync::Arc;

use eframe::egui;

mod app;
mod config;
mod historique;
mod noyau;

use app::AppCalc;
use config::ConfigCalc;
use historique::{Depot, DepotSupabase, Historique};

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/// Dépôt distant si les identifiants sont complets, sinon historique local seulement.
fn depot_configure(config: &ConfigCalc) -> Option<Box<dyn Depot>> {
    let ids = config.identifiants()?;
    tracing::info!(url = %ids.url, table = %ids.table, "dépôt d’historique configuré");
    Some(Box::new(DepotSupabase::new(&ids)))
}

/// Repaint dès qu’une requête d’historique se termine.
fn avec_repaint(historique: Historique, ctx: &egui::Context) -> Historique {
    let ctx = ctx.clone();
    historique.avec_reveil(Arc::new(move || ctx.request_repaint()))
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use std::rc::Rc;

    use historique::lanceur::LanceurTokio;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = ConfigCalc::charger();
    let lanceur = LanceurTokio::new().map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;
    let historique = Historique::new(depot_configure(&config), Rc::new(lanceur));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |cc| {
            // Contexte egui prêt => repaint branché avant le montage (sonde + hydratation).
            let historique = avec_repaint(historique, &cc.egui_ctx);
            Ok(Box::new(AppCalc::new(historique)))
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::rc::Rc;

    use super::{avec_repaint, depot_configure, AppCalc, ConfigCalc, Historique, TITRE_APP};
    use crate::historique::lanceur::LanceurNavigateur;

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let config = ConfigCalc::charger();
        let historique = Historique::new(depot_configure(&config), Rc::new(LanceurNavigateur));

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    let historique = avec_repaint(historique, &cc.egui_ctx);
                    Ok(Box::new(AppCalc::new(historique)))
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
