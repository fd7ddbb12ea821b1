// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (une seule lecture par frame, ici) :
// - texte : chiffres, . + - * / ^ %, =, p (π), e (e)
// - Entrée = égal, Retour arrière = supprimer, Échap = effacer

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Commande;

/// Événements egui de la frame → commandes de saisie, dans l’ordre.
pub fn commandes_clavier(events: &[egui::Event]) -> Vec<Commande> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(Commande::depuis_touche)),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Commande::Egal),
                egui::Key::Backspace => out.push(Commande::Supprimer),
                egui::Key::Escape => out.push(Commande::Effacer),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fins de requêtes d’historique (connectivité / hydratation)
        self.synchroniser();

        let cmds = ctx.input(|i| commandes_clavier(&i.events));
        self.commandes(cmds);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
