// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : ligne “<gauche> <op>” en attente + valeur courante
// - Gros boutons (tactile), fonctions scientifiques, constantes
// - Historique cliquable (rappel du résultat) + voyant de connectivité passif
//
// Note :
// - Le clavier est géré dans app.rs (une seule fois par frame)

use eframe::egui;

use super::etat::AppCalc;
use crate::historique::EtatConnexion;
use crate::noyau::{Commande, Constante, FnUnaire, OpBinaire};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 40.0];
const TAILLE_FONCTION: [f32; 2] = [50.0, 30.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.ui_voyant(ui);
                    });
                });
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_fonctions(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_voyant(&self, ui: &mut egui::Ui) {
        let couleur = match self.historique.etat() {
            EtatConnexion::Connecte => egui::Color32::from_rgb(60, 170, 90),
            EtatConnexion::HorsLigne => egui::Color32::from_rgb(220, 140, 40),
            EtatConnexion::NonConfigure => ui.visuals().weak_text_color(),
        };
        ui.label(self.historique.indicateur());
        ui.colored_label(couleur, "●");
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let en_cours = self.saisie.expression_en_cours().unwrap_or_default();
                    ui.horizontal(|ui| {
                        ui.monospace(self.saisie.mode().libelle());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.monospace(en_cours);
                            },
                        );
                    });
                    ui.label(
                        egui::RichText::new(self.saisie.affichage())
                            .monospace()
                            .size(34.0),
                    );
                });
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fonctions_scientifiques")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, f) in FnUnaire::TOUTES.into_iter().enumerate() {
                    self.bouton(ui, f.libelle(), TAILLE_FONCTION, Commande::Fonction(f));
                    if i == 4 {
                        let angle = self.saisie.mode().basculer().libelle();
                        self.bouton(ui, angle, TAILLE_FONCTION, Commande::BasculerAngle);
                        ui.end_row();
                    }
                }
                self.bouton(
                    ui,
                    Constante::Pi.libelle(),
                    TAILLE_FONCTION,
                    Commande::Constante(Constante::Pi),
                );
                ui.end_row();

                self.bouton(
                    ui,
                    "xʸ",
                    TAILLE_FONCTION,
                    Commande::Operateur(OpBinaire::Puissance),
                );
                self.bouton(
                    ui,
                    Constante::E.libelle(),
                    TAILLE_FONCTION,
                    Commande::Constante(Constante::E),
                );
                ui.end_row();
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", TAILLE_TOUCHE, Commande::Effacer);
                self.bouton(ui, "DEL", TAILLE_TOUCHE, Commande::Supprimer);
                self.bouton(ui, "%", TAILLE_TOUCHE, Commande::Pourcent);
                self.bouton_op(ui, OpBinaire::Divise);
                ui.end_row();

                self.chiffres(ui, [7, 8, 9]);
                self.bouton_op(ui, OpBinaire::Fois);
                ui.end_row();

                self.chiffres(ui, [4, 5, 6]);
                self.bouton_op(ui, OpBinaire::Moins);
                ui.end_row();

                self.chiffres(ui, [1, 2, 3]);
                self.bouton_op(ui, OpBinaire::Plus);
                ui.end_row();

                self.bouton(ui, "±", TAILLE_TOUCHE, Commande::Signe);
                self.chiffres(ui, [0]);
                self.bouton(ui, ".", TAILLE_TOUCHE, Commande::Decimale);
                self.bouton(ui, "=", TAILLE_TOUCHE, Commande::Egal);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.cache().is_empty() {
                    ui.weak("(vide)");
                    return;
                }

                // clic = rappel du résultat ; appliqué après la boucle (emprunt de l’historique)
                let mut rappel = None;
                for e in self.historique.entrees() {
                    let texte = format!("{} = {}", e.expression, e.resultat);
                    let resp = ui
                        .add(egui::Button::new(egui::RichText::new(texte).monospace()).frame(false))
                        .on_hover_text(e.horodatage.format("%Y-%m-%d %H:%M:%S UTC").to_string());
                    if resp.clicked() {
                        rappel = Some(e.resultat.clone());
                    }
                }

                if let Some(r) = rappel {
                    self.commande(Commande::Rappel(r));
                }
            });
    }

    fn chiffres<const N: usize>(&mut self, ui: &mut egui::Ui, chiffres: [u8; N]) {
        for d in chiffres {
            self.bouton(ui, &d.to_string(), TAILLE_TOUCHE, Commande::Chiffre(d));
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: OpBinaire) {
        self.bouton(ui, op.symbole(), TAILLE_TOUCHE, Commande::Operateur(op));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, taille: [f32; 2], cmd: Commande) {
        let resp = ui.add_sized(taille, egui::Button::new(label));
        if resp.clicked() {
            self.commande(cmd);
        }
    }
}
