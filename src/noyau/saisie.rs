//! src/noyau/saisie.rs
//!
//! Automate de saisie : écran + opération en attente + drapeau de frontière.
//!
//! États :
//! - Repos       : pas d’opérateur en attente
//! - EnAttente   : opérateur choisi, opérande droite en cours
//!
//! Contrats :
//! - Aucune erreur levée : les erreurs de domaine s’affichent en NaN.
//! - Au plus un point décimal à l’écran.
//! - Chaînage sans `=` : `2 + 3 + 4` évalue `2+3` au second `+` (gauche → droite).
//! - `appliquer` retourne le calcul à historiser (Egal, fonctions), rien d’autre.

use super::commande::{Commande, Constante};
use super::eval::{eval_binaire, eval_unaire, FnUnaire, OpBinaire};
use super::format::{brut, formater_nombre};
use super::trig::ModeAngle;

/// Garde-fou : longueur max de l’écran saisi au clavier.
const LONGUEUR_MAX: usize = 32;

const ZERO: &str = "0";

/// Opération en attente : opérande gauche + opérateur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attente {
    pub gauche: f64,
    pub op: OpBinaire,
}

/// Paire (expression, résultat brut) à déposer dans l’historique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calcul {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct Saisie {
    affichage: String,
    attente: Option<Attente>,
    frontiere: bool,
    mode: ModeAngle,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            affichage: ZERO.to_string(),
            attente: None,
            frontiere: false,
            mode: ModeAngle::default(),
        }
    }
}

impl Saisie {
    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    #[cfg(test)]
    pub fn attente(&self) -> Option<Attente> {
        self.attente
    }

    /// Vrai juste après un opérateur / `=` / une fonction : le prochain chiffre ouvre un nouvel opérande.
    #[cfg(test)]
    pub fn frontiere(&self) -> bool {
        self.frontiere
    }

    pub fn mode(&self) -> ModeAngle {
        self.mode
    }

    /// Valeur numérique de l’écran ("0." → 0, "NaN" → NaN, illisible → 0).
    pub fn valeur(&self) -> f64 {
        self.affichage.parse().unwrap_or(0.0)
    }

    /// Ligne au-dessus de l’écran : "<gauche> <op>" tant qu’une opération attend.
    pub fn expression_en_cours(&self) -> Option<String> {
        self.attente
            .map(|a| format!("{} {}", formater_nombre(a.gauche), a.op))
    }

    /* ------------------------ Transitions ------------------------ */

    pub fn appliquer(&mut self, cmd: Commande) -> Option<Calcul> {
        match cmd {
            Commande::Chiffre(d) => self.chiffre(d),
            Commande::Decimale => self.decimale(),
            Commande::Operateur(op) => self.operateur(op),
            Commande::Egal => return self.egal(),
            Commande::Effacer => self.effacer(),
            Commande::Supprimer => self.supprimer(),
            Commande::Signe => self.signe(),
            Commande::Pourcent => self.pourcent(),
            Commande::Constante(c) => self.constante(c),
            Commande::Fonction(f) => return Some(self.fonction(f)),
            Commande::BasculerAngle => self.mode = self.mode.basculer(),
            Commande::Rappel(resultat) => self.rappel(&resultat),
        }
        None
    }

    /// L’écran ne porte pas un nombre saisissable (NaN / ±Infinity).
    fn ecran_non_fini(&self) -> bool {
        !self.valeur().is_finite()
    }

    /// Résultat affiché en notation scientifique ("1e-12") : lu tel quel, jamais prolongé.
    fn ecran_fige(&self) -> bool {
        self.ecran_non_fini() || self.affichage.contains(['e', 'E'])
    }

    fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.frontiere {
            self.affichage = c.to_string();
            self.frontiere = false;
            return;
        }

        if self.affichage == ZERO || self.ecran_fige() {
            self.affichage = c.to_string();
        } else if self.affichage == "-0" {
            self.affichage = format!("-{c}");
        } else if self.affichage.len() < LONGUEUR_MAX {
            self.affichage.push(c);
        }
    }

    fn decimale(&mut self) {
        if self.frontiere || self.ecran_fige() {
            self.affichage = "0.".to_string();
            self.frontiere = false;
            return;
        }
        if !self.affichage.contains('.') && self.affichage.len() < LONGUEUR_MAX {
            self.affichage.push('.');
        }
    }

    fn operateur(&mut self, op: OpBinaire) {
        match self.attente {
            None => {
                self.attente = Some(Attente {
                    gauche: self.valeur(),
                    op,
                });
            }
            Some(a) if !self.frontiere => {
                let gauche = eval_binaire(a.gauche, self.valeur(), a.op);
                self.affichage = formater_nombre(gauche);
                self.attente = Some(Attente { gauche, op });
            }
            // deux opérateurs de suite : le second remplace le premier
            Some(a) => {
                self.attente = Some(Attente { gauche: a.gauche, op });
            }
        }
        self.frontiere = true;
    }

    fn egal(&mut self) -> Option<Calcul> {
        let a = self.attente.take()?;
        let droite = self.valeur();
        let r = eval_binaire(a.gauche, droite, a.op);

        self.affichage = formater_nombre(r);
        self.frontiere = true;

        Some(Calcul {
            expression: format!(
                "{} {} {}",
                formater_nombre(a.gauche),
                a.op,
                formater_nombre(droite)
            ),
            resultat: brut(r),
        })
    }

    fn effacer(&mut self) {
        self.affichage = ZERO.to_string();
        self.attente = None;
        self.frontiere = false;
    }

    fn supprimer(&mut self) {
        if self.frontiere {
            return;
        }
        if self.ecran_fige() {
            self.affichage = ZERO.to_string();
            return;
        }

        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage.parse::<f64>().is_err() {
            self.affichage = ZERO.to_string();
        }
    }

    fn signe(&mut self) {
        // NaN n’a pas de signe affichable ; ±Infinity bascule normalement
        if self.affichage == ZERO || self.valeur().is_nan() {
            return;
        }
        if let Some(reste) = self.affichage.strip_prefix('-') {
            self.affichage = reste.to_string();
        } else {
            self.affichage.insert(0, '-');
        }
    }

    fn pourcent(&mut self) {
        self.affichage = formater_nombre(self.valeur() / 100.0);
    }

    /// La frontière est levée : des chiffres tapés ensuite prolongent ceux de la constante.
    fn constante(&mut self, c: Constante) {
        self.affichage = formater_nombre(c.valeur());
        self.frontiere = false;
    }

    fn fonction(&mut self, f: FnUnaire) -> Calcul {
        let x = self.valeur();
        let r = eval_unaire(x, f, self.mode);

        self.affichage = formater_nombre(r);
        self.frontiere = true;

        Calcul {
            expression: format!("{}({})", f.nom(), formater_nombre(x)),
            resultat: brut(r),
        }
    }

    fn rappel(&mut self, resultat: &str) {
        let x: f64 = resultat.trim().parse().unwrap_or(f64::NAN);
        self.affichage = formater_nombre(x);
        self.frontiere = true;
    }
}
