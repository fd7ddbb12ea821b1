// src/noyau/commande.rs
//
// Commandes de la saisie (boutons + clavier)
// ------------------------------------------
// Une commande = une pression. Le clavier passe par `depuis_touche` (caractères)
// ou par les constantes dédiées (Entrée, Retour arrière, Échap) côté vue.

use super::eval::{FnUnaire, OpBinaire};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Commande {
    /// Chiffre 0..=9 (les autres valeurs sont ignorées par la saisie).
    Chiffre(u8),
    Decimale,
    Operateur(OpBinaire),
    Egal,
    Effacer,
    Supprimer,
    Signe,
    Pourcent,
    Constante(Constante),
    Fonction(FnUnaire),
    BasculerAngle,
    /// Recharge un résultat d’historique (texte brut) à l’écran.
    Rappel(String),
}

impl Commande {
    /// Touche texte → commande.
    ///
    /// Mnémoniques : `p` = π, `e` = e.
    pub fn depuis_touche(c: char) -> Option<Self> {
        let cmd = match c {
            '0'..='9' => Commande::Chiffre(c as u8 - b'0'),
            '.' | ',' => Commande::Decimale,
            '+' => Commande::Operateur(OpBinaire::Plus),
            '-' => Commande::Operateur(OpBinaire::Moins),
            '*' | 'x' | '×' => Commande::Operateur(OpBinaire::Fois),
            '/' | '÷' => Commande::Operateur(OpBinaire::Divise),
            '^' => Commande::Operateur(OpBinaire::Puissance),
            '%' => Commande::Pourcent,
            '=' => Commande::Egal,
            'p' | 'P' => Commande::Constante(Constante::Pi),
            'e' | 'E' => Commande::Constante(Constante::E),
            _ => return None,
        };
        Some(cmd)
    }
}
