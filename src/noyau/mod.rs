//! Noyau de la calculatrice (f64, sans UI)
//!
//! Organisation interne :
//! - format.rs   : affichage écran (12 chiffres) + forme brute pour l’historique
//! - trig.rs     : mode d’angle DEG/RAD + quarts de tour exacts
//! - eval.rs     : opérations binaires / fonctions unaires (NaN sur erreur de domaine)
//! - commande.rs : commandes de saisie + correspondance clavier
//! - saisie.rs   : automate de saisie (écran, opération en attente, frontière)

pub mod commande;
pub mod eval;
pub mod format;
pub mod saisie;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use commande::{Commande, Constante};
pub use eval::{FnUnaire, OpBinaire};
pub use saisie::{Calcul, Saisie};
pub use trig::ModeAngle;
