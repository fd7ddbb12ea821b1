//! Tests scientifiques (campagne) : scénarios de bout en bout sur l’automate de saisie.
//!
//! Notes :
//! - Les séquences sont tapées comme au clavier (`Commande::depuis_touche`).
//! - Les résultats historisés sont BRUTS (pas d’arrondi 12 chiffres), l’écran est arrondi.
//! - Propriété de chaînage vérifiée par proptest : sans `=`, évaluation gauche → droite.

use proptest::prelude::*;

use super::commande::Commande;
use super::eval::{eval_binaire, FnUnaire, OpBinaire};
use super::format::formater_nombre;
use super::saisie::{Calcul, Saisie};

fn taper(s: &mut Saisie, touches: &str) -> Vec<Calcul> {
    touches
        .chars()
        .map(|c| Commande::depuis_touche(c).unwrap_or_else(|| panic!("touche inconnue {c:?}")))
        .filter_map(|cmd| s.appliquer(cmd))
        .collect()
}

fn calcul(expression: &str, resultat: &str) -> Calcul {
    Calcul {
        expression: expression.to_string(),
        resultat: resultat.to_string(),
    }
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_douze_plus_trois() {
    let mut s = Saisie::default();
    let calculs = taper(&mut s, "12+3=");
    assert_eq!(s.affichage(), "15");
    assert_eq!(calculs, vec![calcul("12 + 3", "15")]);
}

#[test]
fn sci_chainage_sans_egal() {
    let mut s = Saisie::default();
    let calculs = taper(&mut s, "2+3+");
    // le second + évalue 2+3 et l’affiche
    assert_eq!(s.affichage(), "5");
    assert!(calculs.is_empty(), "le chaînage n’historise pas");

    let calculs = taper(&mut s, "4=");
    assert_eq!(s.affichage(), "9");
    assert_eq!(calculs, vec![calcul("5 + 4", "9")]);
}

#[test]
fn sci_division_par_zero() {
    let mut s = Saisie::default();
    let calculs = taper(&mut s, "6/0=");
    assert_eq!(s.affichage(), "NaN");
    assert_eq!(calculs, vec![calcul("6 ÷ 0", "NaN")]);
}

#[test]
fn sci_racine_de_moins_quatre() {
    let mut s = Saisie::default();
    taper(&mut s, "4");
    s.appliquer(Commande::Signe);
    assert_eq!(s.affichage(), "-4");

    let c = s.appliquer(Commande::Fonction(FnUnaire::Racine));
    assert_eq!(s.affichage(), "NaN");
    assert_eq!(c, Some(calcul("sqrt(-4)", "NaN")));
}

#[test]
fn sci_decimales_repetees() {
    let mut s = Saisie::default();
    taper(&mut s, "3.14...");
    assert_eq!(s.affichage(), "3.14");
}

#[test]
fn sci_resultat_brut_vs_ecran() {
    let mut s = Saisie::default();
    let calculs = taper(&mut s, ".1+.2=");
    assert_eq!(s.affichage(), "0.3");
    assert_eq!(calculs, vec![calcul("0.1 + 0.2", "0.30000000000000004")]);
}

#[test]
fn sci_nan_se_propage() {
    let mut s = Saisie::default();
    taper(&mut s, "6/0=");
    let calculs = taper(&mut s, "+1=");
    assert_eq!(s.affichage(), "NaN");
    assert_eq!(calculs[0].resultat, "NaN");
}

#[test]
fn sci_trig_deg_puis_rad() {
    let mut s = Saisie::default();
    taper(&mut s, "180");
    let c = s.appliquer(Commande::Fonction(FnUnaire::Sin));
    assert_eq!(c.map(|c| c.resultat).as_deref(), Some("0"));

    s.appliquer(Commande::Effacer);
    s.appliquer(Commande::BasculerAngle);
    taper(&mut s, "p");
    s.appliquer(Commande::Fonction(FnUnaire::Cos));
    assert_eq!(s.affichage(), "-1");
}

#[test]
fn sci_puissance_et_log() {
    let mut s = Saisie::default();
    taper(&mut s, "10^3=");
    assert_eq!(s.affichage(), "1000");
    s.appliquer(Commande::Fonction(FnUnaire::Log10));
    assert_eq!(s.affichage(), "3");
}

/* ------------------------ Propriété : chaînage gauche → droite ------------------------ */

fn op_strategie() -> impl Strategy<Value = OpBinaire> {
    prop_oneof![
        Just(OpBinaire::Plus),
        Just(OpBinaire::Moins),
        Just(OpBinaire::Fois),
        Just(OpBinaire::Divise),
    ]
}

fn touche(op: OpBinaire) -> char {
    match op {
        OpBinaire::Plus => '+',
        OpBinaire::Moins => '-',
        OpBinaire::Fois => '*',
        OpBinaire::Divise => '/',
        OpBinaire::Puissance => '^',
    }
}

proptest! {
    #[test]
    fn chainage_egale_evaluation_sequentielle(
        premier in 0u32..1000,
        suite in prop::collection::vec((op_strategie(), 0u32..1000), 1..6),
    ) {
        let mut s = Saisie::default();
        let mut touches = premier.to_string();

        // modèle : ((a op b) op c)... ; l’opérande gauche intermédiaire n’est pas arrondie
        let mut attendu = f64::from(premier);
        for (op, v) in suite {
            touches.push(touche(op));
            touches.push_str(&v.to_string());
            attendu = eval_binaire(attendu, f64::from(v), op);
        }
        touches.push('=');

        taper(&mut s, &touches);
        prop_assert_eq!(s.affichage(), formater_nombre(attendu));
    }
}
