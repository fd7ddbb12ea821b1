// src/noyau/format.rs
//
// Affichage des nombres
// ---------------------
// - formater_nombre : écran (12 chiffres significatifs, sans zéros finaux)
// - brut            : historique (forme la plus courte qui relit le même f64)
// - non-finis       : "NaN", "Infinity", "-Infinity" (jetons lus par f64::from_str)

/// Chiffres significatifs gardés à l’écran.
const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Au-delà / en deçà : notation scientifique à l’écran.
const SCI_ECRAN_MAX: f64 = 1e15;
const SCI_ECRAN_MIN: f64 = 1e-9;

/// Mêmes seuils que la notation “brute” habituelle des navigateurs.
const SCI_BRUT_MAX: f64 = 1e21;
const SCI_BRUT_MIN: f64 = 1e-7;

/* ------------------------ Non-finis ------------------------ */

fn jeton_non_fini(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_sign_positive() {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/* ------------------------ Écran ------------------------ */

/// Formate une valeur pour l’écran.
///
/// - arrondi à 12 chiffres significatifs (0.1 + 0.2 → "0.3")
/// - jamais de zéros finaux forcés ("15", pas "15.000")
/// - "-0" ramené à "0"
pub fn formater_nombre(x: f64) -> String {
    if !x.is_finite() {
        return jeton_non_fini(x);
    }
    if x == 0.0 {
        return "0".to_string();
    }

    // arrondi via l’écriture scientifique (précision = significatifs - 1)
    let arrondi: f64 = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, x)
        .parse()
        .unwrap_or(x);

    let a = arrondi.abs();
    if !(SCI_ECRAN_MIN..SCI_ECRAN_MAX).contains(&a) {
        format!("{arrondi:e}")
    } else {
        format!("{arrondi}")
    }
}

/* ------------------------ Historique ------------------------ */

/// Forme brute (non arrondie) d’un résultat, telle qu’enregistrée dans l’historique.
pub fn brut(x: f64) -> String {
    if !x.is_finite() {
        return jeton_non_fini(x);
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if !(SCI_BRUT_MIN..SCI_BRUT_MAX).contains(&a) {
        format!("{x:e}")
    } else {
        format!("{x}")
    }
}
