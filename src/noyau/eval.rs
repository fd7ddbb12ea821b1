//! Noyau — évaluation numérique (f64)
//!
//! Erreurs de domaine (÷0, √ négatif, 1/0) : sentinelle NaN, jamais d’erreur levée.
//! Débordement : sémantique IEEE (±inf), pas d’erreur non plus.

use std::fmt;

use super::trig::{trig, ModeAngle, TrigFn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl OpBinaire {
    #[cfg(test)]
    pub const TOUS: [OpBinaire; 5] = [
        OpBinaire::Plus,
        OpBinaire::Moins,
        OpBinaire::Fois,
        OpBinaire::Divise,
        OpBinaire::Puissance,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Plus => "+",
            OpBinaire::Moins => "-",
            OpBinaire::Fois => "×",
            OpBinaire::Divise => "÷",
            OpBinaire::Puissance => "^",
        }
    }
}

impl fmt::Display for OpBinaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnUnaire {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Racine,
    Carre,
    Inverse,
    Exp,
    Abs,
}

impl FnUnaire {
    pub const TOUTES: [FnUnaire; 10] = [
        FnUnaire::Sin,
        FnUnaire::Cos,
        FnUnaire::Tan,
        FnUnaire::Log10,
        FnUnaire::Ln,
        FnUnaire::Racine,
        FnUnaire::Carre,
        FnUnaire::Inverse,
        FnUnaire::Exp,
        FnUnaire::Abs,
    ];

    /// Nom utilisé dans l’expression d’historique : "<nom>(<x>)".
    pub fn nom(self) -> &'static str {
        match self {
            FnUnaire::Sin => "sin",
            FnUnaire::Cos => "cos",
            FnUnaire::Tan => "tan",
            FnUnaire::Log10 => "log",
            FnUnaire::Ln => "ln",
            FnUnaire::Racine => "sqrt",
            FnUnaire::Carre => "sqr",
            FnUnaire::Inverse => "recip",
            FnUnaire::Exp => "exp",
            FnUnaire::Abs => "abs",
        }
    }

    /// Libellé du bouton.
    pub fn libelle(self) -> &'static str {
        match self {
            FnUnaire::Racine => "√x",
            FnUnaire::Carre => "x²",
            FnUnaire::Inverse => "1/x",
            FnUnaire::Exp => "eˣ",
            FnUnaire::Abs => "|x|",
            autre => autre.nom(),
        }
    }
}

/// a op b. `÷` par zéro → NaN.
pub fn eval_binaire(a: f64, b: f64, op: OpBinaire) -> f64 {
    match op {
        OpBinaire::Plus => a + b,
        OpBinaire::Moins => a - b,
        OpBinaire::Fois => a * b,
        OpBinaire::Divise if b == 0.0 => f64::NAN,
        OpBinaire::Divise => a / b,
        OpBinaire::Puissance => a.powf(b),
    }
}

/// f(x). Les trig lisent `x` selon `mode` (DEG : conversion en radians).
///
/// log/ln s’appliquent à |x| : un négatif est reflété en positif, 0 donne -inf.
pub fn eval_unaire(x: f64, f: FnUnaire, mode: ModeAngle) -> f64 {
    match f {
        FnUnaire::Sin => trig(x, TrigFn::Sin, mode),
        FnUnaire::Cos => trig(x, TrigFn::Cos, mode),
        FnUnaire::Tan => trig(x, TrigFn::Tan, mode),
        FnUnaire::Log10 => x.abs().log10(),
        FnUnaire::Ln => x.abs().ln(),
        FnUnaire::Racine if x < 0.0 => f64::NAN,
        FnUnaire::Racine => x.sqrt(),
        FnUnaire::Carre => x * x,
        FnUnaire::Inverse if x == 0.0 => f64::NAN,
        FnUnaire::Inverse => 1.0 / x,
        FnUnaire::Exp => x.exp(),
        FnUnaire::Abs => x.abs(),
    }
}
