// src/noyau/trig.rs
//
// Trig + mode d’angle
// -------------------
// - DEG : conversion en radians avant sin/cos/tan
// - DEG : quarts de tour (k·90°) évalués exactement (0, ±1, tan indéfini → NaN)
// - RAD : f64 standard

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Deg,
    Rad,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Deg => ModeAngle::Rad,
            ModeAngle::Rad => ModeAngle::Deg,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Deg => "DEG",
            ModeAngle::Rad => "RAD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

/// sin/cos/tan de `x`, lu en degrés ou radians selon `mode`.
pub fn trig(x: f64, f: TrigFn, mode: ModeAngle) -> f64 {
    let rad = match mode {
        ModeAngle::Deg => {
            if let Some(v) = quart_de_tour(x, f) {
                return v;
            }
            x.to_radians()
        }
        ModeAngle::Rad => x,
    };

    match f {
        TrigFn::Sin => rad.sin(),
        TrigFn::Cos => rad.cos(),
        TrigFn::Tan => rad.tan(),
    }
}

/// Plus grand multiple de 90° encore représentable exactement (2^53).
const QUARTS_MAX: f64 = 9_007_199_254_740_992.0;

/// Reconnaît k·90° et retourne la valeur exacte.
///
/// Table sur [0°, 360°) :
///   k mod 4 | sin | cos | tan
///   0       |  0  |  1  |  0
///   1       |  1  |  0  | indéfini
///   2       |  0  | -1  |  0
///   3       | -1  |  0  | indéfini
fn quart_de_tour(deg: f64, f: TrigFn) -> Option<f64> {
    if !deg.is_finite() {
        return None;
    }

    let q = deg / 90.0;
    if q.fract() != 0.0 || q.abs() > QUARTS_MAX || q * 90.0 != deg {
        return None;
    }

    let (s, c) = match q.rem_euclid(4.0) as u8 {
        0 => (0.0, 1.0),
        1 => (1.0, 0.0),
        2 => (0.0, -1.0),
        _ => (-1.0, 0.0),
    };

    Some(match f {
        TrigFn::Sin => s,
        TrigFn::Cos => c,
        TrigFn::Tan if c == 0.0 => f64::NAN,
        TrigFn::Tan => s / c,
    })
}
