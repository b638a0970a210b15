// src/noyau/analyse.rs
//
// Extrema locaux + points de bascule sur une courbe échantillonnée.
//
// - Extrema : d[k] = y[k+1] - y[k], s[k] = signe(d[k]) ∈ {-1, 0, 1} (NaN si NaN)
//     minimum en k+1 si s[k+1] - s[k] > 0, maximum si < 0.
//   Zéro est son propre signe : un plateau déclenche deux transitions de ±1.
// - Bascules : passage de y par zéro (PAS un zéro de la dérivée) entre deux
//   échantillons de signes strictement opposés ; point = milieu du segment.
//
// Étiquette : "[x, y]" arrondis à 3 décimales (demi vers le pair), écrits comme des flottants.

use super::echantillon::Courbe;

#[derive(Clone, Debug, PartialEq)]
pub struct PointAnnote {
    pub x: f64,
    pub y: f64,
    pub etiquette: String,
}

impl PointAnnote {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            etiquette: etiquette(x, y),
        }
    }
}

/// Arrondi à 3 décimales : rint(v·1000)/1000.
pub fn arrondi3(v: f64) -> f64 {
    (v * 1000.0).round_ties_even() / 1000.0
}

/// Flottant “lisible” : 1 -> "1.0", nan -> "nan".
fn format_flottant(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        let s = if v > 0.0 { "inf" } else { "-inf" };
        s.to_string()
    } else if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

pub fn etiquette(x: f64, y: f64) -> String {
    format!(
        "[{}, {}]",
        format_flottant(arrondi3(x)),
        format_flottant(arrondi3(y))
    )
}

fn signe(d: f64) -> f64 {
    if d > 0.0 {
        1.0
    } else if d < 0.0 {
        -1.0
    } else if d == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Points k+1 dont la variation de signe de la pente satisfait `garde`.
fn extrema(courbe: &Courbe, garde: impl Fn(f64) -> bool) -> Vec<PointAnnote> {
    let (xs, ys) = (courbe.xs(), courbe.ys());
    if ys.len() < 3 {
        return Vec::new();
    }

    let signes: Vec<f64> = ys.windows(2).map(|w| signe(w[1] - w[0])).collect();

    signes
        .windows(2)
        .enumerate()
        .filter(|(_, s)| garde(s[1] - s[0]))
        .map(|(k, _)| PointAnnote::new(xs[k + 1], ys[k + 1]))
        .collect()
}

pub fn minima_locaux(courbe: &Courbe) -> Vec<PointAnnote> {
    extrema(courbe, |ds| ds > 0.0)
}

pub fn maxima_locaux(courbe: &Courbe) -> Vec<PointAnnote> {
    extrema(courbe, |ds| ds < 0.0)
}

pub fn points_de_bascule(courbe: &Courbe) -> Vec<PointAnnote> {
    courbe
        .xs()
        .windows(2)
        .zip(courbe.ys().windows(2))
        .filter(|(_, y)| (y[0] > 0.0 && y[1] < 0.0) || (y[0] < 0.0 && y[1] > 0.0))
        .map(|(x, y)| PointAnnote::new((x[1] + x[0]) / 2.0, (y[1] + y[0]) / 2.0))
        .collect()
}
