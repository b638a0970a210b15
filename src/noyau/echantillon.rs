// src/noyau/echantillon.rs
//
// Plage (bornes entières des curseurs) + échantillonnage à pas fixe + Courbe.
//
// Contrats :
// - x_min ∈ [-500, 0], x_max ∈ [0, 500], x_min < x_max (sinon erreur explicite)
// - xs = x_min + i·pas, i ∈ 0..ceil((x_max - x_min)/pas)  (intervalle semi-ouvert)
// - garde-fou : nombre d’échantillons borné (anti-gel au pas fin)

use crate::erreur::{Erreur, Resultat};

pub const X_MIN_BORNE: i32 = -500;
pub const X_MAX_BORNE: i32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plage {
    x_min: i32,
    x_max: i32,
}

impl Plage {
    pub fn new(x_min: i32, x_max: i32) -> Resultat<Self> {
        if !(X_MIN_BORNE..=0).contains(&x_min) || !(0..=X_MAX_BORNE).contains(&x_max) {
            return Err(Erreur::PlageHorsBornes {
                min: x_min,
                max: x_max,
            });
        }
        if x_min >= x_max {
            return Err(Erreur::PlageVide {
                min: x_min,
                max: x_max,
            });
        }
        Ok(Self { x_min, x_max })
    }

    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Nombre d’échantillons au pas donné (même règle qu’un `arange`).
    pub fn nb_echantillons(&self, pas: f64) -> Resultat<usize> {
        if !pas.is_finite() || pas <= 0.0 {
            return Err(Erreur::PasInvalide(pas));
        }
        let n = (f64::from(self.x_max - self.x_min) / pas).ceil();
        Ok(n as usize)
    }
}

/// Abscisses de la plage au pas donné, bornées à `max` échantillons.
pub fn echantillonner(plage: Plage, pas: f64, max: usize) -> Resultat<Vec<f64>> {
    let n = plage.nb_echantillons(pas)?;
    if n > max {
        return Err(Erreur::TropDEchantillons { n, max });
    }

    let debut = f64::from(plage.x_min());
    Ok((0..n).map(|i| debut + i as f64 * pas).collect())
}

/// Courbe échantillonnée : abscisses et ordonnées parallèles (même longueur).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Courbe {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Courbe {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Resultat<Self> {
        if xs.len() != ys.len() {
            return Err(Erreur::LongueursDifferentes {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Points [x, y] (format attendu par egui_plot).
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y])
    }
}
