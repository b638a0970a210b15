// src/app/figure.rs
//
// Figure : implémentation egui du trait Rendu.
//
// La figure ne calcule rien : elle garde les courbes et les marqueurs reçus
// de la Session, et la vue (vue.rs) les dessine avec egui_plot à chaque frame.

use crate::noyau::{Courbe, PointAnnote, Rendu};

/// Une courbe tracée, prête pour egui_plot.
#[derive(Clone, Debug)]
pub struct TraceFigure {
    pub legende: String,
    pub points: Vec<[f64; 2]>,
}

/// Un groupe de marqueurs (un clic Minima / Maxima / Bascules).
#[derive(Clone, Debug)]
pub struct Marqueurs {
    pub points: Vec<PointAnnote>,
}

#[derive(Clone, Debug, Default)]
pub struct Figure {
    traces: Vec<TraceFigure>,
    marqueurs: Vec<Marqueurs>,
    // incrémentée à chaque effacement : la vue réinitialise alors les axes
    generation: u64,
}

impl Figure {
    pub fn traces(&self) -> &[TraceFigure] {
        &self.traces
    }

    pub fn marqueurs(&self) -> &[Marqueurs] {
        &self.marqueurs
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn est_vide(&self) -> bool {
        self.traces.is_empty() && self.marqueurs.is_empty()
    }
}

impl Rendu for Figure {
    fn effacer(&mut self) {
        self.traces.clear();
        self.marqueurs.clear();
        self.generation += 1;
    }

    fn tracer(&mut self, courbe: &Courbe, legende: &str) {
        self.traces.push(TraceFigure {
            legende: legende.to_string(),
            points: courbe.points().collect(),
        });
    }

    fn annoter(&mut self, points: &[PointAnnote]) {
        // un clic sans résultat n’ajoute pas de groupe vide
        if points.is_empty() {
            return;
        }
        self.marqueurs.push(Marqueurs {
            points: points.to_vec(),
        });
    }
}
