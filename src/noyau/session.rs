//! src/noyau/session.rs
//!
//! Session de tracé (sans vue, sans egui).
//!
//! Rôle : résumer la trace courante (légende + nombre d’échantillons) et exécuter les actions
//! “boutons” : nouveau tracé, ajout, minima, maxima, points de bascule.
//!
//! Contrats :
//! - Chaque action recalcule la formule depuis la requête (comme un clic).
//! - Calcul AVANT rendu : en cas d’erreur, le rendu n’est pas touché.
//! - Synchrone : le rendu reçoit les ordres dans l’ordre des appels.

use crate::erreur::Resultat;

use super::analyse::{maxima_locaux, minima_locaux, points_de_bascule, PointAnnote};
use super::echantillon::{Courbe, Plage};
use super::formule::{calculer, Trace};

/// Pas des tracés et des extrema.
pub const PAS_DEFAUT: f64 = 0.01;

/// Pas des points de bascule : 1000× plus d’échantillons que PAS_DEFAUT.
pub const PAS_FIN_DEFAUT: f64 = 0.000_01;

/// Garde-fou : au pas fin, 20 M échantillons = une plage de 200 unités.
pub const MAX_ECHANTILLONS_DEFAUT: usize = 20_000_000;

/// Surface de rendu (figure). Implémentée par l’app (egui_plot) et par les tests.
pub trait Rendu {
    /// Efface tracés + annotations.
    fn effacer(&mut self);

    /// Ajoute une courbe avec sa légende.
    fn tracer(&mut self, courbe: &Courbe, legende: &str);

    /// Ajoute des points annotés (marqueurs + étiquettes).
    fn annoter(&mut self, points: &[PointAnnote]);
}

/// Entrées d’une action : formule saisie + bornes des curseurs.
#[derive(Clone, Copy, Debug)]
pub struct Requete<'a> {
    pub formule: &'a str,
    pub plage: Plage,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Precision {
    pub pas: f64,
    pub pas_fin: f64,
    pub max_echantillons: usize,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            pas: PAS_DEFAUT,
            pas_fin: PAS_FIN_DEFAUT,
            max_echantillons: MAX_ECHANTILLONS_DEFAUT,
        }
    }
}

/// Résumé de la dernière trace : la courbe elle-même n’est pas conservée
/// (au pas fin, elle peut compter des millions d’échantillons).
#[derive(Clone, Debug, PartialEq)]
pub struct Apercu {
    pub legende: String,
    pub repli: bool,
    pub echantillons: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    precision: Precision,
    courant: Option<Apercu>,
}

impl Session {
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            courant: None,
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Résumé de la dernière trace calculée (toutes actions confondues).
    pub fn courant(&self) -> Option<&Apercu> {
        self.courant.as_ref()
    }

    fn calculer(&mut self, req: &Requete<'_>, pas: f64) -> Resultat<Trace> {
        let trace = calculer(req.formule, req.plage, pas, self.precision.max_echantillons)?;
        self.courant = Some(Apercu {
            legende: trace.legende.clone(),
            repli: trace.repli,
            echantillons: trace.courbe.len(),
        });
        Ok(trace)
    }

    /// “Nouveau tracé” : efface la figure puis trace la formule.
    pub fn nouveau_trace(&mut self, req: &Requete<'_>, rendu: &mut impl Rendu) -> Resultat<Trace> {
        let pas = self.precision.pas;
        let trace = self.calculer(req, pas)?;
        rendu.effacer();
        rendu.tracer(&trace.courbe, &trace.legende);
        tracing::info!(legende = %trace.legende, n = trace.courbe.len(), "nouveau tracé");
        Ok(trace)
    }

    /// “Ajouter au tracé” : superpose la formule aux tracés existants.
    pub fn ajouter_trace(&mut self, req: &Requete<'_>, rendu: &mut impl Rendu) -> Resultat<Trace> {
        let pas = self.precision.pas;
        let trace = self.calculer(req, pas)?;
        rendu.tracer(&trace.courbe, &trace.legende);
        tracing::info!(legende = %trace.legende, n = trace.courbe.len(), "tracé ajouté");
        Ok(trace)
    }

    pub fn minima(&mut self, req: &Requete<'_>, rendu: &mut impl Rendu) -> Resultat<Vec<PointAnnote>> {
        let pas = self.precision.pas;
        let trace = self.calculer(req, pas)?;
        let points = minima_locaux(&trace.courbe);
        rendu.annoter(&points);
        tracing::info!(n = points.len(), "minima locaux");
        Ok(points)
    }

    pub fn maxima(&mut self, req: &Requete<'_>, rendu: &mut impl Rendu) -> Resultat<Vec<PointAnnote>> {
        let pas = self.precision.pas;
        let trace = self.calculer(req, pas)?;
        let points = maxima_locaux(&trace.courbe);
        rendu.annoter(&points);
        tracing::info!(n = points.len(), "maxima locaux");
        Ok(points)
    }

    /// Points de bascule au pas fin (coût : (x_max - x_min)/pas_fin échantillons).
    pub fn bascules(&mut self, req: &Requete<'_>, rendu: &mut impl Rendu) -> Resultat<Vec<PointAnnote>> {
        let pas = self.precision.pas_fin;
        let trace = self.calculer(req, pas)?;
        let points = points_de_bascule(&trace.courbe);
        rendu.annoter(&points);
        tracing::info!(n = points.len(), "points de bascule");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::{Apercu, Precision, Rendu, Requete, Session};
    use crate::erreur::Erreur;
    use crate::noyau::analyse::PointAnnote;
    use crate::noyau::echantillon::{Courbe, Plage};

    /// Rendu “journal” : enregistre les ordres reçus.
    #[derive(Default)]
    struct Journal {
        ordres: Vec<String>,
    }

    impl Rendu for Journal {
        fn effacer(&mut self) {
            self.ordres.push("effacer".into());
        }
        fn tracer(&mut self, courbe: &Courbe, legende: &str) {
            self.ordres.push(format!("tracer {legende} ({})", courbe.len()));
        }
        fn annoter(&mut self, points: &[PointAnnote]) {
            self.ordres.push(format!("annoter {}", points.len()));
        }
    }

    fn req(formule: &str, x_min: i32, x_max: i32) -> Requete<'_> {
        Requete {
            formule,
            plage: Plage::new(x_min, x_max).unwrap(),
        }
    }

    #[test]
    fn ordres_dans_l_ordre_des_actions() {
        let mut s = Session::default();
        let mut j = Journal::default();

        s.nouveau_trace(&req("sin(x)", 0, 10), &mut j).unwrap();
        s.ajouter_trace(&req("cos(x)", 0, 10), &mut j).unwrap();
        s.nouveau_trace(&req("x^2", -1, 1), &mut j).unwrap();

        assert_eq!(
            j.ordres,
            vec![
                "effacer",
                "tracer sin(x) (1000)",
                "tracer cos(x) (1000)",
                "effacer",
                "tracer x^2 (200)",
            ]
        );
        assert_eq!(s.courant().unwrap().legende, "x^2");
    }

    #[test]
    fn erreur_ne_touche_pas_le_rendu() {
        let mut s = Session::default();
        let mut j = Journal::default();
        s.nouveau_trace(&req("sin(x)", 0, 10), &mut j).unwrap();

        let err = s.nouveau_trace(&req("sin(x", 0, 10), &mut j).unwrap_err();
        assert!(matches!(err, Erreur::FormuleInvalide(_)));
        assert_eq!(j.ordres.len(), 2);
        assert_eq!(s.courant().unwrap().legende, "sin(x)");
    }

    #[test]
    fn repli_visible_dans_la_legende() {
        let mut s = Session::default();
        let mut j = Journal::default();
        let t = s.nouveau_trace(&req("foo(x)", 0, 10), &mut j).unwrap();
        assert!(t.repli);
        assert_eq!(j.ordres[1], "tracer sin(x) (1000)");
    }

    #[test]
    fn extrema_du_sinus() {
        let mut s = Session::default();
        let mut j = Journal::default();

        // sur [0, 10[ : maxima en π/2, 5π/2 ; minimum en 3π/2
        let max = s.maxima(&req("sin(x)", 0, 10), &mut j).unwrap();
        let min = s.minima(&req("sin(x)", 0, 10), &mut j).unwrap();

        assert_eq!(max.len(), 2);
        assert_eq!(min.len(), 1);
        assert!((max[0].x - std::f64::consts::FRAC_PI_2).abs() < 0.01);
        assert!((min[0].x - 3.0 * std::f64::consts::FRAC_PI_2).abs() < 0.01);
        assert_eq!(max[0].etiquette, "[1.57, 1.0]");
        assert_eq!(j.ordres, vec!["annoter 2", "annoter 1"]);
    }

    #[test]
    fn bascules_au_pas_fin() {
        let mut s = Session::new(Precision {
            pas_fin: 0.001,
            ..Precision::default()
        });
        let mut j = Journal::default();

        // change de signe entre 0.500 et 0.501 (un zéro exact serait exclu)
        let b = s.bascules(&req("x - 0.5004", 0, 1), &mut j).unwrap();
        assert_eq!(b.len(), 1);
        assert!((b[0].x - 0.5005).abs() < 1e-9);
        assert_eq!(b[0].etiquette, "[0.5, 0.0]");
        assert_eq!(s.courant().unwrap().echantillons, 1000);
    }

    #[test]
    fn bascules_garde_fou() {
        let mut s = Session::new(Precision {
            max_echantillons: 1_000,
            ..Precision::default()
        });
        let mut j = Journal::default();
        let err = s.bascules(&req("x", -1, 1), &mut j).unwrap_err();
        assert!(matches!(err, Erreur::TropDEchantillons { .. }));
        assert!(j.ordres.is_empty());
    }

    #[test]
    fn meme_requete_meme_courbe() {
        let mut s = Session::default();
        let mut j = Journal::default();
        let a = s.nouveau_trace(&req("x^3 - 2x", -3, 3), &mut j).unwrap();
        let b = s.nouveau_trace(&req("x^3 - 2x", -3, 3), &mut j).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn courant_resume_sans_courbe() {
        let mut s = Session::new(Precision {
            pas_fin: 0.001,
            ..Precision::default()
        });
        let mut j = Journal::default();

        s.bascules(&req("foo(x)", -5, 5), &mut j).unwrap();
        assert_eq!(
            s.courant(),
            Some(&Apercu {
                legende: "sin(x)".into(),
                repli: true,
                echantillons: 10_000,
            })
        );
    }
}
