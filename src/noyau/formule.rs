//! Noyau : formule compilée + calcul d’une trace (pipeline réel)
//!
//! texte -> normaliser -> jetons -> RPN -> Expr -> résolution des noms
//!       -> évaluation vectorisée sur l’échantillonnage
//!
//! Repli : un nom hors vocabulaire (et seulement ça) remplace la formule par sin(x),
//! légende "sin(x)". Toute autre erreur remonte à l’appelant.

use rayon::prelude::*;

use crate::erreur::{Erreur, Resultat};

use super::echantillon::{echantillonner, Courbe, Plage};
use super::expr::{Expr, Fonction};
use super::jetons::{format_tokens, tokenize};
use super::normalisation::normaliser;
use super::rpn::{format_rpn, from_rpn, to_rpn};

/// Formule de repli (et formule par défaut de l’UI).
pub const FORMULE_REPLI: &str = "sin(x)";

#[derive(Clone, Debug)]
pub struct Formule {
    texte: String,
    normalisee: String,
    expr: Expr,
}

impl Formule {
    /// Compile un texte utilisateur. Structure vérifiée d’abord, noms ensuite.
    pub fn compiler(texte: &str) -> Resultat<Self> {
        let s = texte.trim();
        if s.is_empty() {
            return Err(Erreur::FormuleVide);
        }

        let normalisee = normaliser(s);
        let jetons = tokenize(&normalisee)?;
        if jetons.is_empty() {
            return Err(Erreur::FormuleVide);
        }
        let rpn = to_rpn(&jetons)?;
        let expr = from_rpn(&rpn)?;

        tracing::trace!(
            jetons = %format_tokens(&jetons),
            rpn = %format_rpn(&rpn),
            expr = %expr,
            "formule compilée"
        );

        if let Some(nom) = expr.premier_nom_inconnu() {
            return Err(Erreur::NomInconnu(nom.to_string()));
        }

        Ok(Self {
            texte: texte.to_string(),
            normalisee,
            expr,
        })
    }

    /// sin(x), construite sans passer par le parse.
    pub fn repli() -> Self {
        Self {
            texte: FORMULE_REPLI.to_string(),
            normalisee: FORMULE_REPLI.to_string(),
            expr: Expr::Fn(Fonction::Sin, Box::new(Expr::X)),
        }
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn normalisee(&self) -> &str {
        &self.normalisee
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Évaluation vectorisée : une ordonnée par abscisse, ordre conservé.
    pub fn evaluer(&self, xs: &[f64]) -> Vec<f64> {
        xs.par_iter().map(|&x| self.expr.eval(x)).collect()
    }
}

/// Résultat d’un calcul : courbe + légende (texte saisi, ou "sin(x)" en repli).
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub courbe: Courbe,
    pub legende: String,
    pub repli: bool,
}

/// Échantillonne la plage, compile et évalue la formule.
pub fn calculer(formule: &str, plage: Plage, pas: f64, max_echantillons: usize) -> Resultat<Trace> {
    let xs = echantillonner(plage, pas, max_echantillons)?;

    let (f, repli) = match Formule::compiler(formule) {
        Ok(f) => (f, false),
        Err(Erreur::NomInconnu(nom)) => {
            tracing::warn!(formule, nom = %nom, "nom inconnu, repli sur {FORMULE_REPLI}");
            (Formule::repli(), true)
        }
        Err(e) => return Err(e),
    };

    let ys = f.evaluer(&xs);
    tracing::debug!(
        normalisee = f.normalisee(),
        n = xs.len(),
        pas,
        "formule évaluée"
    );

    Ok(Trace {
        courbe: Courbe::new(xs, ys)?,
        legende: f.texte().to_string(),
        repli,
    })
}
