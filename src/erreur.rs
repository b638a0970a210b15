//! src/erreur.rs
//!
//! Erreurs du traceur (noyau + app).
//!
//! Les messages sont affichés tels quels dans l’UI : ils restent courts et en français.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Erreur {
    #[error("Entrée vide")]
    FormuleVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    /// Seule erreur “rattrapée” par le calcul : repli sur sin(x).
    #[error("nom inconnu: {0}")]
    NomInconnu(String),

    #[error("formule invalide: {0}")]
    FormuleInvalide(String),

    #[error("plage vide: x min ({min}) doit être < x max ({max})")]
    PlageVide { min: i32, max: i32 },

    #[error("plage hors bornes: x min ∈ [-500, 0], x max ∈ [0, 500] (reçu {min}, {max})")]
    PlageHorsBornes { min: i32, max: i32 },

    #[error("pas invalide: {0}")]
    PasInvalide(f64),

    #[error("trop d’échantillons: {n} (max {max}), réduire la plage")]
    TropDEchantillons { n: usize, max: usize },

    #[error("courbe incohérente: {xs} abscisses pour {ys} ordonnées")]
    LongueursDifferentes { xs: usize, ys: usize },

    #[error("aide introuvable ({chemin:?}): {source}")]
    AideIntrouvable {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides ({chemin:?}): {message}")]
    Reglages { chemin: PathBuf, message: String },
}

impl Erreur {
    /// Raccourci pour les erreurs de structure (parenthèses, opérandes…).
    pub fn invalide(msg: impl Into<String>) -> Self {
        Erreur::FormuleInvalide(msg.into())
    }
}

pub type Resultat<T> = Result<T, Erreur>;
