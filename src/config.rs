// src/config.rs
//
// Réglages du traceur (traceur.toml, facultatif)
// ----------------------------------------------
// Champs absents => valeur par défaut. Fichier absent => réglages par défaut.
// Fichier illisible / invalide => avertissement + réglages par défaut.
// Valeurs hors domaine => ramenées dans les bornes (jamais d’échec au démarrage).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::erreur::{Erreur, Resultat};
use crate::noyau::echantillon::{X_MAX_BORNE, X_MIN_BORNE};
use crate::noyau::session::{MAX_ECHANTILLONS_DEFAUT, PAS_DEFAUT, PAS_FIN_DEFAUT};
use crate::noyau::{Precision, FORMULE_REPLI};

/// Nom du fichier cherché dans le répertoire courant.
pub const FICHIER_REGLAGES: &str = "traceur.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub pas: f64,
    pub pas_fin: f64,
    pub max_echantillons: usize,
    pub formule_defaut: String,
    pub x_min: i32,
    pub x_max: i32,
    pub fichier_aide: PathBuf,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            pas: PAS_DEFAUT,
            pas_fin: PAS_FIN_DEFAUT,
            max_echantillons: MAX_ECHANTILLONS_DEFAUT,
            formule_defaut: FORMULE_REPLI.to_string(),
            x_min: 0,
            x_max: 10,
            fichier_aide: PathBuf::from("usage.txt"),
        }
    }
}

impl Reglages {
    /// Lit et valide un fichier TOML.
    pub fn charger(chemin: impl AsRef<Path>) -> Resultat<Self> {
        let chemin = chemin.as_ref();
        let contenu = std::fs::read_to_string(chemin).map_err(|e| Erreur::Reglages {
            chemin: chemin.to_path_buf(),
            message: e.to_string(),
        })?;

        let brut: Reglages = toml::from_str(&contenu).map_err(|e| Erreur::Reglages {
            chemin: chemin.to_path_buf(),
            message: e.message().to_string(),
        })?;

        Ok(brut.valider())
    }

    /// Comme `charger`, mais ne peut pas échouer.
    pub fn charger_ou_defaut(chemin: impl AsRef<Path>) -> Self {
        let chemin = chemin.as_ref();
        if !chemin.exists() {
            tracing::debug!(?chemin, "pas de fichier de réglages, valeurs par défaut");
            return Self::default();
        }

        Self::charger(chemin).unwrap_or_else(|e| {
            tracing::warn!("réglages ignorés, valeurs par défaut: {e}");
            Self::default()
        })
    }

    pub fn precision(&self) -> Precision {
        Precision {
            pas: self.pas,
            pas_fin: self.pas_fin,
            max_echantillons: self.max_echantillons,
        }
    }

    /// Ramène chaque champ dans son domaine.
    fn valider(mut self) -> Self {
        let defaut = Self::default();

        if !self.pas.is_finite() || self.pas <= 0.0 {
            tracing::warn!(pas = self.pas, "pas invalide, {} retenu", defaut.pas);
            self.pas = defaut.pas;
        }
        if !self.pas_fin.is_finite() || self.pas_fin <= 0.0 {
            tracing::warn!(pas_fin = self.pas_fin, "pas fin invalide, {} retenu", defaut.pas_fin);
            self.pas_fin = defaut.pas_fin;
        }
        if self.max_echantillons == 0 {
            self.max_echantillons = defaut.max_echantillons;
        }
        if self.formule_defaut.trim().is_empty() {
            self.formule_defaut = defaut.formule_defaut;
        }

        self.x_min = self.x_min.clamp(X_MIN_BORNE, 0);
        self.x_max = self.x_max.clamp(0, X_MAX_BORNE);
        if self.x_min >= self.x_max {
            tracing::warn!(x_min = self.x_min, x_max = self.x_max, "plage vide, plage par défaut");
            self.x_min = defaut.x_min;
            self.x_max = defaut.x_max;
        }

        self
    }
}
