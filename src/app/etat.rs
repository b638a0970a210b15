//! src/app/etat.rs
//!
//! État UI du traceur (sans vue egui).
//!
//! Rôle : contenir la saisie (formule + curseurs), la figure, la session et
//! les messages, et exécuter les actions “boutons” via le noyau.
//!
//! Contrats :
//! - Aucune analyse ici : tout passe par `Session` (noyau).
//! - Une erreur s’affiche sous la saisie et laisse la figure intacte.
//! - La fenêtre d’aide relit son document à chaque ouverture.

use std::path::PathBuf;

use crate::config::Reglages;
use crate::erreur::Resultat;
use crate::noyau::{Plage, Requete, Session};

use super::aide::charger_aide;
use super::figure::Figure;

/// Les cinq boutons du traceur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    NouveauTrace,
    Ajouter,
    Minima,
    Maxima,
    Bascules,
}

impl Action {
    pub const TOUTES: [Action; 5] = [
        Action::NouveauTrace,
        Action::Ajouter,
        Action::Minima,
        Action::Maxima,
        Action::Bascules,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Action::NouveauTrace => "Nouveau tracé",
            Action::Ajouter => "Ajouter au tracé",
            Action::Minima => "Minima locaux",
            Action::Maxima => "Maxima locaux",
            Action::Bascules => "Points de bascule",
        }
    }

    pub fn info_bulle(self) -> &'static str {
        match self {
            Action::NouveauTrace => "Efface la figure et trace la formule",
            Action::Ajouter => "Superpose la formule aux tracés existants",
            Action::Minima => "Marque les minima locaux de la formule",
            Action::Maxima => "Marque les maxima locaux de la formule",
            Action::Bascules => "Marque les passages par zéro (pas fin, plus lent)",
        }
    }
}

/// Fenêtre Aide → Utilisation.
#[derive(Debug, Default)]
pub struct FenetreAide {
    pub ouverte: bool,
    pub contenu: Option<Resultat<String>>,
}

#[derive(Debug)]
pub struct AppTraceur {
    // --- saisie ---
    pub formule: String,
    pub x_min: i32,
    pub x_max: i32,

    // --- messages ---
    pub erreur: String,
    pub statut: String,

    // --- figure + noyau ---
    pub figure: Figure,
    pub session: Session,

    // --- aide ---
    pub fichier_aide: PathBuf,
    pub aide: FenetreAide,

    // --- UX ---
    pub focus_entree: bool,
    // dernière génération de figure dessinée (axes à réinitialiser si différente)
    pub generation_affichee: u64,
}

impl Default for AppTraceur {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppTraceur {
    pub fn new(reglages: &Reglages) -> Self {
        let session = Session::new(reglages.precision());
        tracing::debug!(precision = ?session.precision(), "session prête");

        Self {
            formule: reglages.formule_defaut.clone(),
            x_min: reglages.x_min,
            x_max: reglages.x_max,
            erreur: String::new(),
            statut: String::new(),
            figure: Figure::default(),
            session,
            fichier_aide: reglages.fichier_aide.clone(),
            aide: FenetreAide::default(),
            focus_entree: true,
            generation_affichee: 0,
        }
    }

    /// Exécute une action “bouton” : calcul (noyau) puis rendu (figure).
    pub fn executer(&mut self, action: Action) {
        let plage = match Plage::new(self.x_min, self.x_max) {
            Ok(p) => p,
            Err(e) => return self.set_erreur(e.to_string()),
        };
        let req = Requete {
            formule: &self.formule,
            plage,
        };

        let session = &mut self.session;
        let figure = &mut self.figure;
        let resultat = match action {
            Action::NouveauTrace => session
                .nouveau_trace(&req, figure)
                .map(|t| statut_trace(t.repli, &t.legende)),
            Action::Ajouter => session
                .ajouter_trace(&req, figure)
                .map(|t| statut_trace(t.repli, &t.legende)),
            Action::Minima => session
                .minima(&req, figure)
                .map(|p| format!("{} minimum(s) local(aux)", p.len())),
            Action::Maxima => session
                .maxima(&req, figure)
                .map(|p| format!("{} maximum(s) local(aux)", p.len())),
            Action::Bascules => session
                .bascules(&req, figure)
                .map(|p| format!("{} point(s) de bascule", p.len())),
        };

        match resultat {
            Ok(statut) => {
                self.erreur.clear();
                self.statut = statut;
            }
            Err(e) => {
                tracing::warn!(action = ?action, "action refusée: {e}");
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.statut.clear();
        self.focus_entree = true;
    }

    /// Ouvre la fenêtre d’aide (relit le document).
    pub fn ouvrir_aide(&mut self) {
        self.aide.contenu = Some(charger_aide(&self.fichier_aide));
        self.aide.ouverte = true;
    }

    pub fn fermer_aide(&mut self) {
        self.aide.ouverte = false;
    }
}

fn statut_trace(repli: bool, legende: &str) -> String {
    if repli {
        format!("nom inconnu : tracé de {legende} à la place")
    } else {
        format!("tracé : {legende}")
    }
}
