// src/app/aide.rs
//
// Aide → Utilisation : document texte lu à la demande (jamais au démarrage).

use std::path::Path;

use crate::erreur::{Erreur, Resultat};

/// Lit le document d’aide. Fichier manquant => `AideIntrouvable`.
pub fn charger_aide(chemin: impl AsRef<Path>) -> Resultat<String> {
    let chemin = chemin.as_ref();
    let texte = std::fs::read_to_string(chemin).map_err(|source| Erreur::AideIntrouvable {
        chemin: chemin.to_path_buf(),
        source,
    })?;
    tracing::debug!(?chemin, octets = texte.len(), "aide chargée");
    Ok(texte)
}
