//! Noyau du traceur (sans UI)
//!
//! Organisation interne :
//! - normalisation.rs : notation humaine -> noms canoniques (e^x, ^, 2x…)
//! - jetons.rs        : tokenisation
//! - rpn.rs           : shunting-yard + construction Expr
//! - expr.rs          : AST flottant + vocabulaire de fonctions
//! - formule.rs       : pipeline complet + repli sin(x)
//! - echantillon.rs   : plage, échantillonnage, Courbe
//! - analyse.rs       : minima / maxima / points de bascule
//! - session.rs       : actions “boutons” + trait Rendu

pub mod analyse;
pub mod echantillon;
pub mod expr;
pub mod formule;
pub mod jetons;
pub mod normalisation;
pub mod rpn;
pub mod session;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use analyse::PointAnnote;
pub use echantillon::{Courbe, Plage};
pub use formule::FORMULE_REPLI;
pub use session::{Precision, Rendu, Requete, Session};
