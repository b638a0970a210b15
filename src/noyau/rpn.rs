// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name) suivi de '(' => appel (fonction connue ou non : la résolution tranche plus tard)
// - Ident(name) seul        => x, ou nom inconnu (Expr::Nom)
// - Fonction connue sans '(' => erreur (sin x n’est pas accepté)
// - Moins unaire => opérateur préfixe Neg, plus fort que * / mais plus faible que la puissance
//   ("-x^2" = -(x^2), "2^-x" accepté) ; plus unaire ignoré.
// - Puissance associative à droite : x^2^3 = x^(2^3)
//
// NOTE:
// - Les appels sont des opérateurs “collés” à leur argument
//   et sortent après la parenthèse fermante.

use std::fmt;

use crate::erreur::{Erreur, Resultat};

use super::expr::{Expr, Fonction};
use super::jetons::Tok;

/// Élément de la RPN (postfix).
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Num(f64),
    Pi,
    Ident(String),
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Appel(String),
}

impl fmt::Display for Rpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rpn::Num(v) => write!(f, "{v}"),
            Rpn::Pi => write!(f, "π"),
            Rpn::Ident(n) => write!(f, "{n}"),
            Rpn::Add => write!(f, "+"),
            Rpn::Sub => write!(f, "-"),
            Rpn::Mul => write!(f, "*"),
            Rpn::Div => write!(f, "/"),
            Rpn::Pow => write!(f, "^"),
            Rpn::Neg => write!(f, "neg"),
            Rpn::Appel(n) => write!(f, "{n}()"),
        }
    }
}

/// Pile d’opérateurs du shunting-yard.
#[derive(Clone, Debug)]
enum Op {
    Bin(Rpn),
    Neg,
    Appel(String),
    LPar,
}

fn precedence(r: &Rpn) -> i32 {
    match r {
        Rpn::Add | Rpn::Sub => 1,
        Rpn::Mul | Rpn::Div => 2,
        Rpn::Neg => 3,
        Rpn::Pow => 4,
        _ => 0,
    }
}

fn is_right_associative(r: &Rpn) -> bool {
    matches!(r, Rpn::Pow)
}

fn binaire(t: &Tok) -> Option<Rpn> {
    match t {
        Tok::Plus => Some(Rpn::Add),
        Tok::Minus => Some(Rpn::Sub),
        Tok::Star => Some(Rpn::Mul),
        Tok::Slash => Some(Rpn::Div),
        Tok::Pow => Some(Rpn::Pow),
        _ => None,
    }
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Ident("x"), RPar, Pow, Num(2)]
///   rpn:    [Ident("x"), Appel("sin"), Num(2), Pow]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Rpn>> {
    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter les opérateurs unaires et les opérandes manquants.
    let mut prev_was_value = false;

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(_) | Tok::Pi | Tok::Ident(_) if prev_was_value => {
                return Err(Erreur::invalide("opérateur manquant entre deux valeurs"));
            }

            Tok::Num(v) => {
                out.push(Rpn::Num(*v));
                prev_was_value = true;
            }

            Tok::Pi => {
                out.push(Rpn::Pi);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                let appel = matches!(tokens.get(i + 1), Some(Tok::LPar));
                if appel {
                    // appel : reste sur la pile jusqu’à sa parenthèse fermante
                    ops.push(Op::Appel(name.clone()));
                    prev_was_value = false;
                } else if Fonction::depuis_nom(name).is_some() {
                    return Err(Erreur::invalide(format!(
                        "{name} attend un argument entre parenthèses"
                    )));
                } else {
                    out.push(Rpn::Ident(name.clone()));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(Erreur::invalide("opérateur manquant avant '('"));
                }
                ops.push(Op::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(Erreur::invalide("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    match top {
                        Op::LPar => {
                            fermee = true;
                            break;
                        }
                        Op::Bin(r) => out.push(r),
                        Op::Neg => out.push(Rpn::Neg),
                        Op::Appel(n) => out.push(Rpn::Appel(n)),
                    }
                }
                if !fermee {
                    return Err(Erreur::invalide("parenthèse fermante inattendue"));
                }

                // si un appel est au sommet, il sort avec son argument
                if let Some(Op::Appel(_)) = ops.last() {
                    if let Some(Op::Appel(n)) = ops.pop() {
                        out.push(Rpn::Appel(n));
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // unaire : '-' devient Neg (préfixe, ne dépile rien) ; '+' est neutre
                if matches!(tok, Tok::Minus) {
                    ops.push(Op::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow => {
                let Some(r) = binaire(tok) else {
                    return Err(Erreur::invalide("opérateur inconnu"));
                };
                if !prev_was_value {
                    return Err(Erreur::invalide(format!("opérande manquant avant '{r}'")));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' (ou un appel)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    let top_r = match top {
                        Op::Bin(t) => t.clone(),
                        Op::Neg => Rpn::Neg,
                        Op::LPar | Op::Appel(_) => break,
                    };

                    let p_top = precedence(&top_r);
                    let p_tok = precedence(&r);

                    let doit_pop = if is_right_associative(&r) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(top_r);
                }

                ops.push(Op::Bin(r));
                prev_was_value = false;
            }
        }
    }

    if !tokens.is_empty() && !prev_was_value {
        return Err(Erreur::invalide("opérande manquant en fin d’expression"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        match op {
            Op::LPar => return Err(Erreur::invalide("parenthèses non fermées")),
            Op::Bin(r) => out.push(r),
            Op::Neg => out.push(Rpn::Neg),
            Op::Appel(n) => out.push(Rpn::Appel(n)),
        }
    }

    Ok(out)
}

/// Profondeur maximale de l’arbre : eval / Display / Drop sont récursifs.
pub const MAX_PROFONDEUR: usize = 1_000;

/// Garde-fou sur la taille (un nœud par élément de RPN).
pub const MAX_NOEUDS: usize = 200_000;

fn manquant() -> Erreur {
    Erreur::invalide("expression invalide")
}

/// Pile de construction : chaque Expr garde sa profondeur.
struct Pile(Vec<(Expr, usize)>);

impl Pile {
    fn pop(&mut self) -> Resultat<(Expr, usize)> {
        self.0.pop().ok_or_else(manquant)
    }

    fn push(&mut self, e: Expr, profondeur: usize) -> Resultat<()> {
        if profondeur > MAX_PROFONDEUR {
            return Err(Erreur::invalide("expression trop profonde"));
        }
        self.0.push((e, profondeur));
        Ok(())
    }
}

/// Construit une Expr à partir d’une RPN.
///
/// - Ident("x") => Expr::X ; autre ident => Expr::Nom (résolu plus tard)
/// - Appel(name):
///     - fonction du vocabulaire => Expr::Fn
///     - x => erreur (x n’est pas une fonction)
///     - sinon => Expr::Appel (résolu plus tard)
/// - au-delà de MAX_PROFONDEUR niveaux ou MAX_NOEUDS nœuds => FormuleInvalide
pub fn from_rpn(rpn: &[Rpn]) -> Resultat<Expr> {
    if rpn.len() > MAX_NOEUDS {
        return Err(Erreur::invalide("expression trop longue"));
    }

    let mut st = Pile(Vec::new());

    for r in rpn {
        match r {
            Rpn::Num(v) => st.push(Expr::Num(*v), 1)?,
            Rpn::Pi => st.push(Expr::Pi, 1)?,
            Rpn::Ident(n) if n == "x" => st.push(Expr::X, 1)?,
            Rpn::Ident(n) => st.push(Expr::Nom(n.clone()), 1)?,

            Rpn::Neg => {
                let (a, pa) = st.pop()?;
                st.push(Expr::Neg(Box::new(a)), pa + 1)?;
            }

            Rpn::Add | Rpn::Sub | Rpn::Mul | Rpn::Div | Rpn::Pow => {
                let (b, pb) = st.pop()?;
                let (a, pa) = st.pop()?;
                let (a, b) = (Box::new(a), Box::new(b));

                let e = match r {
                    Rpn::Add => Expr::Add(a, b),
                    Rpn::Sub => Expr::Sub(a, b),
                    Rpn::Mul => Expr::Mul(a, b),
                    Rpn::Div => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                };
                st.push(e, pa.max(pb) + 1)?;
            }

            Rpn::Appel(n) => {
                let (arg, pa) = st
                    .0
                    .pop()
                    .ok_or_else(|| Erreur::invalide(format!("{n} sans argument")))?;
                let e = match Fonction::depuis_nom(n) {
                    Some(f) => Expr::Fn(f, Box::new(arg)),
                    None if n == "x" => {
                        return Err(Erreur::invalide("x n’est pas une fonction"));
                    }
                    None => Expr::Appel(n.clone(), Box::new(arg)),
                };
                st.push(e, pa + 1)?;
            }
        }
    }

    if st.0.len() != 1 {
        return Err(manquant());
    }
    st.pop().map(|(e, _)| e)
}
