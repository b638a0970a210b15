// src/noyau/jetons.rs

use std::fmt;

use crate::erreur::{Erreur, Resultat};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,

    // Fonctions + variable (tout ce qui n’est pas pi / opérateur / nombre)
    // NOTE: rpn.rs décidera si c’est un appel (suivi de '(') ou un atome.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Pow, // ** ou ^

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Pi => f.write_str("π"),
            Tok::Ident(nom) => f.write_str(nom),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::Pow => f.write_str("^"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Opérateurs et parenthèses d’un seul caractère ('*' est traité à part : "**").
fn symbole(c: char) -> Option<Tok> {
    Some(match c {
        '(' => Tok::LPar,
        ')' => Tok::RPar,
        '+' => Tok::Plus,
        '-' => Tok::Minus,
        '/' => Tok::Slash,
        '^' => Tok::Pow,
        _ => return None,
    })
}

/// Avance tant que `garde` accepte le caractère courant.
fn avancer(chars: &[char], mut i: usize, garde: impl Fn(char) -> bool) -> usize {
    while chars.get(i).is_some_and(|&c| garde(c)) {
        i += 1;
    }
    i
}

/// Fin d’un littéral décimal commençant en `debut` : 12, 1.5, .5, 2., 1e3, 2.5E-2.
/// L’exposant n’est pris que si des chiffres suivent (sinon "2e" = nombre + ident).
fn fin_nombre(chars: &[char], debut: usize) -> usize {
    let mut i = avancer(chars, debut, |c| c.is_ascii_digit());
    if chars.get(i) == Some(&'.') {
        i = avancer(chars, i + 1, |c| c.is_ascii_digit());
    }

    if matches!(chars.get(i), Some('e' | 'E')) {
        let mut j = i + 1;
        if matches!(chars.get(j), Some('+' | '-')) {
            j += 1;
        }
        if chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
            i = avancer(chars, j, |c| c.is_ascii_digit());
        }
    }
    i
}

/// Tokenize une expression normalisée en jetons.
/// Supporte:
/// - décimaux (voir `fin_nombre`)
/// - opérateurs + - * / et puissance ** (ou ^)
/// - parenthèses ( )
/// - pi (déjà normalisé, sensible à la casse)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]*
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let chars: Vec<char> = s.chars().collect();
    let mut jetons = Vec::new();
    let mut i = 0;

    while let Some(&c) = chars.get(i) {
        let point_puis_chiffre = c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit());

        if c.is_whitespace() {
            i += 1;
        } else if let Some(tok) = symbole(c) {
            jetons.push(tok);
            i += 1;
        } else if c == '*' {
            // "**" = puissance (sortie de la normalisation)
            if chars.get(i + 1) == Some(&'*') {
                jetons.push(Tok::Pow);
                i += 2;
            } else {
                jetons.push(Tok::Star);
                i += 1;
            }
        } else if c.is_ascii_alphabetic() || c == '_' {
            let fin = avancer(&chars, i + 1, |c| c.is_ascii_alphanumeric() || c == '_');
            let mot: String = chars[i..fin].iter().collect();
            jetons.push(if mot == "pi" { Tok::Pi } else { Tok::Ident(mot) });
            i = fin;
        } else if c.is_ascii_digit() || point_puis_chiffre {
            let fin = fin_nombre(&chars, i);
            let txt: String = chars[i..fin].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| Erreur::NombreInvalide(txt.clone()))?;
            jetons.push(Tok::Num(v));
            i = fin;
        } else {
            return Err(Erreur::CaractereInattendu(c));
        }
    }

    Ok(jetons)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
