// src/noyau/normalisation.rs
//
// Normalisation : notation “humaine” -> expression évaluable
// ---------------------------------------------------------
// Ordre des étapes (visible pour l’utilisateur, ne pas permuter) :
//   1) e^x -> exp(x), e^<nombre> -> exp(<nombre>), puis e^ -> exp
//      (e^<nombre><mot> devient un seul identifiant inconnu : e^2.5x -> exp2_5x)
//   2) découpage sur les caractères non-mot (séparateurs conservés)
//   3) table de remplacement jeton par jeton (arcsin -> asin, ^ -> **, ...)
//   4) recollage
//   5) multiplication implicite : <nombre>x -> <nombre>*x
//
// La sortie n’utilise que les noms canoniques reconnus par rpn.rs.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Table jeton -> nom canonique. Un jeton absent passe inchangé (x, chiffres, opérateurs).
pub const REMPLACEMENTS: &[(&str, &str)] = &[
    ("sin", "sin"),
    ("arcsin", "asin"),
    ("sinh", "sinh"),
    ("arcsinh", "asinh"),
    ("cos", "cos"),
    ("arccos", "acos"),
    ("cosh", "cosh"),
    ("arccosh", "acosh"),
    ("tan", "tan"),
    ("arctan", "atan"),
    ("tanh", "tanh"),
    ("arctanh", "atanh"),
    ("ln", "log"),
    ("log", "log"),
    ("log10", "log10"),
    ("log2", "log2"),
    ("exp", "exp"),
    ("^", "**"),
    ("fac", "factorial"),
    ("sqrt", "sqrt"),
    ("pi", "pi"),
    ("PI", "pi"),
    ("sinc", "sinc"),
];

fn re_exp_nombre() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // groupe 2 : lettres collées au nombre ("e^2x", "e^2.5x")
    RE.get_or_init(|| Regex::new(r"e\^(\d+(?:\.\d*)?|\.\d+)(\w*)").expect("regex e^nombre"))
}

fn re_separateur() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W").expect("regex séparateur"))
}

fn re_nombre_x() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Le littéral ne doit pas prolonger un identifiant (log10x) ni un autre nombre.
    RE.get_or_init(|| {
        Regex::new(r"(^|[^\w.])(\d+(?:\.\d*)?|\.\d+)x\b").expect("regex nombre-x")
    })
}

/// Remplace un jeton via la table (ou le rend tel quel).
pub fn remplacer_jeton(jeton: &str) -> &str {
    REMPLACEMENTS
        .iter()
        .find(|(brut, _)| *brut == jeton)
        .map(|(_, canon)| *canon)
        .unwrap_or(jeton)
}

/// Découpe sur `\W` en gardant les séparateurs comme jetons.
///
/// Exemple: "sin(x)^2" -> ["sin", "(", "x", ")", "^", "2"]
pub fn decouper(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut debut = 0;

    for m in re_separateur().find_iter(s) {
        if m.start() > debut {
            out.push(&s[debut..m.start()]);
        }
        out.push(m.as_str());
        debut = m.end();
    }
    if debut < s.len() {
        out.push(&s[debut..]);
    }

    out
}

/// Pipeline complet de normalisation (étapes 1 à 5).
pub fn normaliser(brut: &str) -> String {
    // 1) exponentielle abrégée (avant le ^ générique)
    let s = brut.replace("e^x", "exp(x)");
    let s = re_exp_nombre().replace_all(&s, |c: &Captures<'_>| {
        if c[2].is_empty() {
            format!("exp({})", &c[1])
        } else {
            // pas un nombre seul : un identifiant entier, résolu (et refusé) plus tard
            format!("exp{}{}", c[1].replace('.', "_"), &c[2])
        }
    });
    let s = s.replace("e^", "exp");

    // 2) + 3) + 4)
    let joint: String = decouper(&s).into_iter().map(remplacer_jeton).collect();

    // 5) 2x -> 2*x
    let fini = re_nombre_x()
        .replace_all(&joint, "${1}${2}*x")
        .into_owned();

    tracing::debug!(brut, normalise = %fini, "formule normalisée");
    fini
}
