// src/noyau/expr.rs
//
// AST flottant (f64) d’une formule en x.
// - Num : littéral décimal
// - Pi  : constante π
// - X   : la variable (évaluée point par point sur l’échantillonnage)
// - Nom / Appel : identifiant hors vocabulaire, gardé tel quel jusqu’à la résolution
//
// IMPORTANT:
// - Le parse (rpn.rs) accepte Nom/Appel ; c’est la résolution (formule.rs) qui refuse.
//   Ordre voulu : erreur de structure d’abord, nom inconnu ensuite.
// - eval() ne panique jamais : domaines hors limites => NaN/inf (sémantique IEEE).

use std::f64::consts::PI;
use std::fmt;

/// Fonctions unaires du vocabulaire (noms canoniques, après normalisation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Asin,
    Sinh,
    Asinh,
    Cos,
    Acos,
    Cosh,
    Acosh,
    Tan,
    Atan,
    Tanh,
    Atanh,
    Log,
    Log10,
    Log2,
    Exp,
    Factorial,
    Sqrt,
    Sinc,
}

impl Fonction {
    pub const TOUTES: [Fonction; 19] = [
        Fonction::Sin,
        Fonction::Asin,
        Fonction::Sinh,
        Fonction::Asinh,
        Fonction::Cos,
        Fonction::Acos,
        Fonction::Cosh,
        Fonction::Acosh,
        Fonction::Tan,
        Fonction::Atan,
        Fonction::Tanh,
        Fonction::Atanh,
        Fonction::Log,
        Fonction::Log10,
        Fonction::Log2,
        Fonction::Exp,
        Fonction::Factorial,
        Fonction::Sqrt,
        Fonction::Sinc,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Asin => "asin",
            Fonction::Sinh => "sinh",
            Fonction::Asinh => "asinh",
            Fonction::Cos => "cos",
            Fonction::Acos => "acos",
            Fonction::Cosh => "cosh",
            Fonction::Acosh => "acosh",
            Fonction::Tan => "tan",
            Fonction::Atan => "atan",
            Fonction::Tanh => "tanh",
            Fonction::Atanh => "atanh",
            Fonction::Log => "log",
            Fonction::Log10 => "log10",
            Fonction::Log2 => "log2",
            Fonction::Exp => "exp",
            Fonction::Factorial => "factorial",
            Fonction::Sqrt => "sqrt",
            Fonction::Sinc => "sinc",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Fonction::TOUTES.iter().copied().find(|f| f.nom() == nom)
    }

    pub fn appliquer(self, v: f64) -> f64 {
        match self {
            Fonction::Sin => v.sin(),
            Fonction::Asin => v.asin(),
            Fonction::Sinh => v.sinh(),
            Fonction::Asinh => v.asinh(),
            Fonction::Cos => v.cos(),
            Fonction::Acos => v.acos(),
            Fonction::Cosh => v.cosh(),
            Fonction::Acosh => v.acosh(),
            Fonction::Tan => v.tan(),
            Fonction::Atan => v.atan(),
            Fonction::Tanh => v.tanh(),
            Fonction::Atanh => v.atanh(),
            Fonction::Log => v.ln(),
            Fonction::Log10 => v.log10(),
            Fonction::Log2 => v.log2(),
            Fonction::Exp => v.exp(),
            Fonction::Factorial => factorielle(v),
            Fonction::Sqrt => v.sqrt(),
            Fonction::Sinc => sinc(v),
        }
    }
}

/// n! prolongée par Γ(n+1) ; 0 pour n < 0 (NaN reste NaN).
pub fn factorielle(n: f64) -> f64 {
    if n < 0.0 {
        0.0
    } else {
        libm::tgamma(n + 1.0)
    }
}

/// sinc normalisé : sin(πx)/(πx), sinc(0) = 1.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let p = PI * x;
        p.sin() / p
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Pi,
    X,

    Nom(String),
    Appel(String, Box<Expr>),

    Neg(Box<Expr>),
    Fn(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Premier nom hors vocabulaire rencontré (parcours itératif, ordre de lecture).
    pub fn premier_nom_inconnu(&self) -> Option<&str> {
        use Expr::*;

        let mut pile: Vec<&Expr> = vec![self];

        while let Some(e) = pile.pop() {
            match e {
                Nom(n) | Appel(n, _) => return Some(n.as_str()),

                Num(_) | Pi | X => {}

                Neg(a) | Fn(_, a) => pile.push(a.as_ref()),

                Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) | Pow(a, b) => {
                    // b d’abord : a sort en premier (gauche -> droite)
                    pile.push(b.as_ref());
                    pile.push(a.as_ref());
                }
            }
        }

        None
    }

    /// Évaluation en un point. Nom/Appel (non résolus) valent NaN.
    pub fn eval(&self, x: f64) -> f64 {
        use Expr::*;

        match self {
            Num(v) => *v,
            Pi => PI,
            X => x,

            Nom(_) | Appel(_, _) => f64::NAN,

            Neg(a) => -a.eval(x),
            Fn(f, a) => f.appliquer(a.eval(x)),

            Add(a, b) => a.eval(x) + b.eval(x),
            Sub(a, b) => a.eval(x) - b.eval(x),
            Mul(a, b) => a.eval(x) * b.eval(x),
            Div(a, b) => a.eval(x) / b.eval(x),
            Pow(a, b) => a.eval(x).powf(b.eval(x)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Num(v) => write!(f, "{v}"),
            Pi => write!(f, "π"),
            X => write!(f, "x"),
            Nom(n) => write!(f, "{n}"),
            Appel(n, a) => write!(f, "{n}({a})"),
            Neg(a) => write!(f, "-({a})"),
            Fn(fun, a) => write!(f, "{}({a})", fun.nom()),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
            Pow(a, b) => write!(f, "({a} ^ {b})"),
        }
    }
}
