//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//! - pas fin seulement sur une petite plage
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Les alias de la table (arcsin, ln, fac…) et les noms canoniques (asin, log, factorial)
//!   doivent donner EXACTEMENT la même courbe : ils compilent vers le même AST.
//! - Le pas fin (0.00001) coûte 100 000 échantillons par unité : on reste sur [0, 10[.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use crate::erreur::Erreur;

use super::analyse::{maxima_locaux, minima_locaux, points_de_bascule};
use super::echantillon::{echantillonner, Plage};
use super::formule::{calculer, Formule};
use super::normalisation::REMPLACEMENTS;
use super::session::{PAS_DEFAUT, PAS_FIN_DEFAUT};

fn formule(s: &str) -> Formule {
    Formule::compiler(s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"))
}

fn xs(x_min: i32, x_max: i32) -> Vec<f64> {
    echantillonner(Plage::new(x_min, x_max).unwrap(), PAS_DEFAUT, 1_000_000).unwrap()
}

fn assert_meme_courbe(a: &str, b: &str, x_min: i32, x_max: i32) {
    let xs = xs(x_min, x_max);
    let ya = formule(a).evaluer(&xs);
    let yb = formule(b).evaluer(&xs);
    for (i, (u, v)) in ya.iter().zip(&yb).enumerate() {
        let egaux = u == v || (u.is_nan() && v.is_nan());
        assert!(egaux, "{a:?} vs {b:?} en x={}: {u} != {v}", xs[i]);
    }
}

fn assert_identite(expr: &str, attendu: impl Fn(f64) -> f64, x_min: i32, x_max: i32, tol: f64) {
    let xs = xs(x_min, x_max);
    let ys = formule(expr).evaluer(&xs);
    for (x, y) in xs.iter().zip(&ys) {
        let a = attendu(*x);
        assert!((y - a).abs() <= tol, "expr={expr:?} x={x}: {y} != {a}");
    }
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Table : alias == canon ------------------------ */

#[test]
fn sci_alias_et_noms_canoniques() {
    for (alias, canon) in REMPLACEMENTS {
        if *alias == "^" {
            assert_meme_courbe("x^2", "x**2", -5, 5);
            continue;
        }
        if *alias == "pi" || *alias == "PI" {
            assert_meme_courbe(&format!("{alias}*x"), "pi*x", -5, 5);
            continue;
        }
        // domaines variés : on compare aussi les NaN
        assert_meme_courbe(&format!("{alias}(x/7)"), &format!("{canon}(x/7)"), -10, 10);
    }
}

/* ------------------------ Identités ------------------------ */

#[test]
fn sci_identites_trig() {
    assert_identite("sin(x)^2 + cos(x)^2", |_| 1.0, -20, 20, 1e-12);
    assert_identite("tan(x) - sin(x)/cos(x)", |_| 0.0, -1, 1, 1e-12);
    assert_identite("arctan(tan(x/4))", |x| x / 4.0, -5, 5, 1e-12);
}

#[test]
fn sci_identites_exp_log() {
    assert_identite("ln(e^x)", |x| x, -20, 20, 1e-12);
    assert_identite("e^x - exp(x)", |_| 0.0, -5, 5, 0.0);
    assert_identite("log2(2^x)", |x| x, -20, 20, 1e-12);
    assert_identite("cosh(x)^2 - sinh(x)^2", |_| 1.0, -3, 3, 1e-9);
}

#[test]
fn sci_factorielle_entiere() {
    let f = formule("fac(x)");
    let ys = f.evaluer(&[0.0, 1.0, 2.0, 3.0, 10.0]);
    let attendu = [1.0, 1.0, 2.0, 6.0, 3_628_800.0];
    for (y, a) in ys.iter().zip(attendu) {
        assert!((y - a).abs() / a < 1e-12, "{y} != {a}");
    }
}

/* ------------------------ Analyse sur courbes réelles ------------------------ */

#[test]
fn sci_parabole_un_minimum() {
    let t = calculer("(x-2)^2 - 2", Plage::new(-10, 10).unwrap(), PAS_DEFAUT, 1_000_000).unwrap();
    let min = minima_locaux(&t.courbe);
    assert_eq!(min.len(), 1);
    assert!((min[0].x - 2.0).abs() < 1e-9);
    assert_eq!(min[0].etiquette, "[2.0, -2.0]");
    assert!(maxima_locaux(&t.courbe).is_empty());

    // racines 2 ± √2 (hors grille) : deux bascules
    let b = points_de_bascule(&t.courbe);
    assert_eq!(b.len(), 2);
}

#[test]
fn sci_bascules_sinus_pas_fin() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    let t = calculer("sin(x)", Plage::new(0, 10).unwrap(), PAS_FIN_DEFAUT, 2_000_000).unwrap();
    assert_eq!(t.courbe.len(), 1_000_000);
    budget(t0, max);

    // sin(0) = 0 exclu ; zéros en π, 2π, 3π
    let b = points_de_bascule(&t.courbe);
    assert_eq!(b.len(), 3);
    for (k, p) in b.iter().enumerate() {
        let attendu = (k + 1) as f64 * PI;
        assert!((p.x - attendu).abs() < 1e-4, "bascule {k}: {} vs {attendu}", p.x);
        assert!(p.y.abs() < 1e-4);
    }
    budget(t0, max);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = "x".to_string();
    for _ in 0..200 {
        expr = format!("({expr}+1)");
        budget(t0, max);
    }

    let ys = formule(&expr).evaluer(&[0.0, 1.0]);
    assert_eq!(ys, vec![200.0, 201.0]);
}

#[test]
fn sci_stress_taille_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::new();
    for k in 0..500 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5x");
        budget(t0, max);
    }

    // 500 × 0.5x = 250x
    let ys = formule(&expr).evaluer(&[2.0]);
    assert!((ys[0] - 500.0).abs() < 1e-9);
}

#[test]
fn sci_stress_imbrication_refusee_sans_crash() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // pile d’appels trop profonde pour une évaluation récursive : erreur, pas d’abandon
    let imbrique = format!("{}x{}", "sin(".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(
        Formule::compiler(&imbrique),
        Err(Erreur::FormuleInvalide(_))
    ));
    assert!(matches!(
        calculer(&imbrique, Plage::new(0, 1).unwrap(), PAS_DEFAUT, 1_000),
        Err(Erreur::FormuleInvalide(_))
    ));

    let moins = format!("{}x", "-".repeat(200_000));
    assert!(matches!(
        Formule::compiler(&moins),
        Err(Erreur::FormuleInvalide(_))
    ));
    budget(t0, max);
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_determinisme_parallele() {
    // évaluation rayon : même résultat, même ordre, à chaque appel
    let xs = xs(-500, 500);
    let f = formule("sinc(x/10) * e^(-x^2/1000) + fac(x/100)");
    let a = f.evaluer(&xs);
    let b = f.evaluer(&xs);
    let c: Vec<f64> = xs.iter().map(|&x| f.expr().eval(x)).collect();
    assert_eq!(a.len(), xs.len());
    assert_eq!(a, b);
    assert_eq!(a, c);
}
