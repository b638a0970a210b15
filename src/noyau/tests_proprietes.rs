//! Tests de propriétés (proptest) : robustesse + invariants de l’analyse.
//!
//! - jamais de panique, quelle que soit la saisie
//! - polynômes en notation humaine (2x^2 - 3x + 1) == forme fermée
//! - un minimum est ≤ ses voisins, un maximum ≥ ses voisins (plateaux compris)
//! - bascules : milieux strictement entre deux abscisses consécutives

use proptest::prelude::*;

use super::analyse::{maxima_locaux, minima_locaux, points_de_bascule};
use super::echantillon::{echantillonner, Courbe, Plage};
use super::formule::Formule;

fn courbe_indexee(ys: Vec<f64>) -> Courbe {
    let xs = (0..ys.len()).map(|i| i as f64).collect();
    Courbe::new(xs, ys).unwrap()
}

proptest! {
    #[test]
    fn prop_compiler_ne_panique_jamais(s in "[-+*/^()x0-9. a-zA-Z_]{0,24}") {
        if let Ok(f) = Formule::compiler(&s) {
            let ys = f.evaluer(&[-1.0, 0.0, 0.5, 2.0]);
            prop_assert_eq!(ys.len(), 4);
        }
    }

    #[test]
    fn prop_unicode_ne_panique_jamais(s in "\\PC{0,30}") {
        let _ = Formule::compiler(&s);
    }

    #[test]
    fn prop_polynome_notation_humaine(
        a in -9i32..=9,
        b in -9i32..=9,
        c in -9i32..=9,
        x in -10.0f64..10.0,
    ) {
        let texte = format!("{a}x^2 + {b}x + {c}");
        let f = Formule::compiler(&texte).unwrap();
        let y = f.evaluer(&[x])[0];
        let attendu = f64::from(a) * x * x + f64::from(b) * x + f64::from(c);
        prop_assert!((y - attendu).abs() <= 1e-9 * (1.0 + attendu.abs()), "{texte} en {x}: {y} != {attendu}");
    }

    #[test]
    fn prop_echantillonnage(x_min in -500i32..0, x_max in 1i32..=500, pas in 0.05f64..5.0) {
        let plage = Plage::new(x_min, x_max).unwrap();
        let xs = echantillonner(plage, pas, 1_000_000).unwrap();

        let attendu = (f64::from(x_max - x_min) / pas).ceil() as usize;
        prop_assert_eq!(xs.len(), attendu);
        prop_assert_eq!(xs[0], f64::from(x_min));
        prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(xs.iter().all(|&x| x < f64::from(x_max) + 1e-9));
    }

    #[test]
    fn prop_extrema_et_voisins(ys in prop::collection::vec(-1000.0f64..1000.0, 0..60)) {
        let c = courbe_indexee(ys.clone());
        let min = minima_locaux(&c);
        let max = maxima_locaux(&c);

        for p in &min {
            let i = p.x as usize;
            prop_assert!(i > 0 && i + 1 < ys.len());
            prop_assert!(ys[i] <= ys[i - 1] && ys[i] <= ys[i + 1]);
        }
        for p in &max {
            let i = p.x as usize;
            prop_assert!(i > 0 && i + 1 < ys.len());
            prop_assert!(ys[i] >= ys[i - 1] && ys[i] >= ys[i + 1]);
        }

        // un même indice ne peut pas être à la fois minimum et maximum
        prop_assert!(min.iter().all(|p| max.iter().all(|q| p.x != q.x)));
    }

    #[test]
    fn prop_bascules_entre_echantillons(ys in prop::collection::vec(-10.0f64..10.0, 0..60)) {
        let c = courbe_indexee(ys.clone());
        let b = points_de_bascule(&c);

        prop_assert!(b.len() <= ys.len().saturating_sub(1));
        for p in &b {
            // milieu d’un segment [i-1, i] => partie fractionnaire 1/2
            prop_assert_eq!(p.x.fract(), 0.5);
            let i = p.x.ceil() as usize;
            prop_assert!(ys[i] * ys[i - 1] < 0.0);
        }
    }
}
