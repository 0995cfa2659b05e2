//! Tests de propriétés (proptest) : suites de touches aléatoires.
//!
//! Invariants :
//! - evaluate() est pur (même résultat, pile intacte)
//! - undo() après un empilement revient au résultat précédent
//! - la description ne panique jamais et n’est vide que pour une pile vide
//! - un symbole inconnu ne change ni la pile ni le résultat
//! - profondeur bornée (pas de débordement de pile)

use proptest::prelude::*;

use super::description::{decrire, exprimer};
use super::jetons::Op;
use super::Moteur;

#[derive(Clone, Debug)]
enum Touche {
    Nombre(f64),
    Variable(&'static str),
    Operation(&'static str),
}

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        3 => (-1000.0f64..1000.0).prop_map(Touche::Nombre),
        1 => prop_oneof![Just("M"), Just("x")].prop_map(Touche::Variable),
        4 => prop_oneof![
            Just("×"),
            Just("÷"),
            Just("+"),
            Just("−"),
            Just("√"),
            Just("cos"),
            Just("sin"),
            Just("±"),
            Just("π"),
            Just("?"),
        ]
        .prop_map(Touche::Operation),
    ]
}

fn appuyer(m: &mut Moteur, t: &Touche) -> Option<f64> {
    match t {
        Touche::Nombre(v) => m.push_operand(*v),
        Touche::Variable(s) => m.push_variable(s),
        Touche::Operation(s) => m.perform_operation(s),
    }
}

/// Égalité qui traite NaN == NaN (√ d’un négatif).
fn meme(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        (None, None) => true,
        _ => false,
    }
}

/// Lecture par la fin, récursive : une sous-expression + le reste.
fn exprimer_par_la_fin(ops: &[Op]) -> (Option<String>, &[Op]) {
    let Some((op, reste)) = ops.split_last() else {
        return (None, ops);
    };
    match op {
        Op::UnaryOperation(s, _) => {
            let (x, reste) = exprimer_par_la_fin(reste);
            (Some(format!("{s}({})", x.as_deref().unwrap_or("?"))), reste)
        }
        Op::BinaryOperation(s, _) => {
            let (a, reste) = exprimer_par_la_fin(reste);
            let (b, reste) = exprimer_par_la_fin(reste);
            let a = a.as_deref().unwrap_or("?").to_string();
            let b = b.as_deref().unwrap_or("?").to_string();
            (Some(format!("({b}{s}{a})")), reste)
        }
        feuille => (Some(feuille.to_string()), reste),
    }
}

fn decrire_par_la_fin(ops: &[Op]) -> String {
    let mut extraites = Vec::new();
    let mut reste = ops;
    while let (Some(texte), suite) = exprimer_par_la_fin(reste) {
        extraites.push(texte);
        reste = suite;
    }
    extraites.reverse();
    extraites.join(", ")
}

proptest! {
    #[test]
    fn evaluate_est_pur(touches in proptest::collection::vec(touche(), 0..64)) {
        let mut m = Moteur::new();
        m.set_variable("M", 2.0);
        for t in &touches {
            appuyer(&mut m, t);
        }
        let n = m.len();
        let r = m.evaluate();
        prop_assert!(meme(m.evaluate(), r));
        prop_assert_eq!(m.len(), n);
    }

    #[test]
    fn undo_annule_le_dernier_empilement(
        touches in proptest::collection::vec(touche(), 0..64),
        derniere in touche(),
    ) {
        let mut m = Moteur::new();
        for t in &touches {
            appuyer(&mut m, t);
        }
        let avant = m.evaluate();
        let description = m.description();
        let n = m.len();

        appuyer(&mut m, &derniere);
        if m.len() > n {
            prop_assert!(meme(m.undo(), avant));
        }
        prop_assert_eq!(m.len(), n);
        prop_assert_eq!(m.description(), description);
    }

    #[test]
    fn description_jamais_vide_si_pile_non_vide(
        touches in proptest::collection::vec(touche(), 1..64),
    ) {
        let mut m = Moteur::new();
        for t in &touches {
            appuyer(&mut m, t);
        }
        prop_assert_eq!(m.description().is_empty(), m.is_empty());
    }

    #[test]
    fn description_identique_a_la_lecture_par_la_fin(
        touches in proptest::collection::vec(touche(), 0..48),
    ) {
        let mut m = Moteur::new();
        for t in &touches {
            appuyer(&mut m, t);
        }
        let ops = m.pile();
        prop_assert_eq!(decrire(ops), decrire_par_la_fin(ops));

        let (texte, reste) = exprimer(ops);
        let (attendu, reste_attendu) = exprimer_par_la_fin(ops);
        prop_assert_eq!(texte, attendu);
        prop_assert_eq!(reste.len(), reste_attendu.len());
    }

    #[test]
    fn symbole_inconnu_neutre(touches in proptest::collection::vec(touche(), 0..32)) {
        let mut m = Moteur::new();
        for t in &touches {
            appuyer(&mut m, t);
        }
        let avant = m.evaluate();
        let n = m.len();
        prop_assert!(meme(m.perform_operation("inconnu"), avant));
        prop_assert_eq!(m.len(), n);
    }
}

#[test]
fn pile_profonde_sans_debordement() {
    // 1 1 + 1 + 1 + ... : profondeur de récursion = longueur de la pile
    let mut m = Moteur::new();
    m.push_operand(1.0);
    for _ in 0..2000 {
        m.push_operand(1.0);
        m.perform_operation("+");
    }
    assert_eq!(m.evaluate(), Some(2001.0));
    assert!(m.description().starts_with("((((("));
}
