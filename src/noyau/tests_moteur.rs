//! Tests de scénario du moteur : ce que la calculatrice doit garantir.
//!
//! - ordre B/A des opérations non commutatives (÷, −)
//! - undo / clear sans panique
//! - symbole inconnu = aucun effet
//! - variables résolues à chaque évaluation
//! - description lisible (plus ancienne expression d’abord)

use pretty_assertions::assert_eq;

use super::jetons::Op;
use super::Moteur;

fn moteur_avec(nombres: &[f64]) -> Moteur {
    let mut m = Moteur::new();
    for &v in nombres {
        m.push_operand(v);
    }
    m
}

/* ------------------------ Ordre des opérandes ------------------------ */

#[test]
fn huit_deux_divise_donne_quatre() {
    let mut m = moteur_avec(&[8.0, 2.0]);
    assert_eq!(m.perform_operation("÷"), Some(4.0));
}

#[test]
fn cinq_trois_moins_donne_deux() {
    let mut m = moteur_avec(&[5.0, 3.0]);
    assert_eq!(m.perform_operation("−"), Some(2.0));
}

#[test]
fn division_par_zero_suit_les_flottants() {
    let mut m = moteur_avec(&[1.0, 0.0]);
    assert_eq!(m.perform_operation("÷"), Some(f64::INFINITY));
}

/* ------------------------ undo / clear ------------------------ */

#[test]
fn undo_sur_pile_vide() {
    let mut m = Moteur::new();
    assert_eq!(m.undo(), None);
    assert_eq!(m.undo(), None);
    assert!(m.is_empty());
}

#[test]
fn clear_puis_evaluate() {
    let mut m = moteur_avec(&[1.0, 2.0]);
    m.perform_operation("+");
    m.clear();
    assert_eq!(m.evaluate(), None);
    assert_eq!(m.description(), "");
}

#[test]
fn undo_retire_une_operation() {
    let mut m = moteur_avec(&[5.0, 3.0]);
    m.perform_operation("×");
    assert_eq!(m.undo(), Some(3.0));
    assert_eq!(m.description(), "5.0, 3.0");
}

/* ------------------------ Symboles ------------------------ */

#[test]
fn symbole_inconnu_sans_effet() {
    let mut m = moteur_avec(&[5.0, 3.0]);
    let avant = m.evaluate();
    let description = m.description();

    assert_eq!(m.perform_operation("?"), avant);
    assert_eq!(m.len(), 2);
    assert_eq!(m.description(), description);
}

#[test]
fn unaire_sur_pile_vide() {
    let mut m = Moteur::new();
    assert_eq!(m.perform_operation("√"), None);
    assert_eq!(m.len(), 1);
    assert!(matches!(m.pile()[0], Op::UnaryOperation("√", _)));
    assert_eq!(m.evaluate(), None);
    assert_eq!(m.description(), "√(?)");
}

#[test]
fn constante_pi() {
    let mut m = Moteur::new();
    assert_eq!(m.perform_operation("π"), Some(std::f64::consts::PI));
    assert_eq!(m.perform_operation("sin").map(|v| v.abs() < 1e-12), Some(true));
    assert_eq!(m.description(), "sin(π)");
}

#[test]
fn changement_de_signe() {
    let mut m = moteur_avec(&[4.0]);
    assert_eq!(m.perform_operation("±"), Some(-4.0));
    assert_eq!(m.perform_operation("±"), Some(4.0));
}

/* ------------------------ Description ------------------------ */

#[test]
fn description_addition() {
    let mut m = moteur_avec(&[3.0, 4.0]);
    m.perform_operation("+");
    assert_eq!(m.description(), "(3.0+4.0)");
    assert_eq!(m.to_string(), "(3.0+4.0)");
}

#[test]
fn description_deux_expressions_independantes() {
    let m = moteur_avec(&[3.0, 4.0]);
    assert_eq!(m.description(), "3.0, 4.0");
}

#[test]
fn description_mixte() {
    let mut m = moteur_avec(&[3.0, 5.0]);
    m.perform_operation("+");
    m.push_operand(2.0);
    m.perform_operation("√");
    m.push_operand(7.0);
    assert_eq!(m.description(), "(3.0+5.0), √(2.0), 7.0");
    m.perform_operation("×");
    m.perform_operation("−");
    assert_eq!(m.description(), "((3.0+5.0)−(√(2.0)×7.0))");
}

/* ------------------------ Variables ------------------------ */

#[test]
fn variable_m() {
    let mut m = Moteur::new();
    m.variables_mut().insert("M".to_string(), 10.0);
    assert_eq!(m.push_variable("M"), Some(10.0));

    m.variables_mut().remove("M");
    assert_eq!(m.evaluate(), None);
    assert_eq!(m.description(), "M");
}

#[test]
fn variable_dans_une_expression() {
    let mut m = moteur_avec(&[7.0]);
    m.push_variable("M");
    assert_eq!(m.perform_operation("+"), None);

    m.set_variable("M", 3.0);
    assert_eq!(m.evaluate(), Some(10.0));
    assert_eq!(m.description(), "(7.0+M)");
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn evaluate_repete_meme_resultat() {
    let mut m = moteur_avec(&[2.0, 9.0]);
    m.perform_operation("÷");
    let premier = m.evaluate();
    for _ in 0..10 {
        assert_eq!(m.evaluate(), premier);
    }
    assert_eq!(m.len(), 3);
}
