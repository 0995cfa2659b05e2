//! Noyau : évaluation de la pile RPN
//!
//! Lecture par la FIN (dernier jeton = sommet) :
//! - feuille (opérande / variable / constante) -> valeur
//! - unaire  -> évalue le reste, applique f
//! - binaire -> évalue A (le plus récent) puis B (le précédent), f(A, B)
//!
//! Le reste non consommé est une tranche-préfixe de l’entrée : aucune copie.
//! Échec (pile vide, variable inconnue, opérande manquant) => `None`, sans signal spécial.

use std::collections::HashMap;

use super::jetons::Op;

/// Résultat partiel : valeur (ou indéfini) + reste non consommé.
pub type Reduction<'a> = (Option<f64>, &'a [Op]);

/// Réduit UNE expression depuis la fin de `ops`.
pub fn evaluer<'a>(ops: &'a [Op], variables: &HashMap<String, f64>) -> Reduction<'a> {
    let Some((op, reste)) = ops.split_last() else {
        return (None, ops);
    };

    match op {
        Op::Operand(v) => (Some(*v), reste),
        Op::Variable(nom) => (variables.get(nom).copied(), reste),
        Op::Constant(_, producteur) => (Some(producteur()), reste),

        Op::UnaryOperation(_, f) => {
            let (x, reste) = evaluer(reste, variables);
            (x.map(f), reste)
        }

        Op::BinaryOperation(_, f) => {
            let (a, reste) = evaluer(reste, variables);
            let Some(a) = a else {
                return (None, reste);
            };
            let (b, reste) = evaluer(reste, variables);
            (b.map(|b| f(a, b)), reste)
        }
    }
}

/// Évalue toute la pile une fois depuis sa fin ; le reste est ignoré.
pub fn evaluer_pile(ops: &[Op], variables: &HashMap<String, f64>) -> Option<f64> {
    evaluer(ops, variables).0
}
