// src/noyau/jetons.rs
//
// Jetons de la pile RPN (postfix).
// Un jeton = opérande, variable, constante ou opération (unaire/binaire).
// Les corps d’opérations sont des pointeurs de fonction : Copy, comparables
// au symbole près, aucune allocation.

use std::fmt;

#[derive(Clone, Debug)]
pub enum Op {
    /// Nombre littéral.
    Operand(f64),

    /// Référence nommée, résolue à l’évaluation (table des variables).
    Variable(String),

    // Constante : symbole affiché + producteur (ex: π)
    Constant(&'static str, fn() -> f64),

    UnaryOperation(&'static str, fn(f64) -> f64),

    /// Le premier argument est l’opérande dépilé en premier (le plus récent),
    /// le second celui poussé avant lui.
    BinaryOperation(&'static str, fn(f64, f64) -> f64),
}

impl Op {
    /// Arité : 0 (feuille), 1 (unaire), 2 (binaire).
    pub fn arite(&self) -> usize {
        match self {
            Op::Operand(_) | Op::Variable(_) | Op::Constant(..) => 0,
            Op::UnaryOperation(..) => 1,
            Op::BinaryOperation(..) => 2,
        }
    }

    /// Symbole de l’opération, `None` pour un opérande ou une variable.
    pub fn symbole(&self) -> Option<&'static str> {
        match self {
            Op::Constant(s, _) | Op::UnaryOperation(s, _) | Op::BinaryOperation(s, _) => Some(*s),
            Op::Operand(_) | Op::Variable(_) => None,
        }
    }
}

/// Texte d’un nombre : toujours avec sa partie décimale ("3.0", "0.5", "1e16").
/// Le format Debug de f64 est stable et se relit avec `str::parse::<f64>`.
pub fn format_nombre(v: f64) -> String {
    format!("{v:?}")
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operand(v) => f.write_str(&format_nombre(*v)),
            Op::Variable(nom) => f.write_str(nom),
            Op::Constant(s, _) | Op::UnaryOperation(s, _) | Op::BinaryOperation(s, _) => {
                f.write_str(s)
            }
        }
    }
}

/// Format utilitaire (trace) : la pile brute en texte, ordre d’entrée.
pub fn format_pile(ops: &[Op]) -> String {
    ops.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
