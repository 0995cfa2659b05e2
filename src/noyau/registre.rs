// src/noyau/registre.rs
//
// Registre des opérations : symbole -> jeton prêt à empiler.
// Construit une seule fois (OnceLock), partagé en lecture seule.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, OnceLock};

use super::jetons::Op;

#[derive(Clone, Debug, Default)]
pub struct Registre {
    ops: HashMap<&'static str, Op>,
}

static REGISTRE_STANDARD: OnceLock<Arc<Registre>> = OnceLock::new();

impl Registre {
    /// Registre vide (aucun symbole connu).
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère (ou remplace) l’opération sous son propre symbole.
    /// Un opérande ou une variable n’a pas de symbole : ignoré.
    pub fn enregistrer(&mut self, op: Op) {
        if let Some(symbole) = op.symbole() {
            self.ops.insert(symbole, op);
        }
    }

    pub fn chercher(&self, symbole: &str) -> Option<&Op> {
        self.ops.get(symbole)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Registre de la calculatrice : ×, ÷, +, −, √, cos, sin, ±, π.
    ///
    /// ÷ et − prennent le PREMIER argument (dépilé en premier) comme diviseur /
    /// terme soustrait : pousser 8, 2 puis ÷ donne 8 ÷ 2.
    pub fn standard() -> Arc<Registre> {
        REGISTRE_STANDARD
            .get_or_init(|| {
                let mut r = Registre::new();
                r.enregistrer(Op::BinaryOperation("×", |a, b| a * b));
                r.enregistrer(Op::BinaryOperation("÷", |a, b| b / a));
                r.enregistrer(Op::BinaryOperation("+", |a, b| a + b));
                r.enregistrer(Op::BinaryOperation("−", |a, b| b - a));
                r.enregistrer(Op::UnaryOperation("√", f64::sqrt));
                r.enregistrer(Op::UnaryOperation("cos", f64::cos));
                r.enregistrer(Op::UnaryOperation("sin", f64::sin));
                r.enregistrer(Op::UnaryOperation("±", |x| -x));
                r.enregistrer(Op::Constant("π", || PI));
                Arc::new(r)
            })
            .clone()
    }
}
