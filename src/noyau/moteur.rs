//! Moteur RPN : pile d’opérations + table des variables + registre partagé.
//!
//! Chaque mutation réévalue toute la pile et renvoie le résultat courant
//! (`None` = indéfini). Aucune erreur : un symbole inconnu ne change rien.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::description::decrire;
use super::eval::evaluer_pile;
use super::jetons::Op;
use super::registre::Registre;

#[derive(Clone, Debug)]
pub struct Moteur {
    pile: Vec<Op>,
    registre: Arc<Registre>,
    variables: HashMap<String, f64>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new()
    }
}

impl Moteur {
    /// Moteur vide, registre standard (×, ÷, +, −, √, cos, sin, ±, π).
    pub fn new() -> Self {
        Self::avec_registre(Registre::standard())
    }

    pub fn avec_registre(registre: Arc<Registre>) -> Self {
        Self {
            pile: Vec::new(),
            registre,
            variables: HashMap::new(),
        }
    }

    /* ------------------------ Mutations de la pile ------------------------ */

    pub fn push_operand(&mut self, valeur: f64) -> Option<f64> {
        trace!(valeur, "empile opérande");
        self.pile.push(Op::Operand(valeur));
        self.evaluate()
    }

    /// Empile une référence de variable (résolue à chaque évaluation).
    pub fn push_variable(&mut self, symbole: &str) -> Option<f64> {
        trace!(symbole, "empile variable");
        self.pile.push(Op::Variable(symbole.to_string()));
        self.evaluate()
    }

    /// Symbole inconnu : pile inchangée, on renvoie l’évaluation courante.
    pub fn perform_operation(&mut self, symbole: &str) -> Option<f64> {
        match self.registre.chercher(symbole) {
            Some(op) => {
                trace!(symbole, "empile opération");
                self.pile.push(op.clone());
            }
            None => debug!(symbole, "opération inconnue ignorée"),
        }
        self.evaluate()
    }

    /// Retire le dernier jeton (s’il y en a un) puis réévalue.
    pub fn undo(&mut self) -> Option<f64> {
        if let Some(op) = self.pile.pop() {
            trace!(%op, "annule");
        }
        self.evaluate()
    }

    /// Vide la pile. La table des variables n’est PAS touchée.
    pub fn clear(&mut self) {
        debug!(jetons = self.pile.len(), "pile effacée");
        self.pile.clear();
    }

    /* ------------------------ Lectures ------------------------ */

    pub fn evaluate(&self) -> Option<f64> {
        let resultat = evaluer_pile(&self.pile, &self.variables);
        trace!(?resultat, jetons = self.pile.len(), "évaluation");
        resultat
    }

    /// Trace infixe ; expressions indépendantes séparées par ", ", plus ancienne d’abord.
    pub fn description(&self) -> String {
        decrire(&self.pile)
    }

    pub fn pile(&self) -> &[Op] {
        &self.pile
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn registre(&self) -> &Registre {
        &self.registre
    }

    /* ------------------------ Variables ------------------------ */

    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    /// Accès direct à la table (mémoire M, etc.).
    pub fn variables_mut(&mut self) -> &mut HashMap<String, f64> {
        &mut self.variables
    }

    pub fn set_variable(&mut self, symbole: impl Into<String>, valeur: f64) {
        let symbole = symbole.into();
        debug!(%symbole, valeur, "variable fixée");
        self.variables.insert(symbole, valeur);
    }

    pub fn remove_variable(&mut self, symbole: &str) -> Option<f64> {
        debug!(symbole, "variable retirée");
        self.variables.remove(symbole)
    }
}

impl fmt::Display for Moteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
