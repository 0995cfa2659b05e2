//! Noyau RPN (sans UI)
//!
//! Organisation interne :
//! - jetons.rs      : jeton de pile (opérande / variable / constante / opération)
//! - registre.rs    : symbole -> opération (construit une fois, partagé)
//! - eval.rs        : réduction récursive par la fin -> f64 ou indéfini
//! - description.rs : même parcours -> texte infixe, "?" si opérande manquant
//! - moteur.rs      : pile + variables + API utilisée par l’UI

pub mod description;
pub mod eval;
pub mod jetons;
pub mod moteur;
pub mod registre;

#[cfg(test)]
mod tests_moteur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use moteur::Moteur;
