//! Calculatrice RPN : noyau réutilisable (sans UI).
//!
//! L’application egui (src/main.rs) n’en est qu’une cliente :
//! elle empile opérandes et opérations, puis affiche résultat et description.

pub mod noyau;

pub use noyau::Moteur;
