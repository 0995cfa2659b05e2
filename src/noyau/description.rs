// src/noyau/description.rs
//
// Description (trace infixe) de la pile RPN.
// Ne rate jamais : un opérande manquant devient "?".
//
// Exemples:
//   3 4 +        -> "(3.0+4.0)"
//   3 4          -> "3.0, 4.0"
//   √            -> "√(?)"
//   4 ×          -> "(?×4.0)"
//
// Parcours sans récursion (profondeur = longueur de la pile) :
// 1) analyse en avant : chaque jeton devient un noeud, ses opérandes sont les
//    racines précédentes ; une racine absente est un "?" (seulement au début de pile)
// 2) écriture dans UN tampon, pile de tâches explicite.
// Le découpage obtenu est celui de la lecture par la fin : la dernière racine
// est la dernière sous-expression, son début borne le reste.

use std::fmt::Write as _;

use super::jetons::Op;

const MANQUANT: &str = "?";

#[derive(Clone, Copy, Debug)]
struct Noeud {
    /// [A, B] : A = opérande le plus récent (à droite), B = le précédent (à gauche).
    operandes: [Option<usize>; 2],
    /// Indice du premier jeton de la sous-expression.
    debut: usize,
}

/// Noeuds (un par jeton) + racines restantes, de la plus ancienne à la plus récente.
fn analyser(ops: &[Op]) -> (Vec<Noeud>, Vec<usize>) {
    let mut noeuds: Vec<Noeud> = Vec::with_capacity(ops.len());
    let mut racines: Vec<usize> = Vec::new();

    for (i, op) in ops.iter().enumerate() {
        let a = if op.arite() >= 1 { racines.pop() } else { None };
        let b = if op.arite() >= 2 { racines.pop() } else { None };

        let debut = b.or(a).map_or(i, |j| noeuds[j].debut);
        noeuds.push(Noeud {
            operandes: [a, b],
            debut,
        });
        racines.push(i);
    }

    (noeuds, racines)
}

enum Tache {
    Noeud(usize),
    Texte(&'static str),
}

fn operande(x: Option<usize>) -> Tache {
    x.map_or(Tache::Texte(MANQUANT), Tache::Noeud)
}

/// Écrit la sous-expression de racine `racine` à la fin de `sortie`.
fn ecrire(ops: &[Op], noeuds: &[Noeud], racine: usize, sortie: &mut String) {
    let mut taches = vec![Tache::Noeud(racine)];

    while let Some(tache) = taches.pop() {
        let i = match tache {
            Tache::Texte(s) => {
                sortie.push_str(s);
                continue;
            }
            Tache::Noeud(i) => i,
        };

        let [a, b] = noeuds[i].operandes;
        // empilées à l’envers : la dernière poussée s’écrit la première
        match &ops[i] {
            Op::UnaryOperation(symbole, _) => {
                taches.push(Tache::Texte(")"));
                taches.push(operande(a));
                taches.push(Tache::Texte("("));
                taches.push(Tache::Texte(*symbole));
            }
            Op::BinaryOperation(symbole, _) => {
                taches.push(Tache::Texte(")"));
                taches.push(operande(a));
                taches.push(Tache::Texte(*symbole));
                taches.push(operande(b));
                taches.push(Tache::Texte("("));
            }
            feuille => {
                // écrire dans une String ne peut pas échouer
                let _ = write!(sortie, "{feuille}");
            }
        }
    }
}

/// Rend UNE sous-expression depuis la fin de `ops` + le reste non consommé.
/// `None` seulement si `ops` est vide.
pub fn exprimer(ops: &[Op]) -> (Option<String>, &[Op]) {
    let (noeuds, racines) = analyser(ops);
    let Some(&racine) = racines.last() else {
        return (None, ops);
    };

    let mut texte = String::new();
    ecrire(ops, &noeuds, racine, &mut texte);
    (Some(texte), &ops[..noeuds[racine].debut])
}

/// Description complète : sous-expressions indépendantes, de la plus ancienne
/// à la plus récente, séparées par ", ". Pile vide => "".
pub fn decrire(ops: &[Op]) -> String {
    let (noeuds, racines) = analyser(ops);

    let mut texte = String::new();
    for (k, &racine) in racines.iter().enumerate() {
        if k > 0 {
            texte.push_str(", ");
        }
        ecrire(ops, &noeuds, racine, &mut texte);
    }
    texte
}
