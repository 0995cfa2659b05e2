//! src/app/etat.rs
//!
//! État UI (sans vue) : affichage, historique, saisie en cours.
//!
//! Rôle : traduire les touches (chiffres, enter, opérations, ←, C, mémoire)
//! en appels au moteur RPN, et déposer le résultat dans l’affichage.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Moteur`.
//! - Résultat indéfini => affichage "0" (pas de message d’erreur).
//! - Seule erreur possible : un affichage qui ne se relit pas en nombre.

use thiserror::Error;
use tracing::debug;

use calculatrice_rpn::noyau::jetons::format_nombre;
use calculatrice_rpn::noyau::Moteur;

/// Nom de la variable mémoire (touches →M / M).
pub const MEMOIRE: &str = "M";

/// Affichage par défaut (résultat indéfini, après C).
const AFFICHAGE_DEFAUT: &str = "0";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurSaisie {
    #[error("affichage non numérique: {0:?}")]
    NombreInvalide(String),
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,

    // --- sorties ---
    pub affichage: String,  // nombre en cours de saisie ou dernier résultat
    pub historique: String, // description de la pile suivie de " ="
    pub erreur: String,

    // --- saisie ---
    pub saisie_en_cours: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            affichage: AFFICHAGE_DEFAUT.to_string(),
            historique: String::new(),
            erreur: String::new(),
            saisie_en_cours: false,
        }
    }
}

impl AppCalc {
    pub fn moteur(&self) -> &Moteur {
        &self.moteur
    }

    /* ------------------------ Affichage ------------------------ */

    /// Relit l’affichage en nombre.
    pub fn valeur_affichee(&self) -> Result<f64, ErreurSaisie> {
        self.affichage
            .trim()
            .parse::<f64>()
            .map_err(|_| ErreurSaisie::NombreInvalide(self.affichage.clone()))
    }

    /// Dépose un résultat : `None` (indéfini) s’affiche "0". Termine la saisie.
    fn afficher(&mut self, valeur: Option<f64>) {
        self.affichage = match valeur {
            Some(v) => format_nombre(v),
            None => AFFICHAGE_DEFAUT.to_string(),
        };
        self.saisie_en_cours = false;
    }

    fn maj_historique(&mut self) {
        self.historique = if self.moteur.is_empty() {
            String::new()
        } else {
            format!("{} =", self.moteur.description())
        };
    }

    fn set_erreur(&mut self, e: ErreurSaisie) {
        debug!(%e, "saisie refusée");
        self.erreur = e.to_string();
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou point décimal. Un second "." dans la même saisie est ignoré.
    pub fn append_chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        self.erreur.clear();

        if self.saisie_en_cours {
            if c == '.' && self.affichage.contains('.') {
                return;
            }
            self.affichage.push(c);
        } else {
            self.affichage = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.saisie_en_cours = true;
        }
    }

    /// Empile la valeur affichée.
    pub fn enter(&mut self) {
        self.saisie_en_cours = false;
        match self.valeur_affichee() {
            Ok(v) => {
                self.erreur.clear();
                let r = self.moteur.push_operand(v);
                self.afficher(r);
                self.maj_historique();
            }
            Err(e) => self.set_erreur(e),
        }
    }

    /// Opération du registre. Pendant la saisie, "±" change le signe sur place ;
    /// toute autre opération valide d’abord la saisie (enter implicite).
    pub fn operer(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            if symbole == "±" {
                self.inverser_signe_saisie();
                return;
            }
            self.enter();
            if !self.erreur.is_empty() {
                return;
            }
        }

        let r = self.moteur.perform_operation(symbole);
        self.afficher(r);
        self.maj_historique();
    }

    fn inverser_signe_saisie(&mut self) {
        match self.affichage.strip_prefix('-') {
            Some(reste) => self.affichage = reste.to_string(),
            None => self.affichage.insert(0, '-'),
        }
    }

    /// ← : efface un caractère pendant la saisie, sinon annule le dernier jeton.
    pub fn backspace(&mut self) {
        if self.saisie_en_cours {
            self.affichage.pop();
            if self.affichage.is_empty() || self.affichage == "-" {
                self.affichage = AFFICHAGE_DEFAUT.to_string();
                self.saisie_en_cours = false;
            }
            return;
        }

        let r = self.moteur.undo();
        self.afficher(r);
        self.maj_historique();
    }

    /// C : pile vidée + mémoire M effacée + affichage remis à zéro.
    pub fn clear(&mut self) {
        self.moteur.clear();
        self.moteur.remove_variable(MEMOIRE);
        self.afficher(None);
        self.historique.clear();
        self.erreur.clear();
    }

    /// M : empile la variable mémoire (valide d’abord une saisie en cours).
    pub fn rappel_memoire(&mut self) {
        if self.saisie_en_cours {
            self.enter();
            if !self.erreur.is_empty() {
                return;
            }
        }
        let r = self.moteur.push_variable(MEMOIRE);
        self.afficher(r);
        self.maj_historique();
    }

    /// →M : fixe M à la valeur affichée puis réévalue la pile.
    pub fn stocker_memoire(&mut self) {
        match self.valeur_affichee() {
            Ok(v) => {
                self.erreur.clear();
                self.moteur.set_variable(MEMOIRE, v);
                let r = self.moteur.evaluate();
                self.afficher(r);
            }
            Err(e) => self.set_erreur(e),
        }
    }

    /// Clavier physique d’une frame. Si un widget a le focus, Enter/Backspace
    /// lui appartiennent (un bouton focus s’active déjà sur Enter) : ignorés ici.
    pub fn clavier(&mut self, texte: &str, enter: bool, backspace: bool, widget_focus: bool) {
        for c in texte.chars() {
            self.append_chiffre(c);
        }
        if widget_focus {
            return;
        }
        if enter {
            self.enter();
        }
        if backspace {
            self.backspace();
        }
    }
}
