//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : la saisie au clavier de la calculatrice (chiffres en cours de frappe, affichage,
//! historique) et la traduction de chaque touche en opération du noyau.
//!
//! Contrats :
//! - Aucun dessin ici (egui vit dans vue.rs).
//! - Après chaque touche qui touche la pile : affichage = lecture “rapport”,
//!   historique = description infixe + " =".
//! - Défense en profondeur : bornes sur le nombre de décimales.

use crate::noyau::Calculatrice;

/// Nom de la variable mémoire (touches →M et M).
pub const VARIABLE_MEMOIRE: &str = "M";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- sorties ---
    pub affichage: String,
    pub historique: String,

    // --- saisie ---
    /// Vrai tant qu’un nombre est en cours de frappe (pas encore poussé).
    pub en_saisie: bool,

    // --- noyau ---
    pub calc: Calculatrice,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            historique: String::new(),
            en_saisie: false,
            calc: Calculatrice::new(),
        }
    }
}

impl AppCalc {
    fn separateur_decimal(&self) -> char {
        self.calc.format().separateur_decimal
    }

    /// Valeur numérique de l’affichage (None si c’est un message d’erreur).
    pub fn valeur_affichee(&self) -> Option<f64> {
        self.calc.format().lire(&self.affichage)
    }

    /// Dépose la lecture “rapport” + l’historique ; termine la saisie.
    fn afficher_resultat(&mut self) {
        self.affichage = self.calc.affichage();
        self.historique = format!("{} =", self.calc.description());
        self.en_saisie = false;
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou séparateur décimal.
    pub fn ajouter_chiffre(&mut self, chiffre: char) {
        let sep = self.separateur_decimal();
        if !chiffre.is_ascii_digit() && chiffre != sep {
            return;
        }

        if !self.en_saisie {
            self.affichage = if chiffre == sep {
                format!("0{sep}")
            } else {
                chiffre.to_string()
            };
            self.en_saisie = true;
            return;
        }

        // un seul séparateur
        if chiffre == sep && self.affichage.contains(sep) {
            return;
        }

        // pas de zéros en tête
        let zero = self.affichage == "0" || self.affichage == "-0";
        if zero && chiffre == '0' {
            return;
        }
        if zero && chiffre != sep {
            self.affichage.pop();
        }

        self.affichage.push(chiffre);
    }

    /// En saisie : efface un caractère. Sinon : retire le dernier jeton de la pile.
    pub fn retour_arriere(&mut self) {
        if self.en_saisie {
            self.affichage.pop();
            if self.affichage.is_empty() || self.affichage == "-" {
                self.affichage = "0".to_string();
            }
            return;
        }
        self.calc.retirer_dernier();
        self.afficher_resultat();
    }

    /// En saisie : inverse le signe du nombre tapé. Sinon : opération "±".
    pub fn plus_moins(&mut self) {
        if self.en_saisie {
            if self.affichage.starts_with('-') {
                self.affichage.remove(0);
            } else {
                self.affichage.insert(0, '-');
            }
            return;
        }
        self.operer("±");
    }

    /* ------------------------ Pile ------------------------ */

    /// Pousse le nombre affiché (s’il en est un).
    pub fn entree(&mut self) {
        self.en_saisie = false;
        if let Some(v) = self.valeur_affichee() {
            self.calc.pousser_operande(v);
        }
        self.afficher_resultat();
    }

    /// Termine la saisie en cours, puis pousse l’opération.
    pub fn operer(&mut self, symbole: &str) {
        if self.en_saisie {
            self.entree();
        }
        self.calc.executer(symbole);
        self.afficher_resultat();
    }

    /// →M : la valeur affichée devient celle de la variable.
    pub fn fixer_variable(&mut self, nom: &str) {
        self.en_saisie = false;
        if let Some(v) = self.valeur_affichee() {
            self.calc.fixer_variable(nom, v);
            self.afficher_resultat();
        }
    }

    /// M : pousse une référence à la variable.
    pub fn pousser_variable(&mut self, nom: &str) {
        if self.en_saisie {
            self.entree();
        }
        self.calc.pousser_variable(nom);
        self.afficher_resultat();
    }

    /// C : pile + variables.
    pub fn tout_effacer(&mut self) {
        self.calc.tout_effacer();
        self.afficher_resultat();
    }

    /// Clavier physique : chiffres, séparateur, opérateurs ASCII ou Unicode.
    pub fn touche(&mut self, c: char) {
        match c {
            '+' => self.operer("+"),
            '-' | '−' => self.operer("−"),
            '*' | '×' => self.operer("×"),
            '/' | '÷' => self.operer("÷"),
            c if c.is_ascii_digit() || c == self.separateur_decimal() => self.ajouter_chiffre(c),
            _ => {}
        }
    }

    /* ------------------------ Réglages ------------------------ */

    /// Garde-fou : borne les décimales affichées.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.calc.format_mut().set_fraction_max(chiffres);
        if !self.en_saisie && !self.historique.is_empty() {
            self.afficher_resultat();
        }
    }

    pub fn chiffres(&self) -> usize {
        self.calc.format().fraction_max
    }
}
