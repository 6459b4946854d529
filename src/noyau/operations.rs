// src/noyau/operations.rs
//
// Registre des opérations (constantes, unaires, binaires)
// -------------------------------------------------------
// Table figée au premier accès (OnceLock), partagée en lecture seule.
//
// Ordre des arguments binaires :
// - la pile est consommée par la fin, donc `calcul(premier, second)` reçoit
//   d’abord le DERNIER poussé ;
// - "−" et "÷" appliquent donc `second − premier` et `second ÷ premier`
//   (3 5 − => 3 − 5 = −2).

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::OnceLock;

/// Précédence des feuilles et des résultats unaires : jamais parenthésés.
pub const PRECEDENCE_ATOMIQUE: u8 = u8::MAX;

/// Vérification de domaine unaire, appelée AVANT le calcul.
pub type VerifUnaire = fn(f64) -> Option<&'static str>;

/// Vérification de domaine binaire `(premier, second)`, appelée AVANT le calcul.
pub type VerifBinaire = fn(f64, f64) -> Option<&'static str>;

#[derive(Clone, Copy, Debug)]
pub enum Genre {
    Constante(fn() -> f64),
    Unaire {
        calcul: fn(f64) -> f64,
        verif: Option<VerifUnaire>,
    },
    Binaire {
        precedence: u8,
        commutative: bool,
        calcul: fn(f64, f64) -> f64,
        verif: Option<VerifBinaire>,
    },
}

/// Une entrée du registre, identifiée par son symbole.
#[derive(Clone, Copy, Debug)]
pub struct Operation {
    pub symbole: &'static str,
    pub genre: Genre,
}

impl Operation {
    /// Précédence d’affichage (atomique hors binaires).
    pub fn precedence(&self) -> u8 {
        match self.genre {
            Genre::Binaire { precedence, .. } => precedence,
            _ => PRECEDENCE_ATOMIQUE,
        }
    }

    pub fn commutative(&self) -> bool {
        match self.genre {
            Genre::Binaire { commutative, .. } => commutative,
            _ => true,
        }
    }
}

/* ------------------------ Vérifications de domaine ------------------------ */

fn verif_division(diviseur: f64, _dividende: f64) -> Option<&'static str> {
    if diviseur == 0.0 {
        Some("Division by zero")
    } else {
        None
    }
}

fn verif_racine(x: f64) -> Option<&'static str> {
    if x < 0.0 {
        Some("√negative number")
    } else {
        None
    }
}

/* ------------------------ Registre ------------------------ */

#[derive(Clone, Debug)]
pub struct Registre {
    ops: HashMap<&'static str, Operation>,
}

static REGISTRE: OnceLock<Registre> = OnceLock::new();

impl Registre {
    /// Registre partagé du processus (construit une seule fois).
    pub fn global() -> &'static Registre {
        REGISTRE.get_or_init(Registre::standard)
    }

    /// Construit la table standard de la calculatrice.
    pub fn standard() -> Self {
        let mut r = Registre {
            ops: HashMap::with_capacity(9),
        };

        r.apprendre("×", Genre::Binaire {
            precedence: 2,
            commutative: true,
            calcul: |a, b| a * b,
            verif: None,
        });
        r.apprendre("÷", Genre::Binaire {
            precedence: 2,
            commutative: false,
            calcul: |premier, second| second / premier,
            verif: Some(verif_division),
        });
        r.apprendre("+", Genre::Binaire {
            precedence: 1,
            commutative: true,
            calcul: |a, b| a + b,
            verif: None,
        });
        r.apprendre("−", Genre::Binaire {
            precedence: 1,
            commutative: false,
            calcul: |premier, second| second - premier,
            verif: None,
        });

        r.apprendre("√", Genre::Unaire {
            calcul: f64::sqrt,
            verif: Some(verif_racine),
        });
        r.apprendre("sin", Genre::Unaire {
            calcul: f64::sin,
            verif: None,
        });
        r.apprendre("cos", Genre::Unaire {
            calcul: f64::cos,
            verif: None,
        });
        r.apprendre("±", Genre::Unaire {
            calcul: |x| -x,
            verif: None,
        });

        r.apprendre("π", Genre::Constante(|| PI));

        r
    }

    fn apprendre(&mut self, symbole: &'static str, genre: Genre) {
        self.ops.insert(symbole, Operation { symbole, genre });
    }

    /// Recherche exacte par symbole.
    pub fn chercher(&self, symbole: &str) -> Option<&Operation> {
        self.ops.get(symbole)
    }

    /// Le symbole est réservé (une variable ne peut pas le porter).
    pub fn contient(&self, symbole: &str) -> bool {
        self.ops.contains_key(symbole)
    }

    /// Symboles connus, triés (affichage / aide).
    pub fn symboles(&self) -> Vec<&'static str> {
        let mut v: Vec<&'static str> = self.ops.keys().copied().collect();
        v.sort_unstable();
        v
    }
}
