// src/noyau/jetons.rs

use std::fmt;

use super::operations::{Operation, Registre, PRECEDENCE_ATOMIQUE};

/// Une entrée de la pile (programme postfixé).
///
/// `Operation` ne se construit qu’à partir du registre : son symbole existe forcément.
#[derive(Clone, Debug)]
pub enum Jeton {
    Operande(f64),
    Variable(String),
    Operation(&'static Operation),
}

impl Jeton {
    /// Jeton d’opération, si le symbole est connu du registre global.
    pub fn operation(symbole: &str) -> Option<Self> {
        Registre::global()
            .chercher(symbole)
            .map(Jeton::Operation)
    }

    /// Précédence d’affichage : seules les binaires descendent sous l’atome.
    pub fn precedence(&self) -> u8 {
        match self {
            Jeton::Operation(op) => op.precedence(),
            _ => PRECEDENCE_ATOMIQUE,
        }
    }
}

// f64 : égalité bit à bit pour que NaN == NaN (comparaison de programmes).
// Opération : égalité par symbole (unicité garantie par le registre).
impl PartialEq for Jeton {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Jeton::Operande(a), Jeton::Operande(b)) => a.to_bits() == b.to_bits(),
            (Jeton::Variable(a), Jeton::Variable(b)) => a == b,
            (Jeton::Operation(a), Jeton::Operation(b)) => a.symbole == b.symbole,
            _ => false,
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(v) => write!(f, "{v}"),
            Jeton::Variable(nom) => f.write_str(nom),
            Jeton::Operation(op) => f.write_str(op.symbole),
        }
    }
}

/// Format utilitaire (journal / “démarche”) : pile en texte postfixé.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        out.push(j.to_string());
    }
    out.join(" ")
}
