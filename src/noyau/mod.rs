//! Noyau RPN
//!
//! Organisation interne :
//! - operations.rs   : registre des opérations (symbole, arité, calcul, domaine)
//! - variables.rs    : valeurs des variables
//! - jetons.rs       : entrées de pile (opérande, variable, opération)
//! - eval.rs         : évaluation (pile de travail explicite) + erreurs structurées
//! - rendu.rs        : pile -> texte infixe
//! - format.rs       : affichage / relecture des nombres
//! - programme.rs    : pile <-> liste de chaînes
//! - calculatrice.rs : session (pile + variables + format)

pub mod calculatrice;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operations;
pub mod programme;
pub mod rendu;
pub mod variables;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use calculatrice::Calculatrice;
pub use eval::ErreurEval;
pub use format::FormatNombre;
