//! Noyau — évaluation de la pile postfixée
//!
//! Un seul évaluateur, qui consomme la pile par la fin (pile de travail explicite) et rend
//! `Result<f64, ErreurEval>`. Les deux lectures demandées par l’interface en dérivent :
//! - `valeur_simple`   : erreur OU résultat non fini => None
//! - `evaluer_rapport` : l’erreur est gardée telle quelle, pile vide => 0
//!
//! La première erreur rencontrée coupe la descente : pas de résultat partiel.

use std::fmt;

use log::debug;

use super::jetons::{format_jetons, Jeton};
use super::operations::{Genre, VerifBinaire, VerifUnaire};
use super::variables::Variables;

#[derive(Clone, Debug, PartialEq)]
pub enum ErreurEval {
    /// Pile épuisée avant d’avoir tous les opérandes.
    ManqueOperandes,
    /// Variable référencée sans valeur.
    VariableNonDefinie(String),
    /// Message de la vérification de domaine (registre).
    Domaine(&'static str),
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurEval::ManqueOperandes => f.write_str("Lack of operands"),
            ErreurEval::VariableNonDefinie(nom) => write!(f, "{nom} didn't set"),
            ErreurEval::Domaine(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ErreurEval {}

/// Évalue la pile entière (une pile vide manque d’opérandes).
pub fn evaluer(pile: &[Jeton], variables: &Variables) -> Result<f64, ErreurEval> {
    let res = evaluer_depuis_fin(pile, variables);
    match &res {
        Ok((v, reste)) => debug!(
            "[{}] = {v} ({} jeton(s) restant(s))",
            format_jetons(pile),
            reste.len()
        ),
        Err(e) => debug!("[{}] = erreur: {e}", format_jetons(pile)),
    }
    res.map(|(v, _)| v)
}

/// Lecture “rapport” : une pile vide vaut 0.
pub fn evaluer_rapport(pile: &[Jeton], variables: &Variables) -> Result<f64, ErreurEval> {
    if pile.is_empty() {
        return Ok(0.0);
    }
    evaluer(pile, variables)
}

/// Lecture “simple” : toute erreur et tout résultat non fini deviennent None.
pub fn valeur_simple(res: Result<f64, ErreurEval>) -> Option<f64> {
    res.ok().filter(|v| v.is_finite())
}

/// Opération dont on attend encore des opérandes.
enum Attente {
    Unaire {
        calcul: fn(f64) -> f64,
        verif: Option<VerifUnaire>,
    },
    Binaire {
        calcul: fn(f64, f64) -> f64,
        verif: Option<VerifBinaire>,
        premier: Option<f64>,
    },
}

/// Consomme le dernier jeton (et ses opérandes) ; rend la valeur + le reste non consommé.
///
/// Chaque opération lit ses opérandes juste à sa gauche : les jetons sont donc lus strictement
/// de droite à gauche, et les opérations en attente vivent dans un `Vec` (profondeur illimitée).
fn evaluer_depuis_fin<'a>(
    pile: &'a [Jeton],
    variables: &Variables,
) -> Result<(f64, &'a [Jeton]), ErreurEval> {
    let mut attente: Vec<Attente> = Vec::new();
    let mut reste = pile;

    loop {
        let (dernier, r) = reste.split_last().ok_or(ErreurEval::ManqueOperandes)?;
        reste = r;

        let mut valeur = match dernier {
            Jeton::Operande(v) => *v,
            Jeton::Variable(nom) => variables
                .valeur(nom)
                .ok_or_else(|| ErreurEval::VariableNonDefinie(nom.clone()))?,
            Jeton::Operation(op) => match op.genre {
                Genre::Constante(calcul) => calcul(),
                Genre::Unaire { calcul, verif } => {
                    attente.push(Attente::Unaire { calcul, verif });
                    continue;
                }
                Genre::Binaire { calcul, verif, .. } => {
                    attente.push(Attente::Binaire {
                        calcul,
                        verif,
                        premier: None,
                    });
                    continue;
                }
            },
        };

        // la valeur remonte tant qu’elle complète une opération
        loop {
            match attente.pop() {
                None => return Ok((valeur, reste)),

                Some(Attente::Unaire { calcul, verif }) => {
                    if let Some(msg) = verif.and_then(|v| v(valeur)) {
                        return Err(ErreurEval::Domaine(msg));
                    }
                    valeur = calcul(valeur);
                }

                Some(Attente::Binaire {
                    calcul,
                    verif,
                    premier: None,
                }) => {
                    attente.push(Attente::Binaire {
                        calcul,
                        verif,
                        premier: Some(valeur),
                    });
                    break;
                }

                Some(Attente::Binaire {
                    calcul,
                    verif,
                    premier: Some(premier),
                }) => {
                    if let Some(msg) = verif.and_then(|v| v(premier, valeur)) {
                        return Err(ErreurEval::Domaine(msg));
                    }
                    valeur = calcul(premier, valeur);
                }
            }
        }
    }
}
