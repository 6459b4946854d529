// src/noyau/rendu.rs
//
// Pile postfixée -> texte infixe lisible
// --------------------------------------
// Règles :
// - on reconstruit depuis la fin ; tant qu’il reste des jetons non consommés,
//   on recommence sur le reste, et les morceaux sont joints par ", "
//   (le plus ancien à gauche, le plus récent à droite) ;
// - opérande manquant => "?" ;
// - binaire de précédence P, `gauche op droite` (droite = dernier poussé) :
//     droite parenthésée si P > p(droite), ou P == p(droite) et op non commutative
//     gauche parenthésée si P > p(gauche)
// - feuilles, constantes, unaires : précédence atomique (jamais de parenthèses).

use super::format::FormatNombre;
use super::jetons::Jeton;
use super::operations::{Genre, Operation, PRECEDENCE_ATOMIQUE};

/// Texte infixe de toute la pile. Une pile vide se lit "?".
pub fn decrire(pile: &[Jeton], format: &FormatNombre) -> String {
    let mut morceaux: Vec<String> = Vec::new();
    let mut reste = pile;

    loop {
        let (texte, r, _) = decrire_depuis_fin(reste, format);
        morceaux.push(texte);
        reste = r;
        if reste.is_empty() {
            break;
        }
    }

    morceaux.reverse();
    morceaux.join(", ")
}

fn entre_parentheses(s: String) -> String {
    format!("({s})")
}

/// Opération dont le texte attend encore ses opérandes.
enum Attente {
    Unaire(&'static Operation),
    Binaire {
        op: &'static Operation,
        droite: Option<String>,
    },
}

/// (texte, reste non consommé, précédence effective)
///
/// Même parcours de droite à gauche que l’évaluateur, avec une pile de travail explicite.
fn decrire_depuis_fin<'a>(pile: &'a [Jeton], format: &FormatNombre) -> (String, &'a [Jeton], u8) {
    let mut attente: Vec<Attente> = Vec::new();
    let mut reste = pile;

    loop {
        // pile épuisée : opérande manquant, rien n’est consommé
        let Some((dernier, r)) = reste.split_last() else {
            match remonter(&mut attente, "?".to_string(), PRECEDENCE_ATOMIQUE) {
                Some((texte, p)) => return (texte, reste, p),
                None => continue,
            }
        };
        reste = r;

        let texte = match dernier {
            Jeton::Operande(v) => format.formater(*v),
            Jeton::Variable(nom) => nom.clone(),
            Jeton::Operation(op) => match op.genre {
                Genre::Constante(_) => op.symbole.to_string(),
                Genre::Unaire { .. } => {
                    attente.push(Attente::Unaire(*op));
                    continue;
                }
                Genre::Binaire { .. } => {
                    attente.push(Attente::Binaire {
                        op: *op,
                        droite: None,
                    });
                    continue;
                }
            },
        };

        if let Some((texte, p)) = remonter(&mut attente, texte, dernier.precedence()) {
            return (texte, reste, p);
        }
    }
}

/// Fait remonter un texte complet dans les opérations en attente.
/// Rend `Some` quand l’expression du sommet est terminée, `None` s’il manque encore un opérande.
fn remonter(attente: &mut Vec<Attente>, mut texte: String, mut p: u8) -> Option<(String, u8)> {
    loop {
        match attente.pop() {
            None => return Some((texte, p)),

            Some(Attente::Unaire(op)) => {
                texte = format!("{}({texte})", op.symbole);
                p = PRECEDENCE_ATOMIQUE;
            }

            Some(Attente::Binaire { op, droite: None }) => {
                let prec = op.precedence();
                if prec > p || (prec == p && !op.commutative()) {
                    texte = entre_parentheses(texte);
                }
                attente.push(Attente::Binaire {
                    op,
                    droite: Some(texte),
                });
                return None;
            }

            Some(Attente::Binaire {
                op,
                droite: Some(droite),
            }) => {
                let prec = op.precedence();
                if prec > p {
                    texte = entre_parentheses(texte);
                }
                texte = format!("{texte} {} {droite}", op.symbole);
                p = prec;
            }
        }
    }
}
