// src/noyau/programme.rs
//
// Programme sérialisable : une liste de chaînes.
// - symbole du registre      -> opération
// - nombre affiché (format)  -> opérande
// - identifiant              -> variable
// - le reste est ignoré sans erreur (chargement “au mieux” de données externes)

use super::format::FormatNombre;
use super::jetons::Jeton;
use super::operations::Registre;

/// Pile -> liste de chaînes (opérandes passés par le format d’affichage).
pub fn vers_programme(pile: &[Jeton], format: &FormatNombre) -> Vec<String> {
    pile.iter()
        .map(|j| match j {
            Jeton::Operande(v) => format.formater(*v),
            Jeton::Variable(nom) => nom.clone(),
            Jeton::Operation(op) => op.symbole.to_string(),
        })
        .collect()
}

/// Liste de chaînes -> pile. Registre d’abord, puis nombre, puis variable.
pub fn depuis_programme<S: AsRef<str>>(symboles: &[S], format: &FormatNombre) -> Vec<Jeton> {
    let registre = Registre::global();
    let mut pile = Vec::with_capacity(symboles.len());

    for s in symboles {
        let s = s.as_ref();
        if let Some(op) = registre.chercher(s) {
            pile.push(Jeton::Operation(op));
        } else if let Some(v) = format.lire(s) {
            pile.push(Jeton::Operande(v));
        } else if est_nom_variable(s, format) {
            pile.push(Jeton::Variable(s.to_string()));
        } else {
            log::debug!("programme : {s:?} ignoré");
        }
    }

    pile
}

/// Nom qu’une variable peut porter sans être relu autrement :
/// identifiant, ni symbole du registre, ni symbole d’erreur du format.
pub fn est_nom_variable(nom: &str, format: &FormatNombre) -> bool {
    est_identifiant(nom) && !Registre::global().contient(nom) && nom != format.symbole_erreur
}

/// [alpha | _] [alnum | _]*
fn est_identifiant(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}
