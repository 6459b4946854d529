//! Session de calcul : pile postfixée + variables + format d’affichage.
//!
//! Chaque mutation de la pile est suivie d’une réévaluation complète (lecture “simple”),
//! rendue directement à l’appelant. Rien n’est mis en cache : `evaluer`, `evaluer_rapport`
//! et `description` sont des fonctions pures de l’état courant.
//!
//! Le registre est partagé (lecture seule) ; pile et variables appartiennent à la session.

use log::trace;

use super::eval::{self, ErreurEval};
use super::format::FormatNombre;
use super::jetons::Jeton;
use super::programme::{depuis_programme, est_nom_variable, vers_programme};
use super::rendu::decrire;
use super::variables::Variables;

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    pile: Vec<Jeton>,
    variables: Variables,
    format: FormatNombre,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Pile ------------------------ */

    pub fn pousser_operande(&mut self, v: f64) -> Option<f64> {
        trace!("pousser opérande {v}");
        self.pile.push(Jeton::Operande(v));
        self.evaluer()
    }

    /// Nom refusé (symbole, nombre, non-identifiant) : rien n’est poussé, comme `executer`.
    pub fn pousser_variable(&mut self, nom: &str) -> Option<f64> {
        if est_nom_variable(nom, &self.format) {
            trace!("pousser variable {nom}");
            self.pile.push(Jeton::Variable(nom.to_string()));
        } else {
            trace!("nom de variable {nom:?} refusé");
        }
        self.evaluer()
    }

    /// Symbole inconnu : rien n’est poussé (mais on réévalue quand même).
    pub fn executer(&mut self, symbole: &str) -> Option<f64> {
        match Jeton::operation(symbole) {
            Some(j) => {
                trace!("pousser opération {symbole}");
                self.pile.push(j);
            }
            None => trace!("opération inconnue {symbole:?} ignorée"),
        }
        self.evaluer()
    }

    pub fn retirer_dernier(&mut self) -> Option<f64> {
        if let Some(j) = self.pile.pop() {
            trace!("retirer {j}");
        }
        self.evaluer()
    }

    pub fn effacer_pile(&mut self) -> Option<f64> {
        trace!("effacer pile ({} jetons)", self.pile.len());
        self.pile.clear();
        self.evaluer()
    }

    /* ------------------------ Variables ------------------------ */

    pub fn fixer_variable(&mut self, nom: &str, v: f64) -> Option<f64> {
        trace!("{nom} := {v}");
        self.variables.fixer(nom, v);
        self.evaluer()
    }

    pub fn variable(&self, nom: &str) -> Option<f64> {
        self.variables.valeur(nom)
    }

    pub fn effacer_variables(&mut self) -> Option<f64> {
        trace!("effacer variables");
        self.variables.effacer();
        self.evaluer()
    }

    /// Pile + variables.
    pub fn tout_effacer(&mut self) -> Option<f64> {
        self.pile.clear();
        self.variables.effacer();
        trace!("tout effacer");
        self.evaluer()
    }

    /* ------------------------ Lectures ------------------------ */

    /// Lecture simple : None si erreur, pile vide ou résultat non fini.
    pub fn evaluer(&self) -> Option<f64> {
        eval::valeur_simple(eval::evaluer(&self.pile, &self.variables))
    }

    /// Lecture rapport : première erreur rencontrée, ou 0 si la pile est vide.
    pub fn evaluer_rapport(&self) -> Result<f64, ErreurEval> {
        eval::evaluer_rapport(&self.pile, &self.variables)
    }

    /// Texte infixe de la pile (voir `rendu`).
    pub fn description(&self) -> String {
        decrire(&self.pile, &self.format)
    }

    /// Résultat “rapport” prêt à afficher (valeur formatée ou message).
    pub fn affichage(&self) -> String {
        match self.evaluer_rapport() {
            Ok(v) => self.format.formater(v),
            Err(e) => e.to_string(),
        }
    }

    /* ------------------------ Programme ------------------------ */

    pub fn programme(&self) -> Vec<String> {
        vers_programme(&self.pile, &self.format)
    }

    /// Remplace toute la pile ; les variables ne bougent pas.
    pub fn charger_programme<S: AsRef<str>>(&mut self, symboles: &[S]) -> Option<f64> {
        self.pile = depuis_programme(symboles, &self.format);
        trace!("programme chargé ({} jetons)", self.pile.len());
        self.evaluer()
    }

    /* ------------------------ Accès ------------------------ */

    pub fn jetons(&self) -> &[Jeton] {
        &self.pile
    }

    pub fn est_vide(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn format(&self) -> &FormatNombre {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut FormatNombre {
        &mut self.format
    }
}
