// src/noyau/variables.rs
//
// Valeurs des variables (nom -> f64), lues paresseusement à l’évaluation.
// Une variable absente n’est pas une faute de pile : c’est l’évaluation qui échoue.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    valeurs: BTreeMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixer(&mut self, nom: impl Into<String>, valeur: f64) {
        self.valeurs.insert(nom.into(), valeur);
    }

    pub fn valeur(&self, nom: &str) -> Option<f64> {
        self.valeurs.get(nom).copied()
    }

    pub fn effacer(&mut self) {
        self.valeurs.clear();
    }

    pub fn est_vide(&self) -> bool {
        self.valeurs.is_empty()
    }

    /// Parcours trié par nom.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.valeurs.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
