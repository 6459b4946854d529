// src/lib.rs
//
// Calculatrice RPN
// - noyau : pile postfixée, évaluation, rendu infixe (sans UI)
// - app   : état + vue egui (natif + web)

pub mod app;
pub mod noyau;
