//! Scénarios de calculatrice : suites de touches -> valeur + texte infixe.
//!
//! Chaque scénario rejoue une session complète (une `Calculatrice` neuve),
//! vérifie la valeur rendue à chaque étape puis la description finale.
//!
//! Les comparaisons approchées servent pour √, sin, cos (résultats irrationnels).

use super::Calculatrice;
use super::ErreurEval;

const EPS: f64 = 1e-3;

fn proche(obtenu: Option<f64>, attendu: f64) {
    let v = obtenu.unwrap_or_else(|| panic!("attendu ≈ {attendu}, obtenu None"));
    assert!(
        (v - attendu).abs() < EPS,
        "attendu ≈ {attendu}, obtenu {v}"
    );
}

/* ------------------------ Ordre des opérandes ------------------------ */

#[test]
fn scen_soustraction_ordre_de_poussee() {
    let mut c = Calculatrice::new();
    assert_eq!(c.pousser_operande(3.0), Some(3.0));
    assert_eq!(c.pousser_operande(5.0), Some(5.0));
    assert_eq!(c.executer("−"), Some(-2.0));
    assert_eq!(c.description(), "3 − 5");

    let mut c = Calculatrice::new();
    c.pousser_operande(5.0);
    c.pousser_operande(3.0);
    assert_eq!(c.executer("−"), Some(2.0));
}

#[test]
fn scen_division_ordre_de_poussee() {
    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    c.pousser_operande(4.0);
    assert_eq!(c.executer("×"), Some(20.0));
    assert_eq!(c.executer("÷"), Some(0.15));
    assert_eq!(c.description(), "3 ÷ (5 × 4)");
}

/* ------------------------ Feuilles ------------------------ */

#[test]
fn scen_feuilles() {
    let mut c = Calculatrice::new();
    assert_eq!(c.pousser_operande(23.5), Some(23.5));
    assert_eq!(c.description(), "23.5");

    let mut c = Calculatrice::new();
    assert_eq!(c.executer("π"), Some(std::f64::consts::PI));
    assert_eq!(c.description(), "π");

    let mut c = Calculatrice::new();
    assert_eq!(c.pousser_variable("x"), None);
    assert_eq!(c.description(), "x");
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn scen_precedence() {
    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    assert_eq!(c.executer("+"), Some(8.0));
    c.pousser_operande(6.0);
    assert_eq!(c.executer("×"), Some(48.0));
    assert_eq!(c.description(), "(3 + 5) × 6");

    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    c.pousser_operande(4.0);
    assert_eq!(c.executer("+"), Some(9.0));
    assert_eq!(c.executer("×"), Some(27.0));
    assert_eq!(c.description(), "3 × (5 + 4)");

    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    c.pousser_operande(4.0);
    assert_eq!(c.executer("+"), Some(9.0));
    assert_eq!(c.executer("+"), Some(12.0));
    assert_eq!(c.description(), "3 + 5 + 4");
}

#[test]
fn scen_non_commutatif() {
    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    c.pousser_operande(4.0);
    assert_eq!(c.executer("+"), Some(9.0));
    assert_eq!(c.executer("−"), Some(-6.0));
    assert_eq!(c.description(), "3 − (5 + 4)");

    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    assert_eq!(c.executer("−"), Some(-2.0));
    c.pousser_operande(7.0);
    c.pousser_operande(8.0);
    assert_eq!(c.executer("−"), Some(-1.0));
    assert_eq!(c.executer("−"), Some(-1.0));
    assert_eq!(c.description(), "3 − 5 − (7 − 8)");

    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    c.executer("+");
    c.pousser_operande(7.0);
    c.pousser_operande(8.0);
    assert_eq!(c.executer("+"), Some(15.0));
    proche(c.executer("÷"), 8.0 / 15.0);
    assert_eq!(c.description(), "(3 + 5) ÷ (7 + 8)");
}

#[test]
fn scen_unaires_imbriques() {
    let mut c = Calculatrice::new();
    c.pousser_operande(10.0);
    proche(c.executer("√"), 3.162);
    c.pousser_operande(3.0);
    proche(c.executer("+"), 6.162);
    assert_eq!(c.description(), "√(10) + 3");

    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    proche(c.executer("√"), 2.236);
    proche(c.executer("+"), 5.236);
    proche(c.executer("√"), 2.288);
    c.pousser_operande(6.0);
    proche(c.executer("÷"), 0.381);
    assert_eq!(c.description(), "√(3 + √(5)) ÷ 6");

    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    c.executer("+");
    c.pousser_operande(7.0);
    c.pousser_operande(8.0);
    c.executer("+");
    assert_eq!(c.executer("×"), Some(120.0));
    proche(c.executer("√"), 10.954);
    assert_eq!(c.description(), "√((3 + 5) × (7 + 8))");

    let mut c = Calculatrice::new();
    c.pousser_operande(10.0);
    proche(c.executer("cos"), 10f64.cos());
    assert_eq!(c.description(), "cos(10)");
}

#[test]
fn scen_signe_et_constante() {
    let mut c = Calculatrice::new();
    c.pousser_operande(4.0);
    assert_eq!(c.executer("±"), Some(-4.0));
    assert_eq!(c.description(), "±(4)");

    c.executer("π");
    proche(c.executer("sin"), 0.0);
    assert_eq!(c.description(), "±(4), sin(π)");
}

/* ------------------------ Pile incomplète / historique ------------------------ */

#[test]
fn scen_operande_manquant() {
    let mut c = Calculatrice::new();
    assert_eq!(c.pousser_operande(3.0), Some(3.0));
    assert_eq!(c.executer("+"), None);
    assert_eq!(c.description(), "? + 3");
    assert_eq!(c.evaluer_rapport(), Err(ErreurEval::ManqueOperandes));
    assert_eq!(c.affichage(), "Lack of operands");
}

#[test]
fn scen_historique_plusieurs_resultats() {
    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    assert_eq!(c.executer("+"), Some(8.0));
    proche(c.executer("√"), 2.828);
    assert_eq!(c.executer("π"), Some(std::f64::consts::PI));
    assert_eq!(c.executer("cos"), Some(-1.0));
    assert_eq!(c.description(), "√(3 + 5), cos(π)");

    let mut c = Calculatrice::new();
    c.pousser_operande(3.0);
    c.pousser_operande(5.0);
    proche(c.executer("cos"), 5f64.cos());
    assert_eq!(c.description(), "3, cos(5)");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn scen_division_par_zero() {
    let mut c = Calculatrice::new();
    c.pousser_operande(5.0);
    c.pousser_operande(0.0);
    assert_eq!(c.executer("÷"), None);
    assert_eq!(c.evaluer_rapport(), Err(ErreurEval::Domaine("Division by zero")));
    assert_eq!(c.description(), "5 ÷ 0");
}

#[test]
fn scen_variable_non_definie_propagee() {
    let mut c = Calculatrice::new();
    assert_eq!(c.pousser_variable("x"), None);
    assert_eq!(c.affichage(), "x didn't set");

    c.pousser_operande(2.0);
    assert_eq!(c.executer("+"), None, "pas de somme partielle");
    assert_eq!(c.affichage(), "x didn't set");
    assert_eq!(c.description(), "x + 2");

    assert_eq!(c.fixer_variable("x", 5.2), Some(7.2));
    assert_eq!(c.affichage(), "7.2");
}

#[test]
fn scen_racine_negative() {
    let mut c = Calculatrice::new();
    c.pousser_operande(-4.0);
    assert_eq!(c.executer("√"), None);
    assert_eq!(c.affichage(), "√negative number");
    assert_eq!(c.description(), "√(-4)");
}

#[test]
fn scen_pile_videe() {
    let mut c = Calculatrice::new();
    assert_eq!(c.evaluer(), None);
    assert_eq!(c.evaluer_rapport(), Ok(0.0));

    c.pousser_operande(1.0);
    c.pousser_operande(2.0);
    c.executer("+");
    c.retirer_dernier();
    c.retirer_dernier();
    assert_eq!(c.retirer_dernier(), None);
    assert!(c.est_vide());
    assert_eq!(c.evaluer_rapport(), Ok(0.0));
    assert_eq!(c.description(), "?");
}

/* ------------------------ Pureté ------------------------ */

#[test]
fn scen_idempotence() {
    let mut c = Calculatrice::new();
    c.fixer_variable("M", 3.0);
    c.pousser_variable("M");
    c.pousser_operande(7.0);
    c.executer("÷");

    let a = (c.evaluer(), c.evaluer_rapport(), c.description(), c.programme());
    let b = (c.evaluer(), c.evaluer_rapport(), c.description(), c.programme());
    assert_eq!(a, b);
}
