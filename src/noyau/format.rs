// src/noyau/format.rs
//
// Format des nombres (affichage + relecture)
// ------------------------------------------
// - formater : f64 -> texte, au plus `fraction_max` décimales, milliers groupés
// - lire     : texte -> f64 (None si ce n’est pas un nombre affichable)
//
// L’arrondi se fait sur la valeur binaire EXACTE du f64 (BigRational),
// au pair le plus proche : 0.15 s’affiche "0.15", pas "0.1499999999".

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Décimales affichées par défaut.
pub const FRACTION_DEFAUT: usize = 10;

/// Garde-fou : au-delà, un f64 n’a plus de chiffres significatifs à montrer.
pub const FRACTION_MAX: usize = 15;

#[derive(Clone, Debug, PartialEq)]
pub struct FormatNombre {
    pub fraction_max: usize,
    /// None = pas de groupement des milliers.
    pub separateur_milliers: Option<char>,
    pub separateur_decimal: char,
    /// Rendu des résultats non finis (NaN, ±∞).
    pub symbole_erreur: String,
}

impl Default for FormatNombre {
    fn default() -> Self {
        Self {
            fraction_max: FRACTION_DEFAUT,
            separateur_milliers: Some(' '),
            separateur_decimal: '.',
            symbole_erreur: "Error".to_string(),
        }
    }
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// |r| * 10^chiffres, arrondi au pair le plus proche.
fn scaled_arrondi(r: &BigRational, chiffres: usize) -> BigInt {
    let n = r.numer().abs() * pow10(chiffres);
    let d = r.denom();

    let mut q = &n / d;
    let reste = &n % d;

    match (reste * 2u32).cmp(d) {
        std::cmp::Ordering::Greater => q += 1u32,
        std::cmp::Ordering::Equal if !(&q % 2u32).is_zero() => q += 1u32,
        _ => {}
    }
    q
}

/// "1234567" -> "1 234 567"
fn grouper(entier: &str, sep: char) -> String {
    let n = entier.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

impl FormatNombre {
    /// Garde-fou : borne le nombre de décimales.
    pub fn set_fraction_max(&mut self, n: usize) {
        self.fraction_max = n.min(FRACTION_MAX);
    }

    pub fn formater(&self, v: f64) -> String {
        let Some(r) = BigRational::from_float(v) else {
            // NaN / ±∞
            return self.symbole_erreur.clone();
        };

        let chiffres = self.fraction_max;
        let scaled = scaled_arrondi(&r, chiffres);
        if scaled.is_zero() {
            // pas de "-0"
            return "0".to_string();
        }

        let scale = pow10(chiffres);
        let entier = (&scaled / &scale).to_string();

        let mut frac = (&scaled % &scale).to_string();
        while frac.len() < chiffres {
            frac.insert(0, '0');
        }
        let frac = frac.trim_end_matches('0');

        let mut out = String::new();
        if r.is_negative() {
            out.push('-');
        }
        match self.separateur_milliers {
            Some(sep) => out.push_str(&grouper(&entier, sep)),
            None => out.push_str(&entier),
        }
        if !frac.is_empty() {
            out.push(self.separateur_decimal);
            out.push_str(frac);
        }
        out
    }

    /// Relit un nombre affiché : signe optionnel, chiffres (groupés ou non),
    /// au plus un séparateur décimal. Pas d’exposant, pas de inf/nan.
    pub fn lire(&self, s: &str) -> Option<f64> {
        let s = s.trim();
        if s.is_empty() || s == self.symbole_erreur {
            return None;
        }

        let (negatif, corps) = match s.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let mut normalise = String::with_capacity(corps.len());
        let mut nb_chiffres = 0usize;
        let mut vu_decimal = false;

        for c in corps.chars() {
            if c.is_ascii_digit() {
                normalise.push(c);
                nb_chiffres += 1;
            } else if c == self.separateur_decimal && !vu_decimal {
                normalise.push('.');
                vu_decimal = true;
            } else if Some(c) == self.separateur_milliers && !vu_decimal && nb_chiffres > 0 {
                continue;
            } else {
                return None;
            }
        }

        if nb_chiffres == 0 {
            return None;
        }

        let v: f64 = normalise.parse().ok()?;
        Some(if negatif { -v } else { v })
    }
}
