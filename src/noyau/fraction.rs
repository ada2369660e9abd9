// src/noyau/fraction.rs
//
// Fraction exacte (arbitraire précision), valeur immuable.
// Invariants :
// - toujours réduite (numérateur et dénominateur premiers entre eux)
// - dénominateur > 0, le signe vit dans le numérateur
// - zéro est 0/1 et s'affiche "0"
// La réduction et la normalisation du signe sont faites par BigRational::new
// à chaque construction ; aucune opération ne mute une fraction existante.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use std::fmt;

use super::erreurs::Erreur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Construit num/den réduite. Dénominateur nul : erreur (jamais indéfini).
    /// Un dénominateur négatif est accepté : le signe remonte au numérateur.
    pub fn new(num: BigInt, den: BigInt) -> Result<Fraction, Erreur> {
        if den.is_zero() {
            return Err(Erreur::DivisionParZero);
        }
        Ok(Fraction(BigRational::new(num, den)))
    }

    /// Entier n vu comme n/1.
    pub fn entier(n: BigInt) -> Fraction {
        Fraction(BigRational::from_integer(n))
    }

    pub fn zero() -> Fraction {
        Fraction(BigRational::zero())
    }

    /// Lit la forme exacte "<entier>/<entier>".
    ///
    /// Erreurs de format :
    /// - pas de barre de fraction
    /// - l'un des côtés n'est pas un entier (précision arbitraire)
    /// - dénominateur ≤ 0 (la réduction ne change pas le signe, donc le
    ///   contrôle se fait sur le dénominateur lu : "3/-2" et "3/0" refusés,
    ///   "-3/2" accepté)
    pub fn lire(texte: &str) -> Result<Fraction, Erreur> {
        let (haut, bas) = texte
            .split_once('/')
            .ok_or_else(|| Erreur::Format(format!("barre de fraction manquante: {texte}")))?;

        let num = BigInt::parse_bytes(haut.as_bytes(), 10)
            .ok_or_else(|| Erreur::Format(format!("numérateur invalide: {haut}")))?;
        let den = BigInt::parse_bytes(bas.as_bytes(), 10)
            .ok_or_else(|| Erreur::Format(format!("dénominateur invalide: {bas}")))?;

        if !den.is_positive() {
            return Err(Erreur::Format(format!(
                "dénominateur non positif: {texte}"
            )));
        }

        Ok(Fraction(BigRational::new(num, den)))
    }

    pub fn est_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn numerateur(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominateur(&self) -> &BigInt {
        self.0.denom()
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn ajouter(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 + &autre.0)
    }

    pub fn soustraire(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 - &autre.0)
    }

    pub fn multiplier(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 * &autre.0)
    }

    /// Division exacte. Diviseur nul : DivisionParZero (le contrôle est ici,
    /// avant la multiplication par l'inverse).
    pub fn diviser(&self, autre: &Fraction) -> Result<Fraction, Erreur> {
        if autre.est_zero() {
            return Err(Erreur::DivisionParZero);
        }
        Ok(Fraction(&self.0 / &autre.0))
    }

    /// Approximation flottante, pour affichage seulement — jamais réinjectée
    /// dans un calcul exact.
    pub fn approx_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

/// Forme canonique : "0", ou "n" si dénominateur 1, sinon "n/d".
/// (zéro étant stocké 0/1, la première règle découle de la deuxième)
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.numer();
        let d = self.0.denom();
        if d.is_one() {
            write!(f, "{n}")
        } else {
            write!(f, "{n}/{d}")
        }
    }
}
