// src/noyau/jetons.rs
//
// Jetons : découpe sur les blancs + classement.
// Chaque mot brut est classé UNE fois dans un ensemble fermé de catégories ;
// l'analyseur consomme ensuite par filtrage exhaustif (pas de sondage par
// expressions régulières en cascade).
//
// Ordre de classement d'un mot :
// 1. opérateur exact (+ - * /)
// 2. caractère alphabétique seul => référence de registre
// 3. littéral de fraction "<entier>/<entier>" (tenté AVANT l'entier)
// 4. littéral entier
// 5. sinon Invalide (le texte brut est gardé pour le message d'erreur)

use num_bigint::BigInt;

use super::fraction::Fraction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operateur {
    pub fn symbole(&self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Minus => "-",
            Operateur::Star => "*",
            Operateur::Slash => "/",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Op(Operateur),
    /// Référence de registre : un seul caractère alphabétique.
    Registre(char),
    Entier(BigInt),
    Fraction(Fraction),
    /// Mot inclassable ; texte brut conservé.
    Invalide(String),
}

/// Découpe `texte` sur les suites de blancs et classe chaque mot.
/// Entrée vide (ou blanche) => zéro jeton ; c'est l'analyseur qui en fera
/// une ExpressionVide.
pub fn decouper(texte: &str) -> Vec<Jeton> {
    texte.split_whitespace().map(classer).collect()
}

fn classer(mot: &str) -> Jeton {
    match mot {
        "+" => return Jeton::Op(Operateur::Plus),
        "-" => return Jeton::Op(Operateur::Minus),
        "*" => return Jeton::Op(Operateur::Star),
        "/" => return Jeton::Op(Operateur::Slash),
        _ => {}
    }

    let mut lettres = mot.chars();
    if let (Some(c), None) = (lettres.next(), lettres.next()) {
        if c.is_alphabetic() {
            return Jeton::Registre(c);
        }
    }

    // Fraction d'abord ("3/-2" échoue ici ET comme entier => Invalide),
    // entier ensuite.
    if let Ok(f) = Fraction::lire(mot) {
        return Jeton::Fraction(f);
    }
    if let Some(n) = BigInt::parse_bytes(mot.as_bytes(), 10) {
        return Jeton::Entier(n);
    }

    Jeton::Invalide(mot.to_string())
}
