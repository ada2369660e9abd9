// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau.
// - Les erreurs d'analyse (Format, OperandeInvalide, RegistreInconnu,
//   ExpressionVide) sont ré-emballées en ExpressionInvalide à la frontière
//   `Session::evaluer` : perte d'information documentée, voulue pour garder
//   l'API de session simple.
// - DivisionParZero traverse cette frontière avec son identité propre.
// - AucunResultat / SelecteurVide concernent seulement `Session::stocker`.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Erreur {
    /// Littéral de fraction mal formé : barre manquante, partie non entière,
    /// ou dénominateur ≤ 0 après lecture.
    Format(String),

    /// Jeton en position d'opérande qui n'est ni un registre résoluble,
    /// ni un entier, ni une fraction (ex. deux opérateurs consécutifs).
    OperandeInvalide(String),

    /// Référence à un registre sans valeur stockée.
    RegistreInconnu(char),

    /// Zéro jeton présenté à l'analyseur.
    ExpressionVide,

    /// Opérande droit d'une division égal à zéro.
    DivisionParZero,

    /// Emballage uniforme des erreurs d'analyse, avec le texte d'origine.
    ExpressionInvalide(String),

    /// `stocker` appelé avant toute évaluation réussie.
    AucunResultat,

    /// Sélecteur de registre vide passé à `stocker`.
    SelecteurVide,
}

impl fmt::Display for Erreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Erreur::Format(detail) => write!(f, "format de fraction invalide: {detail}"),
            Erreur::OperandeInvalide(jeton) => write!(f, "opérande invalide: {jeton}"),
            Erreur::RegistreInconnu(nom) => write!(f, "registre inconnu: {nom}"),
            Erreur::ExpressionVide => write!(f, "expression vide"),
            Erreur::DivisionParZero => write!(f, "division par zéro"),
            Erreur::ExpressionInvalide(texte) => write!(f, "expression invalide: {texte}"),
            Erreur::AucunResultat => write!(f, "aucun résultat à stocker"),
            Erreur::SelecteurVide => write!(f, "sélecteur de registre vide"),
        }
    }
}

impl Error for Erreur {}
