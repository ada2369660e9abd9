// src/noyau/session.rs
//
// Session de calcul : dernier résultat + registres nommés.
// C'est la seule surface consommée par les frontaux :
// - evaluer(texte)    -> Fraction (et mémorise le dernier résultat)
// - stocker(selecteur) -> range le dernier résultat dans un registre
//
// Frontière d'erreurs (perte d'information documentée) : toute erreur
// d'analyse ressort ici uniformément en ExpressionInvalide(texte d'origine).
// Seule DivisionParZero garde son identité à travers cette frontière.
//
// Une session = un appelant. Pas d'état partagé, pas de synchronisation :
// un serveur qui veut plusieurs clients construit plusieurs sessions.

use std::collections::HashMap;

use super::analyse::Analyseur;
use super::erreurs::Erreur;
use super::fraction::Fraction;

#[derive(Default)]
pub struct Session {
    /// Dernier résultat d'évaluation réussie (aucun avant la première).
    dernier: Option<Fraction>,
    registres: HashMap<char, Fraction>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// Évalue une ligne et mémorise le résultat.
    ///
    /// Ligne entièrement alphabétique (après trim) : lecture directe du
    /// registre nommé par le PREMIER caractère ("ab" lit le registre 'a').
    /// Sinon : analyse complète de l'expression.
    ///
    /// En cas d'échec, le dernier résultat reste inchangé.
    pub fn evaluer(&mut self, texte: &str) -> Result<Fraction, Erreur> {
        let ligne = texte.trim();

        let resultat = if mot_de_registre(ligne) {
            self.lire_registre(ligne)
        } else {
            Analyseur::new(ligne, &self.registres).analyser()
        };

        match resultat {
            Ok(valeur) => {
                self.dernier = Some(valeur.clone());
                Ok(valeur)
            }
            Err(Erreur::DivisionParZero) => Err(Erreur::DivisionParZero),
            // emballage uniforme, cause d'origine perdue (voulu)
            Err(_) => Err(Erreur::ExpressionInvalide(texte.to_string())),
        }
    }

    /// Range le dernier résultat dans le registre nommé par le DERNIER
    /// caractère du sélecteur ("STORE x" comme "x" visent le registre 'x').
    /// Écrase toute valeur précédente du registre.
    pub fn stocker(&mut self, selecteur: &str) -> Result<(), Erreur> {
        let valeur = self.dernier.clone().ok_or(Erreur::AucunResultat)?;
        let nom = selecteur.chars().last().ok_or(Erreur::SelecteurVide)?;
        self.registres.insert(nom, valeur);
        Ok(())
    }

    pub fn dernier_resultat(&self) -> Option<&Fraction> {
        self.dernier.as_ref()
    }

    fn lire_registre(&self, mot: &str) -> Result<Fraction, Erreur> {
        // mot_de_registre garantit au moins un caractère
        let nom = mot.chars().next().ok_or(Erreur::ExpressionVide)?;
        self.registres
            .get(&nom)
            .cloned()
            .ok_or(Erreur::RegistreInconnu(nom))
    }
}

/// Un ou plusieurs caractères ASCII alphabétiques, rien d'autre.
fn mot_de_registre(ligne: &str) -> bool {
    !ligne.is_empty() && ligne.chars().all(|c| c.is_ascii_alphabetic())
}
