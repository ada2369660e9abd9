// src/noyau/analyse.rs
//
// Descente récursive sur les jetons classés, deux niveaux de précédence,
// associativité gauche :
//
//   expression := terme (("+" | "-") terme)*
//   terme      := operande (("*" | "/") operande)*
//   operande   := entier | fraction | registre
//
// Pas de parenthèses. Les registres sont résolus ici, contre la table que
// la session prête à l'analyseur.
//
// Bizarrerie héritée (assumée) : dès qu'un jeton qui n'est pas un opérateur
// reconnu suit une expression complète, l'analyse s'arrête et les jetons
// restants sont ignorés sans erreur ("2 + 3 4" vaut 5).

use std::collections::HashMap;

use super::erreurs::Erreur;
use super::fraction::Fraction;
use super::jetons::{decouper, Jeton, Operateur};

pub struct Analyseur<'r> {
    jetons: Vec<Jeton>,
    position: usize,
    registres: &'r HashMap<char, Fraction>,
}

impl<'r> Analyseur<'r> {
    pub fn new(texte: &str, registres: &'r HashMap<char, Fraction>) -> Self {
        Self {
            jetons: decouper(texte),
            position: 0,
            registres,
        }
    }

    /// Analyse et évalue l'expression complète.
    pub fn analyser(&mut self) -> Result<Fraction, Erreur> {
        if self.jetons.is_empty() {
            return Err(Erreur::ExpressionVide);
        }
        self.expression()
    }

    fn courant(&self) -> Option<&Jeton> {
        self.jetons.get(self.position)
    }

    fn avancer(&mut self) {
        self.position += 1;
    }

    /* ------------------------ Niveaux de précédence ------------------------ */

    fn expression(&mut self) -> Result<Fraction, Erreur> {
        let mut gauche = self.terme()?;
        loop {
            match self.courant() {
                Some(Jeton::Op(Operateur::Plus)) => {
                    self.avancer();
                    let droite = self.terme()?;
                    gauche = gauche.ajouter(&droite);
                }
                Some(Jeton::Op(Operateur::Minus)) => {
                    self.avancer();
                    let droite = self.terme()?;
                    gauche = gauche.soustraire(&droite);
                }
                // fin d'analyse : jetons restants ignorés (voir en-tête)
                _ => break,
            }
        }
        Ok(gauche)
    }

    fn terme(&mut self) -> Result<Fraction, Erreur> {
        let mut gauche = self.operande()?;
        loop {
            match self.courant() {
                Some(Jeton::Op(Operateur::Star)) => {
                    self.avancer();
                    let droite = self.operande()?;
                    gauche = gauche.multiplier(&droite);
                }
                Some(Jeton::Op(Operateur::Slash)) => {
                    self.avancer();
                    let droite = self.operande()?;
                    // contrôle ici, au niveau du terme, avant de déléguer
                    if droite.est_zero() {
                        return Err(Erreur::DivisionParZero);
                    }
                    gauche = gauche.diviser(&droite)?;
                }
                _ => break,
            }
        }
        Ok(gauche)
    }

    fn operande(&mut self) -> Result<Fraction, Erreur> {
        let jeton = self
            .courant()
            .ok_or_else(|| Erreur::OperandeInvalide("fin d'expression".into()))?;

        let valeur = match jeton {
            // un opérateur en position d'opérande : deux opérateurs collés
            Jeton::Op(op) => return Err(Erreur::OperandeInvalide(op.symbole().into())),

            Jeton::Registre(nom) => match self.registres.get(nom) {
                Some(v) => v.clone(),
                None => return Err(Erreur::RegistreInconnu(*nom)),
            },

            Jeton::Entier(n) => Fraction::entier(n.clone()),
            Jeton::Fraction(f) => f.clone(),

            Jeton::Invalide(brut) => return Err(Erreur::OperandeInvalide(brut.clone())),
        };

        self.avancer();
        Ok(valeur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evalue(texte: &str) -> Result<Fraction, Erreur> {
        let registres = HashMap::new();
        Analyseur::new(texte, &registres).analyser()
    }

    fn evalue_avec(texte: &str, registres: &HashMap<char, Fraction>) -> Result<Fraction, Erreur> {
        Analyseur::new(texte, registres).analyser()
    }

    fn ok(texte: &str) -> String {
        evalue(texte)
            .unwrap_or_else(|e| panic!("évaluation de {texte:?} en erreur: {e}"))
            .to_string()
    }

    #[test]
    fn precedence_standard() {
        assert_eq!(ok("2 + 3 * 4"), "14");
        assert_eq!(ok("2 * 3 + 4"), "10");
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(ok("8 / 2 / 2"), "2");
        assert_eq!(ok("10 - 4 - 3"), "3");
    }

    #[test]
    fn fractions_dans_l_expression() {
        assert_eq!(ok("1/2 + 1/3"), "5/6");
        assert_eq!(ok("1/2 * 2/3 + 1"), "4/3");
        assert_eq!(ok("-3/2 + 1/2"), "-1");
    }

    #[test]
    fn operande_seul() {
        assert_eq!(ok("7"), "7");
        assert_eq!(ok("3/4"), "3/4");
    }

    #[test]
    fn division_par_zero_dans_le_terme() {
        assert_eq!(evalue("6 / 0").unwrap_err(), Erreur::DivisionParZero);
        // le zéro peut venir d'une fraction littérale réduite
        assert_eq!(evalue("1 / 0/5").unwrap_err(), Erreur::DivisionParZero);
    }

    #[test]
    fn expression_vide() {
        assert_eq!(evalue("").unwrap_err(), Erreur::ExpressionVide);
        assert_eq!(evalue("   ").unwrap_err(), Erreur::ExpressionVide);
    }

    #[test]
    fn operateurs_consecutifs() {
        assert_eq!(
            evalue("1 + * 2").unwrap_err(),
            Erreur::OperandeInvalide("*".into())
        );
        assert_eq!(
            evalue("+ 1").unwrap_err(),
            Erreur::OperandeInvalide("+".into())
        );
    }

    #[test]
    fn operande_manquant_en_fin() {
        assert!(matches!(
            evalue("1 +").unwrap_err(),
            Erreur::OperandeInvalide(_)
        ));
    }

    #[test]
    fn operande_inclassable() {
        assert_eq!(
            evalue("1 + 3/-2").unwrap_err(),
            Erreur::OperandeInvalide("3/-2".into())
        );
    }

    #[test]
    fn registres_resolus() {
        let mut registres = HashMap::new();
        registres.insert('a', Fraction::lire("3/4").unwrap());
        assert_eq!(evalue_avec("a + 1/4", &registres).unwrap().to_string(), "1");
        assert_eq!(
            evalue_avec("b", &registres).unwrap_err(),
            Erreur::RegistreInconnu('b')
        );
    }

    #[test]
    fn jetons_en_trop_ignores() {
        // bizarrerie héritée : "4" est abandonné sans erreur
        assert_eq!(ok("2 + 3 4"), "5");
        assert_eq!(ok("1 2"), "1");
    }

    #[test]
    fn precision_arbitraire() {
        assert_eq!(
            ok("123456789123456789 * 1000000000000000000"),
            "123456789123456789000000000000000000"
        );
    }
}
