// src/cli/rapide.rs
//
// Mode direct : chaque argument de la ligne de commande est traité dans
// l'ordre. Un argument qui commence par "STORE" est passé tel quel à la
// session (son dernier caractère nomme le registre, ex. "STOREx") ; tout
// le reste est évalué et affiché "expression = résultat".
// Une erreur part sur stderr et on continue avec l'argument suivant.

use crate::noyau::Session;

pub fn lancer(expressions: &[String]) {
    let mut session = Session::new();

    for argument in expressions {
        if argument.starts_with("STORE") {
            if let Err(e) = session.stocker(argument) {
                eprintln!("Erreur: {e}");
            }
            continue;
        }

        match session.evaluer(argument) {
            Ok(resultat) => println!("{argument} = {resultat}"),
            Err(e) => eprintln!("Erreur: {e}"),
        }
    }
}
