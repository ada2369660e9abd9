// src/cli/interactif.rs
//
// Mode interactif : bannière, invite "> ", une ligne = une expression ou
// une commande.
// - "quit" (insensible à la casse)  : fin de séance
// - "store <r>" (registre d'UN caractère) : range le dernier résultat
// - sinon : contrôle de plausibilité puis évaluation
// Les erreurs partent sur stderr et la boucle continue ; l'état de la
// session n'est jamais touché par une ligne en échec.

use std::io::{self, BufRead, Write};

use crate::noyau::Session;

pub fn lancer() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    println!("Calculatrice interactive à fractions");
    println!("Entrez des expressions ou des commandes (ex. 'store A', 'quit') :");

    let mut ligne = String::new();
    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;

        ligne.clear();
        if stdin.lock().read_line(&mut ligne)? == 0 {
            // fin d'entrée (Ctrl-D)
            break;
        }
        let entree = ligne.trim();

        if entree.eq_ignore_ascii_case("quit") {
            println!("Calculatrice terminée.");
            break;
        }

        if entree.to_lowercase().starts_with("store ") {
            traiter_store(&mut session, entree);
            continue;
        }

        if !expression_plausible(entree) {
            eprintln!("Erreur: format d'expression invalide");
            continue;
        }

        match session.evaluer(entree) {
            Ok(resultat) => println!("Résultat: {resultat}"),
            Err(e) => eprintln!("Erreur: {e}"),
        }
    }

    Ok(())
}

/// "store <r>" : exactement deux mots, registre d'un seul caractère.
fn traiter_store(session: &mut Session, entree: &str) {
    let mots: Vec<&str> = entree.split_whitespace().collect();
    if mots.len() != 2 || mots[1].chars().count() != 1 {
        eprintln!("Erreur: format de commande store invalide");
        return;
    }

    match session.stocker(mots[1]) {
        Ok(()) => println!("Valeur {} stockée.", mots[1]),
        Err(e) => eprintln!("Erreur: {e}"),
    }
}

/* ------------------------ Contrôle de plausibilité ------------------------ */

/// Refuse d'emblée deux nombres ou deux opérateurs consécutifs, avant même
/// l'analyse (resserre aussi la bizarrerie des jetons en trop ignorés :
/// "2 + 3 4" est refusé ici au lieu de valoir 5 en silence).
fn expression_plausible(entree: &str) -> bool {
    let mots: Vec<&str> = entree.split_whitespace().collect();
    for paire in mots.windows(2) {
        let (courant, suivant) = (paire[0], paire[1]);
        if (est_nombre(courant) && est_nombre(suivant))
            || (est_operateur(courant) && est_operateur(suivant))
        {
            return false;
        }
    }
    true
}

/// -?\d+(/\d+)?
fn est_nombre(mot: &str) -> bool {
    let reste = mot.strip_prefix('-').unwrap_or(mot);
    match reste.split_once('/') {
        Some((haut, bas)) => chiffres(haut) && chiffres(bas),
        None => chiffres(reste),
    }
}

fn chiffres(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn est_operateur(mot: &str) -> bool {
    matches!(mot, "+" | "-" | "*" | "/")
}
