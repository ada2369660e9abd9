// src/main.rs
//
// Calculatrice exacte à fractions — point d'entrée
// ------------------------------------------------
// Deux modes, même noyau :
// - des expressions en arguments => mode direct (une passe, puis fin)
// - aucun argument               => mode interactif (boucle de lecture)
// Ici : dispatch seulement, la logique vit dans cli/ et noyau/.

use std::io;

use clap::Parser;

use calculatrice_fractions::cli;

/// Calculatrice exacte à fractions avec registres à une lettre.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Expressions à évaluer en mode direct (ex. '1/2 + 1/3' 'STOREa' 'a * 2') ;
    /// sans argument, la calculatrice passe en mode interactif.
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.expressions.is_empty() {
        cli::interactif::lancer()
    } else {
        cli::rapide::lancer(&args.expressions);
        Ok(())
    }
}
