// src/cli.rs
//
// Frontaux console — glue d'entrées/sorties, zéro logique de calcul.
// Tout passe par la session du noyau (evaluer/stocker) :
// - rapide.rs     : mode direct, les expressions viennent des arguments
// - interactif.rs : boucle de lecture (commandes store/quit)

pub mod interactif;
pub mod rapide;
