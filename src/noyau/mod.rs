//! Noyau exact de la calculatrice à fractions
//!
//! Organisation interne :
//! - erreurs.rs  : taxonomie d'erreurs (une seule enum + Display)
//! - fraction.rs : fraction exacte, toujours réduite, dénominateur > 0
//! - jetons.rs   : découpe sur les blancs + classement des jetons
//! - analyse.rs  : descente récursive (deux niveaux de précédence)
//! - session.rs  : dernier résultat + registres (frontière evaluer/stocker)

pub mod analyse;
pub mod erreurs;
pub mod fraction;
pub mod jetons;
pub mod session;

#[cfg(test)]
mod tests_calculatrice;

// API publique minimale
pub use erreurs::Erreur;
pub use fraction::Fraction;
pub use session::Session;
