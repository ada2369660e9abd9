//! Calculatrice exacte à fractions avec registres à une lettre.
//!
//! Pipeline d'une ligne d'entrée :
//!
//! ```text
//! texte → jetons (classés) → descente récursive → Fraction exacte
//! ```
//!
//! - [`noyau`] — le cœur : [`noyau::Fraction`] (précision arbitraire,
//!   toujours réduite), l'analyseur, et la [`noyau::Session`] qui porte le
//!   dernier résultat et les registres. C'est la seule surface que les
//!   frontaux consomment : `evaluer(texte)` et `stocker(sélecteur)`.
//! - [`cli`] — glue console (mode direct et mode interactif), sans logique
//!   de calcul.

pub mod cli;
pub mod noyau;
