//! Tests de bout en bout : scénarios complets evaluer/stocker,
//! comme un frontal les enchaînerait.

use super::{Erreur, Fraction, Session};

fn evalue(session: &mut Session, texte: &str) -> String {
    session
        .evaluer(texte)
        .unwrap_or_else(|e| panic!("evaluer({texte:?}) en erreur: {e}"))
        .to_string()
}

#[test]
fn seance_de_calcul_typique() {
    let mut s = Session::new();

    assert_eq!(evalue(&mut s, "1/2 + 1/3"), "5/6");
    s.stocker("a").unwrap();

    assert_eq!(evalue(&mut s, "a * 6/5"), "1");
    s.stocker("b").unwrap();

    // a et b coexistent, b vient du résultat précédent
    assert_eq!(evalue(&mut s, "a + b"), "11/6");
}

#[test]
fn mode_direct_comme_quick() {
    // même enchaînement que des arguments de ligne de commande :
    //   "1/2 * 3" "STOREx" "x + 1/2"
    let mut s = Session::new();
    assert_eq!(evalue(&mut s, "1/2 * 3"), "3/2");
    s.stocker("STOREx").unwrap();
    assert_eq!(evalue(&mut s, "x + 1/2"), "2");
}

#[test]
fn une_erreur_ne_casse_pas_la_seance() {
    let mut s = Session::new();
    assert_eq!(evalue(&mut s, "2 + 2"), "4");

    assert!(s.evaluer("2 + + 2").is_err());
    assert_eq!(s.evaluer("1 / 0").unwrap_err(), Erreur::DivisionParZero);

    // la séance continue, l'état est intact
    s.stocker("r").unwrap();
    assert_eq!(evalue(&mut s, "r"), "4");
}

#[test]
fn precedence_et_reduction_combinees() {
    let mut s = Session::new();
    // 1/2 + 1/2 * 2 = 1/2 + 1 = 3/2 (précédence), puis réduction exacte
    assert_eq!(evalue(&mut s, "1/2 + 1/2 * 2"), "3/2");
    assert_eq!(evalue(&mut s, "2/4 + 2/4"), "1");
}

#[test]
fn grands_nombres_de_bout_en_bout() {
    let mut s = Session::new();
    let v = evalue(
        &mut s,
        "123456789123456789123456789 * 987654321987654321 + 1",
    );
    assert_eq!(v, "121932631356500531469135800347203169112635270");
}

#[test]
fn affichage_canonique_en_sortie() {
    let mut s = Session::new();
    // entier sans barre, zéro nu
    assert_eq!(evalue(&mut s, "4/2"), "2");
    assert_eq!(evalue(&mut s, "1/2 - 1/2"), "0");
    // approximation flottante disponible pour l'affichage secondaire
    let f = Fraction::lire("1/4").unwrap();
    assert!((f.approx_f64() - 0.25).abs() < 1e-12);
}
