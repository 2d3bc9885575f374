// src/noyau/format.rs
//
// Affichage d’un résultat numérique :
// - entiers "raisonnables" sans partie décimale (5, -12)
// - très grands / très petits en notation scientifique (1e20, 2.5e-7)
// - sinon : Display de Rust (plus courte écriture qui relit la même valeur)

/// Au-delà : notation scientifique.
const SEUIL_SCIENTIFIQUE_HAUT: f64 = 1e16;
/// En deçà (hors zéro) : notation scientifique.
const SEUIL_SCIENTIFIQUE_BAS: f64 = 1e-6;

pub fn formater_valeur(v: f64) -> String {
    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if a >= SEUIL_SCIENTIFIQUE_HAUT || a < SEUIL_SCIENTIFIQUE_BAS {
        return format!("{v:e}");
    }
    format!("{v}")
}
