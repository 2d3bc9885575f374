// src/noyau/filtre.rs
//
// Première ligne de défense : liste blanche de caractères.
// Aucune lettre, guillemet, crochet ou caractère de contrôle ne survit.

/// Caractères autorisés : chiffres, point, opérateurs, parenthèses, espaces, '^'.
fn est_autorise(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(c, '.' | '+' | '-' | '*' | '/' | '%' | '(' | ')' | '^')
        || c.is_whitespace()
}

/// Filtre `texte` puis remplace chaque '^' par "**". Totale.
pub fn filtrer(texte: &str) -> String {
    let garde: String = texte.chars().filter(|&c| est_autorise(c)).collect();
    garde.replace('^', "**")
}
