// src/noyau/mots.rs
//
// Nombres en toutes lettres (anglais) -> chiffres.
// - "two hundred"      => "200"
// - "twenty-one"       => "21"
// - "one hundred five" => "100 5"   (pas de combinaison entre échelles, voulu)
//
// Balayage glouton en une passe : les mots non numériques passent tels quels
// (opérateurs, ponctuation, autres mots) pour les étapes suivantes.

use num_bigint::BigInt;

/* ------------------------ Tables (lecture seule) ------------------------ */

const UNITES: &[(&str, u32)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const DIZAINES: &[(&str, u32)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const MULTIPLICATEURS: &[(&str, u32)] = &[("hundred", 100), ("thousand", 1000)];

fn chercher(table: &[(&str, u32)], mot: &str) -> Option<u32> {
    table.iter().find(|(nom, _)| *nom == mot).map(|(_, v)| *v)
}

/// "twenty-one" -> "twenty one", mais "5 - 3" et "-4" restent intacts.
fn normaliser_traits_d_union(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        let entre_lettres = c == '-'
            && i > 0
            && i + 1 < chars.len()
            && chars[i - 1].is_alphabetic()
            && chars[i + 1].is_alphabetic();

        out.push(if entre_lettres { ' ' } else { c });
    }
    out
}

/// Convertit les suites de mots-nombres en chiffres, laisse le reste intact.
/// Totale et idempotente : un numéral déjà présent passe tel quel.
pub fn convertir(texte: &str) -> String {
    let bas = normaliser_traits_d_union(&texte.to_lowercase());
    let mots: Vec<&str> = bas.split_whitespace().collect();

    let mut out: Vec<String> = Vec::with_capacity(mots.len());
    let mut i = 0;

    while i < mots.len() {
        let mot = mots[i];

        let depart = if let Some(v) = chercher(UNITES, mot) {
            i += 1;
            Some(BigInt::from(v))
        } else if let Some(v) = chercher(DIZAINES, mot) {
            i += 1;
            let mut n = BigInt::from(v);
            if let Some(u) = mots.get(i).and_then(|m| chercher(UNITES, m)) {
                n += u;
                i += 1;
            }
            Some(n)
        } else {
            None
        };

        match depart {
            Some(mut n) => {
                // "hundred" / "thousand" se composent : "five hundred thousand" => 500000
                while let Some(m) = mots.get(i).and_then(|m| chercher(MULTIPLICATEURS, m)) {
                    n *= m;
                    i += 1;
                }
                out.push(n.to_string());
            }
            None => {
                // numéral déjà écrit ou mot quelconque : inchangé
                out.push(mot.to_string());
                i += 1;
            }
        }
    }

    out.join(" ")
}
