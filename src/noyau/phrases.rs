// src/noyau/phrases.rs
//
// Langage naturel (anglais) -> expression symbolique.
//
// Ordre FIXE (la première règle qui correspond gagne) :
//   0) mots-opérateurs : plus, minus, times, x, multiplied by, ... -> + - * /
//   1) "square root of N"        -> (N)**0.5
//   2) "A percent of B"          -> (A/100)*(B)
//   3) "add A and B" / "add A, B"-> A + B
//   4) "subtract A from B"       -> B - A        (ordre inversé)
//   5) "multiply A by|and B"     -> A * B
//   6) "divide A by B"           -> A / B
//   7) repli : nombres en lettres sur tout le texte, puis mots-opérateurs encore
//
// Chaque capture passe par mots::convertir avant d’être insérée.
// Totale : ne renvoie jamais d’erreur (le filtre + le parseur trancheront).

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::mots;

/* ------------------------ Mots-opérateurs ------------------------ */

/// (nom, motif, symbole), appliqués dans cet ordre.
const MOTS_OPERATEURS: &[(&str, &str, &str)] = &[
    ("plus", r"plus", "+"),
    ("minus", r"minus", "-"),
    ("times", r"times", "*"),
    ("x", r"x", "*"),
    ("multiplied by", r"multiplied\s+by", "*"),
    ("multiply by", r"multiply\s+by", "*"),
    ("divide by", r"divide\s+by", "/"),
    ("divided by", r"divided\s+by", "/"),
    ("over", r"over", "/"),
];

/// Sous-ensemble ré-appliqué après la conversion des nombres (repli).
const MOTS_SECOND_PASSAGE: &[&str] = &["plus", "minus", "times", "x", "over"];

struct MotOperateur {
    nom: &'static str,
    motif: Regex,
    symbole: &'static str,
}

fn mots_operateurs() -> &'static [MotOperateur] {
    static TABLE: OnceLock<Vec<MotOperateur>> = OnceLock::new();
    TABLE.get_or_init(|| {
        MOTS_OPERATEURS
            .iter()
            .map(|&(nom, motif, symbole)| MotOperateur {
                nom,
                motif: Regex::new(motif).expect("motif d’opérateur valide"),
                symbole,
            })
            .collect()
    })
}

/// Remplace `motif` seulement s’il forme un mot entier :
/// pas de lettre juste avant ni juste après ("six" garde son x, "5x3" non).
fn remplacer_mot_entier(texte: &str, motif: &Regex, symbole: &str) -> String {
    let mut out = String::with_capacity(texte.len());
    let mut dernier = 0;

    for m in motif.find_iter(texte) {
        let avant = texte[..m.start()].chars().next_back();
        let apres = texte[m.end()..].chars().next();
        let colle = avant.is_some_and(char::is_alphabetic) || apres.is_some_and(char::is_alphabetic);
        if colle {
            continue;
        }
        out.push_str(&texte[dernier..m.start()]);
        out.push_str(symbole);
        dernier = m.end();
    }

    out.push_str(&texte[dernier..]);
    out
}

fn substituer_operateurs(texte: &str, noms: Option<&[&str]>) -> String {
    let mut t = texte.to_string();
    for op in mots_operateurs() {
        if noms.is_some_and(|n| !n.contains(&op.nom)) {
            continue;
        }
        t = remplacer_mot_entier(&t, &op.motif, op.symbole);
    }
    t
}

/* ------------------------ Phrases structurées ------------------------ */

struct Regle {
    nom: &'static str,
    motif: Regex,
    produire: fn(&Captures) -> String,
}

/// Capture `i` convertie en chiffres (vide si absente).
fn nombre(c: &Captures, i: usize) -> String {
    c.get(i).map_or_else(String::new, |m| mots::convertir(m.as_str()))
}

fn regle(nom: &'static str, motif: &str, produire: fn(&Captures) -> String) -> Regle {
    Regle {
        nom,
        motif: Regex::new(motif).expect("motif de phrase valide"),
        produire,
    }
}

fn regles() -> &'static [Regle] {
    static TABLE: OnceLock<Vec<Regle>> = OnceLock::new();
    TABLE.get_or_init(|| {
        vec![
            regle(
                "square root",
                r"\bsquare\s+root\s+of\s+([\w\s-]+)",
                |c| format!("({})**0.5", nombre(c, 1)),
            ),
            regle(
                "percent",
                r"([\w\s-]+)\s+percent\s+of\s+([\w\s-]+)",
                |c| format!("({}/100)*({})", nombre(c, 1), nombre(c, 2)),
            ),
            regle(
                "add",
                r"\badd\s+([\w\s-]+)(?:\s+and\b|\s*,)\s*([\w\s-]+)",
                |c| format!("{} + {}", nombre(c, 1), nombre(c, 2)),
            ),
            regle(
                "subtract",
                r"\bsubtract\s+([\w\s-]+)\s+from\s+([\w\s-]+)",
                |c| format!("{} - {}", nombre(c, 2), nombre(c, 1)),
            ),
            regle(
                "multiply",
                r"\bmultiply\s+([\w\s-]+)\s+(?:and|by)\b\s*([\w\s-]+)",
                |c| format!("{} * {}", nombre(c, 1), nombre(c, 2)),
            ),
            regle(
                "divide",
                r"\bdivide\s+([\w\s-]+)\s+by\s+([\w\s-]+)",
                |c| format!("{} / {}", nombre(c, 1), nombre(c, 2)),
            ),
        ]
    })
}

/// Convertit une phrase en expression symbolique (jamais d’échec).
pub fn convertir(texte: &str) -> String {
    let t = substituer_operateurs(texte.to_lowercase().trim(), None).replace('^', "**");

    for r in regles() {
        if let Some(c) = r.motif.captures(&t) {
            let out = (r.produire)(&c);
            log::debug!("phrase {:?} -> {:?} (règle {})", texte, out, r.nom);
            return out;
        }
    }

    let out = substituer_operateurs(&mots::convertir(&t), Some(MOTS_SECOND_PASSAGE));
    log::debug!("phrase {:?} -> {:?} (repli)", texte, out);
    out
}
