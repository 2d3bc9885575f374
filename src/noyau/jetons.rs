// src/noyau/jetons.rs

use super::erreur::{ErreurEval, ResultatEval};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Identifiants : reconnus pour être REFUSÉS plus loin (jamais évalués).
    // Le filtre les retire déjà ; ils n’arrivent ici que si on appelle le parseur en direct.
    Ident(String),

    Plus,
    Minus,
    Star,
    StarStar,   // **
    Slash,
    SlashSlash, // //
    Percent,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - * ** / // %
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (pour les refuser proprement)
pub fn tokenize(s: &str) -> ResultatEval<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs à deux caractères d’abord (collés, sans espace)
        let suivant = chars.get(i + 1).copied();
        match (c, suivant) {
            ('*', Some('*')) => {
                out.push(Tok::StarStar);
                i += 2;
                continue;
            }
            ('/', Some('/')) => {
                out.push(Tok::SlashSlash);
                i += 2;
                continue;
            }
            _ => {}
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        // Nombre : chiffres + au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&texte)?));
            continue;
        }

        return Err(ErreurEval::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

fn lire_nombre(texte: &str) -> ResultatEval<f64> {
    if texte.matches('.').count() > 1 || !texte.chars().any(|c| c.is_ascii_digit()) {
        return Err(ErreurEval::syntaxe(format!("nombre invalide: {texte}")));
    }

    // Entier écrit avec des zéros initiaux (ex: 007) : refusé, "00" reste permis
    if !texte.contains('.') && texte.starts_with('0') && texte.chars().any(|c| c != '0') {
        return Err(ErreurEval::syntaxe(format!(
            "zéros initiaux non permis: {texte}"
        )));
    }

    let v: f64 = texte
        .parse()
        .map_err(|_| ErreurEval::syntaxe(format!("nombre invalide: {texte}")))?;

    // Littéral trop long pour un f64
    if v.is_infinite() {
        return Err(ErreurEval::Magnitude);
    }
    Ok(v)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::StarStar => "**".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::SlashSlash => "//".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
