//! Noyau — évaluation sandboxée d’une expression DÉJÀ filtrée.
//!
//! tokenize -> RPN (validation + refus hors grammaire) -> Expr -> évaluation -> validation
//!
//! Validation finale (filet indépendant des contrôles par opération) :
//! - fini (ni NaN ni ±∞)
//! - |x| <= MAGNITUDE_MAX

use super::erreur::{ErreurEval, ResultatEval};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{format_rpn, from_rpn, to_rpn};

/// Plafond de magnitude d’un résultat valide.
pub const MAGNITUDE_MAX: f64 = 1e308;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// Évalue une expression filtrée.
pub fn evaluer(expr_str: &str) -> ResultatEval<f64> {
    evaluer_detaille(expr_str).map(|(v, _)| v)
}

/// Comme `evaluer`, avec la démarche (jetons, RPN, arbre) pour l’affichage.
pub fn evaluer_detaille(expr_str: &str) -> ResultatEval<(f64, DemarcheNoyau)> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;

    // 2) RPN (syntaxe + grammaire fermée)
    let rpn = to_rpn(&jetons)?;

    // 3) AST (profondeur bornée)
    let arbre = from_rpn(&rpn)?;

    // 4) Évaluation puis validation
    let v = valider(arbre.evaluer()?)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        arbre: arbre.to_string(),
    };
    Ok((v, d))
}

fn valider(v: f64) -> ResultatEval<f64> {
    if !v.is_finite() {
        return Err(ErreurEval::NonFini);
    }
    if v.abs() > MAGNITUDE_MAX {
        return Err(ErreurEval::Magnitude);
    }
    Ok(v)
}
