//! Noyau : texte (symbolique ou anglais) -> nombre, sans jamais exécuter de code.
//!
//! Organisation interne :
//! - mots.rs      : nombres en toutes lettres -> chiffres
//! - phrases.rs   : phrases ("add A and B", "A percent of B", ...) -> expression
//! - filtre.rs    : liste blanche de caractères + '^' -> '**'
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + construction Expr (grammaire fermée, profondeur bornée)
//! - expr.rs      : AST arithmétique + évaluation
//! - eval.rs      : évaluation sandboxée + validation du résultat
//! - pipeline.rs  : candidat converti, puis texte brut
//! - format.rs    : affichage du résultat
//! - erreur.rs    : erreurs classées

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod filtre;
pub mod format;
pub mod jetons;
pub mod mots;
pub mod phrases;
pub mod pipeline;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

pub use erreur::{EchecPipeline, ErreurEval};
pub use pipeline::Resultat;

/// Conversion langage naturel -> expression (introspection / tests). Totale.
pub fn convert_natural_language(text: &str) -> String {
    phrases::convertir(text)
}

/// Point d’entrée unique du gestionnaire de requêtes.
pub fn evaluate(raw_text: &str) -> Result<Resultat, EchecPipeline> {
    pipeline::executer(raw_text)
}
