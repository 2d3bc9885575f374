//! Noyau — erreurs classées.
//!
//! Chaque étape échoue vite avec la PREMIÈRE erreur rencontrée.
//! `kind()` donne le nom stable (affiché / testé), `Display` le message humain.

use thiserror::Error;

/// Résultat d’une étape du noyau.
pub type ResultatEval<T> = Result<T, ErreurEval>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEval {
    /// Texte filtré qui n’est pas une expression arithmétique valide.
    #[error("expression invalide : {0}")]
    Syntaxe(String),

    /// Construction reconnue mais hors grammaire (identifiant, appel, tuple vide).
    #[error("expression non supportée : {0}")]
    NonSupportee(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Le résultat ne serait pas un réel (ex: base négative, exposant fractionnaire).
    #[error("résultat non réel")]
    NonNumerique,

    #[error("résultat non fini")]
    NonFini,

    #[error("magnitude du résultat trop grande")]
    Magnitude,

    /// Garde-fou profondeur (parenthèses / arbre).
    #[error("expression trop complexe : {0}")]
    TropComplexe(String),
}

impl ErreurEval {
    pub fn kind(&self) -> &'static str {
        match self {
            ErreurEval::Syntaxe(_) => "ParseError",
            ErreurEval::NonSupportee(_) => "UnsupportedExpression",
            ErreurEval::DivisionParZero => "DivisionByZero",
            ErreurEval::NonNumerique => "NonNumericResult",
            ErreurEval::NonFini => "NonFiniteResult",
            ErreurEval::Magnitude => "MagnitudeOverflow",
            ErreurEval::TropComplexe(_) => "TooComplex",
        }
    }

    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurEval::Syntaxe(msg.into())
    }

    pub(crate) fn non_supportee(msg: impl Into<String>) -> Self {
        ErreurEval::NonSupportee(msg.into())
    }
}

/// Échec agrégé du pipeline : seule la DERNIÈRE tentative (texte brut) est remontée.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("impossible d’évaluer l’expression")]
pub struct EchecPipeline {
    #[source]
    pub derniere: ErreurEval,
}

impl EchecPipeline {
    pub fn kind(&self) -> &'static str {
        self.derniere.kind()
    }

    pub fn detail(&self) -> String {
        self.derniere.to_string()
    }
}
