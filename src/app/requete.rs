//! src/app/requete.rs
//!
//! Gestionnaire de requêtes : garde-fous côté appelant, puis noyau.
//!
//! - texte vide : refusé sans appeler le noyau
//! - texte trop long (en caractères) : refusé sans appeler le noyau
//! - sinon : `noyau::evaluate` (espaces seuls compris, le noyau répond ParseError)

use thiserror::Error;

use crate::noyau::{self, EchecPipeline, Resultat};

/// Longueur maximale acceptée (en `char`, pas en octets).
pub const LONGUEUR_MAX_ENTREE: usize = 300;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurRequete {
    #[error("aucune expression fournie")]
    AucuneExpression,

    #[error("entrée trop longue : {longueur} caractères (max {max})")]
    TropLongue { longueur: usize, max: usize },

    #[error(transparent)]
    Evaluation(#[from] EchecPipeline),
}

impl ErreurRequete {
    pub fn kind(&self) -> &'static str {
        match self {
            ErreurRequete::AucuneExpression => "NoExpressionProvided",
            ErreurRequete::TropLongue { .. } => "InputTooLong",
            ErreurRequete::Evaluation(e) => e.kind(),
        }
    }

    /// Raison lisible (pour l’évaluation : celle de la dernière tentative).
    pub fn detail(&self) -> String {
        match self {
            ErreurRequete::Evaluation(e) => e.detail(),
            autre => autre.to_string(),
        }
    }
}

pub fn traiter(texte: &str) -> Result<Resultat, ErreurRequete> {
    if texte.is_empty() {
        log::info!("requête refusée : aucune expression");
        return Err(ErreurRequete::AucuneExpression);
    }

    let longueur = texte.chars().count();
    if longueur > LONGUEUR_MAX_ENTREE {
        log::info!("requête refusée : {longueur} caractères");
        return Err(ErreurRequete::TropLongue {
            longueur,
            max: LONGUEUR_MAX_ENTREE,
        });
    }

    let r = noyau::evaluate(texte)?;
    log::debug!("requête {texte:?} -> {} via {:?}", r.valeur, r.expression);
    Ok(r)
}
