//! Noyau — pipeline complet (texte brut -> nombre).
//!
//! phrases -> candidat -> filtre -> évaluation
//!   puis, si échec : texte brut -> filtre -> évaluation
//!
//! L’ordre est fixe : le candidat converti d’abord (langage naturel),
//! le texte brut ensuite (symbolique que la conversion aurait abîmé).
//! Seule l’erreur de la DERNIÈRE tentative est remontée.

use super::erreur::{EchecPipeline, ErreurEval};
use super::eval::{evaluer_detaille, DemarcheNoyau};
use super::filtre::filtrer;
use super::phrases;

#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    pub valeur: f64,
    /// Candidat qui a réussi (converti ou brut).
    pub expression: String,
    /// Sortie de la conversion en langage naturel (même en cas de repli sur le brut).
    pub conversion: String,
    /// Texte réellement parsé (après filtre).
    pub filtree: String,
    pub demarche: DemarcheNoyau,
}

/// Une tentative : filtre + évaluation d’un candidat.
fn tenter(candidat: &str) -> Result<(f64, String, DemarcheNoyau), ErreurEval> {
    let filtree = filtrer(candidat);
    match evaluer_detaille(&filtree) {
        Ok((v, d)) => {
            log::debug!("évaluation ok : {candidat:?} (filtré {filtree:?}) = {v}");
            Ok((v, filtree, d))
        }
        Err(e) => {
            log::info!("échec d’évaluation : expr={candidat:?} filtrée={filtree:?} : {e}");
            Err(e)
        }
    }
}

/// Exécute le pipeline sur le texte brut de l’utilisateur.
pub fn executer(brut: &str) -> Result<Resultat, EchecPipeline> {
    let conversion = phrases::convertir(brut);

    let mut derniere = None;
    for candidat in [conversion.as_str(), brut] {
        match tenter(candidat) {
            Ok((valeur, filtree, demarche)) => {
                return Ok(Resultat {
                    valeur,
                    expression: candidat.to_string(),
                    conversion: conversion.clone(),
                    filtree,
                    demarche,
                })
            }
            Err(e) => derniere = Some(e),
        }
    }

    Err(EchecPipeline {
        derniere: derniere.unwrap_or_else(|| ErreurEval::syntaxe("aucun candidat")),
    })
}
