//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Aucune évaluation ici : vue.rs passe par requete.rs puis dépose le résultat.

use crate::noyau::{format::formater_valeur, Resultat};

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    /// Sortie de la conversion en langage naturel.
    pub conversion: String,
    /// Texte réellement parsé (après liste blanche).
    pub filtree: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,   // valeur formatée
    pub expression: String, // candidat retenu (converti ou brut)
    pub erreur: String,     // kind de l’erreur (si la requête échoue)
    pub detail: String,     // raison lisible

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            expression: String::new(),
            erreur: String::new(),
            detail: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.expression.clear();
        self.erreur.clear();
        self.detail.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute ;
    /// la démarche, elle, ne correspond plus à rien.
    pub fn set_erreur(&mut self, kind: &str, detail: impl Into<String>) {
        self.erreur = kind.to_string();
        self.detail = detail.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet du noyau (valeur formatée + démarche).
    pub fn set_resultats(&mut self, r: Resultat) {
        self.erreur.clear();
        self.detail.clear();
        self.resultat = formater_valeur(r.valeur);
        self.demarche = Demarche {
            conversion: r.conversion,
            filtree: r.filtree,
            jetons: r.demarche.jetons,
            rpn: r.demarche.rpn,
            arbre: r.demarche.arbre,
        };
        self.expression = r.expression;
        self.focus_entree = true;
    }
}
