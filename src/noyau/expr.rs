// src/noyau/expr.rs
//
// AST arithmétique fermé (flottants).
// - Nombre : littéral
// - Binaire : + - * / % // **
// - Unaire  : négation, identité
//
// IMPORTANT (SAFE):
// - Aucune autre forme n’est représentable : pas d’identifiant, pas d’appel.
//   Le refus se fait AVANT, lors de la construction (rpn.rs).
// - evaluer() échoue au premier problème, jamais de valeur partielle.

use std::fmt;

use super::erreur::{ErreurEval, ResultatEval};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    DivEntiere,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Neg,
    Pos,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
    Unaire(OpUnaire, Box<Expr>),
}

impl OpBinaire {
    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Add => "+",
            OpBinaire::Sub => "-",
            OpBinaire::Mul => "*",
            OpBinaire::Div => "/",
            OpBinaire::Mod => "%",
            OpBinaire::DivEntiere => "//",
            OpBinaire::Pow => "**",
        }
    }
}

impl OpUnaire {
    pub fn symbole(self) -> &'static str {
        match self {
            OpUnaire::Neg => "neg",
            OpUnaire::Pos => "pos",
        }
    }
}

impl Expr {
    /// Évalue l’arbre (récursif : la profondeur est bornée à la construction).
    pub fn evaluer(&self) -> ResultatEval<f64> {
        match self {
            Expr::Nombre(v) => Ok(*v),
            Expr::Unaire(op, x) => {
                let v = x.evaluer()?;
                Ok(match op {
                    OpUnaire::Neg => -v,
                    OpUnaire::Pos => v,
                })
            }
            Expr::Binaire(op, a, b) => {
                let a = a.evaluer()?;
                let b = b.evaluer()?;
                appliquer(*op, a, b)
            }
        }
    }
}

fn appliquer(op: OpBinaire, a: f64, b: f64) -> ResultatEval<f64> {
    use OpBinaire::*;

    let r = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            a / b
        }
        Mod => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            modulo_plancher(a, b)
        }
        DivEntiere => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            division_plancher(a, b)
        }
        Pow => puissance(a, b)?,
    };

    // Opérandes finis (garanti en amont) + résultat infini => débordement
    if r.is_infinite() {
        return Err(ErreurEval::Magnitude);
    }
    Ok(r)
}

fn puissance(base: f64, exp: f64) -> ResultatEval<f64> {
    if base == 0.0 && exp < 0.0 {
        return Err(ErreurEval::DivisionParZero);
    }
    // (-8)**0.5 serait complexe
    if base < 0.0 && exp.fract() != 0.0 {
        return Err(ErreurEval::NonNumerique);
    }
    // racine carrée : arrondi exact (16**0.5 == 4)
    if exp == 0.5 {
        return Ok(base.sqrt());
    }
    Ok(base.powf(exp))
}

/// Reste "plancher" : le signe suit le diviseur (-7 % 3 == 2).
fn modulo_plancher(a: f64, b: f64) -> f64 {
    let m = a % b;
    if m == 0.0 {
        // zéro signé comme le diviseur
        0.0_f64.copysign(b)
    } else if (b < 0.0) != (m < 0.0) {
        m + b
    } else {
        m
    }
}

/// Quotient "plancher" cohérent avec modulo_plancher : a == b*q + r.
fn division_plancher(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut q = (a - m) / b;
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        q -= 1.0;
    }
    if q == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    // (a - m) / b est entier à l’arrondi près : on recale
    let f = q.floor();
    if q - f > 0.5 {
        f + 1.0
    } else {
        f
    }
}

/* ------------------------ Affichage (démarche) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nombre(v) => write!(f, "{v}"),
            Expr::Unaire(OpUnaire::Neg, x) => write!(f, "-({x})"),
            Expr::Unaire(OpUnaire::Pos, x) => write!(f, "+({x})"),
            Expr::Binaire(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
        }
    }
}
