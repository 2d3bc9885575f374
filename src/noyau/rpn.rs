// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe
// - Puis reconstruire Expr (seulement des variantes autorisées)
//
// Règles:
// - Précédences : + -  <  * / // %  <  unaires + -  <  **
// - ** est associatif à droite ; un unaire à droite de ** porte sur l’exposant
//   ("2**-1" = 0.5, "-2**2" = -4)
// - Jetons reconnus mais hors grammaire (identifiant, appel "2(3)", tuple vide "()") :
//   refus UnsupportedExpression, mais seulement si le reste est syntaxiquement valide
//   (une erreur de syntaxe reste une erreur de syntaxe).
//
// Garde-fous : profondeur de parenthèses et profondeur d’arbre bornées.

use super::erreur::{ErreurEval, ResultatEval};
use super::expr::{Expr, OpBinaire, OpUnaire};
use super::jetons::Tok;

/// Au-delà : TooComplex (anti-pile, indépendant de la longueur d’entrée).
pub const PROFONDEUR_MAX_PARENTHESES: usize = 64;
pub const PROFONDEUR_MAX_ARBRE: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementRpn {
    Nombre(f64),
    Binaire(OpBinaire),
    Unaire(OpUnaire),
}

/// Pile d’opérateurs du shunting-yard.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Parenthese,
    Binaire(OpBinaire),
    Unaire(OpUnaire),
}

fn precedence_binaire(op: OpBinaire) -> i32 {
    match op {
        OpBinaire::Add | OpBinaire::Sub => 1,
        OpBinaire::Mul | OpBinaire::Div | OpBinaire::DivEntiere | OpBinaire::Mod => 2,
        OpBinaire::Pow => 4,
    }
}

const PRECEDENCE_UNAIRE: i32 = 3;

fn is_right_associative(op: OpBinaire) -> bool {
    matches!(op, OpBinaire::Pow)
}

fn op_binaire(t: &Tok) -> Option<OpBinaire> {
    match t {
        Tok::Plus => Some(OpBinaire::Add),
        Tok::Minus => Some(OpBinaire::Sub),
        Tok::Star => Some(OpBinaire::Mul),
        Tok::Slash => Some(OpBinaire::Div),
        Tok::SlashSlash => Some(OpBinaire::DivEntiere),
        Tok::Percent => Some(OpBinaire::Mod),
        Tok::StarStar => Some(OpBinaire::Pow),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), StarStar, Num(2)]
///   rpn:    [Nombre(2), Nombre(2), Binaire(Pow), Unaire(Neg)]
pub fn to_rpn(tokens: &[Tok]) -> ResultatEval<Vec<ElementRpn>> {
    let mut out: Vec<ElementRpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // true si le prochain jeton doit être une valeur (début, après opérateur, après '(')
    let mut attend_valeur = true;
    let mut precedent: Option<&Tok> = None;
    let mut profondeur = 0usize;

    // Première construction hors grammaire rencontrée (remontée si la syntaxe est valide)
    let mut hors_grammaire: Option<ErreurEval> = None;

    for tok in tokens {
        match tok {
            Tok::Num(v) => {
                if !attend_valeur {
                    return Err(ErreurEval::syntaxe("deux valeurs consécutives"));
                }
                out.push(ElementRpn::Nombre(*v));
                attend_valeur = false;
            }

            Tok::Ident(name) => {
                if !attend_valeur {
                    return Err(ErreurEval::syntaxe("deux valeurs consécutives"));
                }
                hors_grammaire.get_or_insert_with(|| {
                    ErreurEval::non_supportee(format!("identifiant '{name}'"))
                });
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    // "2(3)" : appel de fonction, syntaxe valide mais interdite
                    hors_grammaire
                        .get_or_insert_with(|| ErreurEval::non_supportee("appel de fonction"));
                }
                profondeur += 1;
                if profondeur > PROFONDEUR_MAX_PARENTHESES {
                    return Err(ErreurEval::TropComplexe(format!(
                        "plus de {PROFONDEUR_MAX_PARENTHESES} parenthèses imbriquées"
                    )));
                }
                ops.push(Pile::Parenthese);
                attend_valeur = true;
            }

            Tok::RPar => {
                if attend_valeur {
                    if matches!(precedent, Some(Tok::LPar)) {
                        // "()" : tuple vide
                        hors_grammaire
                            .get_or_insert_with(|| ErreurEval::non_supportee("tuple vide"));
                    } else {
                        return Err(ErreurEval::syntaxe("opérande manquant avant ')'"));
                    }
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Pile::Parenthese) => break,
                        Some(Pile::Binaire(op)) => out.push(ElementRpn::Binaire(op)),
                        Some(Pile::Unaire(op)) => out.push(ElementRpn::Unaire(op)),
                        None => return Err(ErreurEval::syntaxe("parenthèse fermante en trop")),
                    }
                }
                profondeur -= 1;
                attend_valeur = false;
            }

            _ => {
                let Some(op) = op_binaire(tok) else {
                    return Err(ErreurEval::syntaxe("jeton inattendu"));
                };

                if attend_valeur {
                    // + / - en position de valeur : unaire (préfixe, ne dépile rien)
                    let unaire = match op {
                        OpBinaire::Add => OpUnaire::Pos,
                        OpBinaire::Sub => OpUnaire::Neg,
                        _ => {
                            return Err(ErreurEval::syntaxe(format!(
                                "opérateur '{}' sans opérande à gauche",
                                op.symbole()
                            )))
                        }
                    };
                    ops.push(Pile::Unaire(unaire));
                } else {
                    let p_tok = precedence_binaire(op);

                    // dépile tant que la précédence/associativité l’exige
                    while let Some(&top) = ops.last() {
                        let p_top = match top {
                            Pile::Parenthese => break,
                            Pile::Binaire(b) => precedence_binaire(b),
                            Pile::Unaire(_) => PRECEDENCE_UNAIRE,
                        };

                        let doit_pop = if is_right_associative(op) {
                            p_top > p_tok
                        } else {
                            p_top >= p_tok
                        };
                        if !doit_pop {
                            break;
                        }

                        ops.pop();
                        out.push(match top {
                            Pile::Binaire(b) => ElementRpn::Binaire(b),
                            Pile::Unaire(u) => ElementRpn::Unaire(u),
                            Pile::Parenthese => unreachable!("arrêt plus haut"),
                        });
                    }

                    ops.push(Pile::Binaire(op));
                    attend_valeur = true;
                }
            }
        }
        precedent = Some(tok);
    }

    if attend_valeur {
        return Err(if tokens.is_empty() {
            ErreurEval::syntaxe("expression vide")
        } else {
            ErreurEval::syntaxe("opérande manquant en fin d’expression")
        });
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        match op {
            Pile::Parenthese => return Err(ErreurEval::syntaxe("parenthèses non fermées")),
            Pile::Binaire(b) => out.push(ElementRpn::Binaire(b)),
            Pile::Unaire(u) => out.push(ElementRpn::Unaire(u)),
        }
    }

    match hors_grammaire {
        Some(e) => Err(e),
        None => Ok(out),
    }
}

/// Construit une Expr à partir d’une RPN, en bornant la profondeur d’arbre.
pub fn from_rpn(rpn: &[ElementRpn]) -> ResultatEval<Expr> {
    // (noeud, profondeur)
    let mut st: Vec<(Expr, usize)> = Vec::new();

    for el in rpn {
        let (e, prof) = match *el {
            ElementRpn::Nombre(v) => (Expr::Nombre(v), 1),
            ElementRpn::Unaire(op) => {
                let (x, px) = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                (Expr::Unaire(op, Box::new(x)), px + 1)
            }
            ElementRpn::Binaire(op) => {
                let (b, pb) = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                let (a, pa) = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                (Expr::Binaire(op, Box::new(a), Box::new(b)), pa.max(pb) + 1)
            }
        };

        if prof > PROFONDEUR_MAX_ARBRE {
            return Err(ErreurEval::TropComplexe(format!(
                "arbre plus profond que {PROFONDEUR_MAX_ARBRE}"
            )));
        }
        st.push((e, prof));
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err(ErreurEval::syntaxe("expression invalide")),
    }
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[ElementRpn]) -> String {
    rpn.iter()
        .map(|el| match el {
            ElementRpn::Nombre(v) => format!("{v}"),
            ElementRpn::Binaire(op) => op.symbole().to_string(),
            ElementRpn::Unaire(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
