// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - opérateurs binaires uniquement, associatifs à gauche
// - pas de parenthèses
// - NaN = valeur “poison” : elle traverse le calcul et devient "Error" au formatage

use tracing::debug;

use super::jetons::{Operateur, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Fois, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Fois, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operateur> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok.clone()),

            Tok::Op(op) => {
                // égalité de précédence => on dépile (associativité à gauche)
                while let Some(top) = ops.last().copied() {
                    if top.precedence() >= op.precedence() {
                        out.push(Tok::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(*op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    out
}

/// Évalue une RPN.
///
/// - opérande manquant => NaN
/// - division par zéro => NaN (pas d’infini)
/// - pile finale différente d’une seule valeur => NaN
pub fn evaluer_rpn(rpn: &[Tok]) -> f64 {
    use Operateur::*;

    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(lit) => st.push(lit.parse::<f64>().unwrap_or(f64::NAN)),

            Tok::Op(op) => {
                let b = st.pop().unwrap_or(f64::NAN);
                let a = st.pop().unwrap_or(f64::NAN);

                if a.is_nan() || b.is_nan() {
                    st.push(f64::NAN);
                    continue;
                }

                let v = match op {
                    Plus => a + b,
                    Moins => a - b,
                    Fois => a * b,
                    Div if b == 0.0 => {
                        debug!(a = a, "division par zéro");
                        f64::NAN
                    }
                    Div => a / b,
                };
                st.push(v);
            }
        }
    }

    match st.as_slice() {
        [v] => *v,
        _ => {
            debug!(pile = st.len(), "pile finale invalide");
            f64::NAN
        }
    }
}
