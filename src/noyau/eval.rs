//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile f64 -> (formatage) texte
//!
//! Remarque : la prévisualisation et le “=” passent tous deux par
//! `evaluate_expression`, donc mêmes règles des deux côtés.

use thiserror::Error;
use tracing::trace;

use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, to_rpn};

/// Sentinelle affichée pour un résultat non fini.
pub const ERREUR: &str = "Error";

/// Nombre de décimales gardées au formatage (anti-bruit flottant).
const DECIMALES: usize = 12;

/// Seule erreur d’évaluation : le résultat n’est pas un nombre fini
/// (division par zéro, opérande manquant, littéral invalide).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEvaluation {
    #[error("résultat non fini pour {expression:?}")]
    NonFini { expression: String },
}

/// API publique : évalue une expression brute.
///
/// Zéro jeton => 0 (entrée vide ou totalement invalide).
/// Sinon la valeur peut être NaN : c’est au formatage de la convertir.
pub fn evaluate_expression(s: &str) -> f64 {
    // 1) Jetons
    let jetons = tokenize(s);
    if jetons.is_empty() {
        return 0.0;
    }

    // 2) RPN
    let rpn = to_rpn(&jetons);
    trace!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "pipeline"
    );

    // 3) Pile
    evaluer_rpn(&rpn)
}

/// Arrondit à 12 décimales ; -0 devient 0.
pub fn arrondir(x: f64) -> f64 {
    let r = format!("{:.*}", DECIMALES, x).parse::<f64>().unwrap_or(x);
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Texte du résultat : "Error" si non fini, sinon valeur arrondie.
pub fn to_result_string(x: f64) -> String {
    if !x.is_finite() {
        return ERREUR.to_string();
    }
    arrondir(x).to_string()
}

/// Forme typée du pipeline, utilisée pour “=” et le mode sans fenêtre.
pub fn evaluer_commit(s: &str) -> Result<String, ErreurEvaluation> {
    let v = evaluate_expression(s);
    if v.is_finite() {
        Ok(to_result_string(v))
    } else {
        Err(ErreurEvaluation::NonFini {
            expression: s.to_string(),
        })
    }
}
