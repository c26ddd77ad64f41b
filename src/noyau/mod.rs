//! Noyau de la calculatrice (sans interface)
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (moins unaire contextuel)
//! - rpn.rs        : shunting-yard + évaluation de la RPN (NaN = poison)
//! - eval.rs       : pipeline complet + formatage du résultat ("Error")
//! - tampon.rs     : règles de saisie et commandes sur le tampon
//! - historique.rs : historique borné (plus récent en tête)
//! - affichage.rs  : glyphes d’opérateurs + séparateur décimal
//! - session.rs    : tampon + historique réunis, surface vue par l’UI

pub mod affichage;
pub mod eval;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod session;
pub mod tampon;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use affichage::Separateur;
pub use eval::{evaluate_expression, evaluer_commit, to_result_string, ErreurEvaluation};
pub use historique::{EntreeHistorique, Historique};
pub use session::Session;
pub use tampon::{Commande, CommandeInconnue};
