//! Calculatrice clavier — bibliothèque
//!
//! - noyau  : tampon d’expression, tokenisation, RPN, évaluation, historique
//! - config : options en ligne de commande
//!
//! L’interface egui (src/app) n’est qu’un client de `noyau::Session`.

pub mod config;
pub mod noyau;
