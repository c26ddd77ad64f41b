//! src/config.rs
//!
//! Configuration (ligne de commande, natif) : séparateur décimal, capacité
//! d’historique, filtre de journal, évaluations sans fenêtre.
//!
//! En wasm32 on part de `Config::default()`.

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};

use crate::noyau::historique::{HISTORIQUE_DEFAUT, HISTORIQUE_MAX};
use crate::noyau::Separateur;

/// Filtre tracing par défaut (écrasé par RUST_LOG).
pub const LOG_DEFAUT: &str = "warn";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SeparateurArg {
    #[default]
    Point,
    Virgule,
}

impl From<SeparateurArg> for Separateur {
    fn from(s: SeparateurArg) -> Self {
        match s {
            SeparateurArg::Point => Separateur::Point,
            SeparateurArg::Virgule => Separateur::Virgule,
        }
    }
}

/// Calculatrice clavier : saisie touche par touche, aperçu en direct, historique.
#[derive(Debug, Parser)]
#[command(name = "calculatrice", version, about)]
pub struct Args {
    /// Séparateur décimal à l’affichage
    #[arg(long, value_enum, default_value_t = SeparateurArg::Point)]
    pub separateur: SeparateurArg,

    /// Nombre de calculs gardés dans l’historique
    #[arg(
        long,
        default_value_t = HISTORIQUE_DEFAUT,
        value_parser = clap::value_parser!(u16).range(1..=HISTORIQUE_MAX as i64).map(usize::from)
    )]
    pub historique: usize,

    /// Filtre de journal par défaut (si RUST_LOG est absent)
    #[arg(long, default_value = LOG_DEFAUT)]
    pub log: String,

    /// Évalue l’expression et l’affiche sans ouvrir de fenêtre (répétable)
    #[arg(long = "eval", value_name = "EXPR")]
    pub evals: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub separateur: Separateur,
    pub capacite_historique: usize,
    pub log: String,
    pub evals: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separateur: Separateur::Point,
            capacite_historique: HISTORIQUE_DEFAUT,
            log: LOG_DEFAUT.to_string(),
            evals: Vec::new(),
        }
    }
}

impl From<Args> for Config {
    fn from(a: Args) -> Self {
        Self {
            separateur: a.separateur.into(),
            capacite_historique: a.historique,
            log: a.log,
            evals: a.evals,
        }
    }
}

impl Config {
    /// Mode sans fenêtre : au moins une `--eval`.
    pub fn sans_fenetre(&self) -> bool {
        !self.evals.is_empty()
    }
}
