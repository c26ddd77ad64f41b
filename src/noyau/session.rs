//! src/noyau/session.rs
//!
//! Session de calcul : un tampon + un historique, sans état global.
//!
//! C’est la seule surface vue par l’interface (egui, mode sans fenêtre, tests) :
//! - saisie : `on_input_char`, `on_command`, `on_command_name`
//! - lecture : `display_expression`, `preview_result`, `history`
//!
//! Plusieurs sessions peuvent coexister ; chacune est indépendante.

use tracing::trace;

use super::affichage::{avec_separateur, format_expression, Separateur};
use super::eval::{evaluate_expression, to_result_string};
use super::historique::{EntreeHistorique, Historique};
use super::tampon::{apply_command, apply_input, finit_par_operateur, Commande, CommandeInconnue};

/// Texte de prévisualisation quand le tampon attend une suite.
pub const EN_ATTENTE: &str = "…";

#[derive(Clone, Debug, Default)]
pub struct Session {
    tampon: String,
    historique: Historique,
    separateur: Separateur,
}

impl Session {
    pub fn new(separateur: Separateur, capacite_historique: usize) -> Self {
        Self {
            tampon: String::new(),
            historique: Historique::avec_capacite(capacite_historique),
            separateur,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn on_input_char(&mut self, c: char) {
        self.tampon = apply_input(&self.tampon, c);
        trace!(touche = %c, tampon = %self.tampon, "saisie");
    }

    /// Rend `true` seulement pour un "=" réussi (entrée ajoutée à l’historique).
    pub fn on_command(&mut self, commande: Commande) -> bool {
        let historique = std::mem::take(&mut self.historique);
        let (tampon, historique, commit) = apply_command(&self.tampon, historique, commande);
        self.tampon = tampon;
        self.historique = historique;
        trace!(?commande, tampon = %self.tampon, commit = commit, "commande");
        commit
    }

    /// Variante textuelle : "clear", "delete", "percent", "sign", "equals".
    pub fn on_command_name(&mut self, nom: &str) -> Result<bool, CommandeInconnue> {
        let commande = nom.parse::<Commande>()?;
        Ok(self.on_command(commande))
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn buffer(&self) -> &str {
        &self.tampon
    }

    pub fn display_expression(&self) -> String {
        format_expression(&self.tampon, self.separateur)
    }

    /// "0" si vide, "…" si le tampon finit par un opérateur ou '.',
    /// sinon le résultat formaté (éventuellement "Error").
    pub fn preview_result(&self) -> String {
        if self.tampon.is_empty() {
            return "0".to_string();
        }
        if finit_par_operateur(&self.tampon) || self.tampon.ends_with('.') {
            return EN_ATTENTE.to_string();
        }
        let texte = to_result_string(evaluate_expression(&self.tampon));
        avec_separateur(&texte, self.separateur)
    }

    pub fn history(&self) -> &[EntreeHistorique] {
        self.historique.entrees()
    }

    pub fn clear_history(&mut self) {
        self.historique.clear();
    }

    pub fn separateur(&self) -> Separateur {
        self.separateur
    }
}
