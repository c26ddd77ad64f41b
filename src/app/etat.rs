//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la `Session` du noyau et traduire les clics / touches en
//! appels `on_input_char` / `on_command`. Aucune règle de calcul ici :
//! tout passe par la session.

use calculatrice_clavier::config::Config;
use calculatrice_clavier::noyau::{Commande, Session};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub session: Session,

    // --- UX ---
    /// Dernier "=" réussi : la vue surligne l’entrée d’historique correspondante.
    pub dernier_commit: Option<u64>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(config.separateur, config.capacite_historique),
            dernier_commit: None,
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Chiffre, '.', opérateur ASCII.
    pub fn touche(&mut self, c: char) {
        self.session.on_input_char(c);
    }

    pub fn commande(&mut self, commande: Commande) {
        if self.session.on_command(commande) {
            self.dernier_commit = self.session.history().first().map(|e| e.id);
            debug!(id = ?self.dernier_commit, "résultat affiché");
        }
    }

    /// Caractère saisi au clavier physique -> touche ou commande.
    /// Rend false si le caractère n’a pas de sens pour la calculatrice.
    pub fn caractere_clavier(&mut self, c: char) -> bool {
        match c {
            '0'..='9' | '.' | '+' | '-' | '*' | '/' => self.touche(c),
            ',' => self.touche('.'),
            '×' | 'x' => self.touche('*'),
            '÷' => self.touche('/'),
            '−' => self.touche('-'),
            '=' => self.commande(Commande::Egal),
            '%' => self.commande(Commande::Pourcent),
            _ => return false,
        }
        true
    }

    pub fn vider_historique(&mut self) {
        self.session.clear_history();
        self.dernier_commit = None;
    }
}
