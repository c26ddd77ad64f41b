// src/noyau/affichage.rs
//
// Mise en forme pour l’écran : glyphes d’opérateurs espacés (× ÷ − +)
// et séparateur décimal. Le tampon lui-même reste en ASCII.

use super::jetons::{est_operateur, Operateur};

/// Séparateur décimal affiché.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Separateur {
    #[default]
    Point,
    Virgule,
}

impl Separateur {
    pub fn as_char(self) -> char {
        match self {
            Self::Point => '.',
            Self::Virgule => ',',
        }
    }
}

/// Substitue le séparateur décimal (le seul “i18n” géré).
pub fn avec_separateur(s: &str, sep: Separateur) -> String {
    match sep {
        Separateur::Point => s.to_string(),
        Separateur::Virgule => s.replace('.', ","),
    }
}

/// Tampon -> texte d’écran.
///
/// - opérateur binaire : " × ", " ÷ ", " − ", " + "
/// - signe unaire (tête ou après opérateur) : "−" collé au nombre
/// - tampon vide : "0"
pub fn format_expression(tampon: &str, sep: Separateur) -> String {
    if tampon.is_empty() {
        return "0".to_string();
    }

    let mut out = String::with_capacity(tampon.len() * 2);
    let mut prec: Option<char> = None;

    for c in tampon.chars() {
        match Operateur::depuis_char(c) {
            Some(op) => {
                let unaire = op == Operateur::Moins && prec.map_or(true, est_operateur);
                if unaire {
                    out.push(op.glyphe());
                } else {
                    out.push(' ');
                    out.push(op.glyphe());
                    out.push(' ');
                }
            }
            None if c == '.' => out.push(sep.as_char()),
            None => out.push(c),
        }
        prec = Some(c);
    }

    out
}
