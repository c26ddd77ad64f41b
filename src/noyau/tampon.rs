// src/noyau/tampon.rs
//
// Tampon d’expression : règles de saisie (touches) et commandes.
//
// Fonctions pures : on reçoit le tampon (et l’historique) et on rend la
// nouvelle valeur. La Session (session.rs) se contente de les enchaîner.
//
// Invariants tenus par la saisie :
// - jamais deux opérateurs saisis à la suite (le nouveau remplace l’ancien)
// - au plus un '.' par segment numérique
// Seule exception : `Signe` peut coller un '-' de signe derrière un opérateur
// ("5+3" -> "5+-3") ; ce '-' appartient au nombre. Un `Supprimer` peut le
// laisser en fin de tampon ("5+-") : l’opérateur suivant remplace les deux.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::eval::{arrondir, evaluer_commit};
use super::historique::Historique;
use super::jetons::est_operateur;

/// Commandes de la calculatrice (hors saisie de caractères).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// clear
    Effacer,
    /// delete
    Supprimer,
    /// percent
    Pourcent,
    /// sign
    Signe,
    /// equals
    Egal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("commande inconnue: {0:?}")]
pub struct CommandeInconnue(pub String);

impl FromStr for Commande {
    type Err = CommandeInconnue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Self::Effacer),
            "delete" => Ok(Self::Supprimer),
            "percent" => Ok(Self::Pourcent),
            "sign" => Ok(Self::Signe),
            "equals" => Ok(Self::Egal),
            autre => Err(CommandeInconnue(autre.to_string())),
        }
    }
}

/* ------------------------ Helpers ------------------------ */

pub fn finit_par_operateur(tampon: &str) -> bool {
    tampon.chars().last().is_some_and(est_operateur)
}

/// Segment numérique courant : tout ce qui suit le dernier opérateur.
fn dernier_segment(tampon: &str) -> &str {
    tampon.rsplit(est_operateur).next().unwrap_or("")
}

fn nombre_final() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?$").expect("regex nombre final"))
}

/// Nombre en fin de tampon. `debut` pointe sur le signe s’il y en a un.
struct SegmentFinal {
    debut: usize,
    negatif: bool,
}

/// Un '-' juste avant les chiffres n’est un signe que s’il ouvre le tampon
/// ou suit un opérateur (même règle que le tokenizer).
fn segment_final(tampon: &str) -> Option<SegmentFinal> {
    let m = nombre_final().find(tampon)?;
    let avant = &tampon[..m.start()];

    let negatif = match avant.strip_suffix('-') {
        Some(reste) => reste.chars().last().map_or(true, est_operateur),
        None => false,
    };

    Some(SegmentFinal {
        debut: if negatif { m.start() - 1 } else { m.start() },
        negatif,
    })
}

/// Forme des opérateurs dans un tampon atteignable : pas d’opérateur binaire
/// en tête, et deux opérateurs ne se suivent que si le second est un signe
/// '-' collé à un nombre (ou pendant, en fin de tampon).
#[cfg(test)]
pub(super) fn operateurs_bien_places(tampon: &str) -> bool {
    let chars: Vec<char> = tampon.chars().collect();
    if chars.first().is_some_and(|&c| est_operateur(c) && c != '-') {
        return false;
    }
    chars.windows(2).enumerate().all(|(i, w)| {
        if !(est_operateur(w[0]) && est_operateur(w[1])) {
            return true;
        }
        w[1] == '-'
            && chars
                .get(i + 2)
                .map_or(true, |&suite| suite.is_ascii_digit() || suite == '.')
    })
}

/* ------------------------ Saisie ------------------------ */

/// Applique une touche caractère (chiffre, '.', opérateur) au tampon.
/// Tout autre caractère est ignoré.
pub fn apply_input(tampon: &str, c: char) -> String {
    let mut out = tampon.to_string();

    if c.is_ascii_digit() {
        out.push(c);
        return out;
    }

    if c == '.' {
        let seg = dernier_segment(tampon);
        if seg.contains('.') {
            return out;
        }
        if seg.is_empty() {
            out.push('0');
        }
        out.push('.');
        return out;
    }

    if est_operateur(c) {
        // "5+-" (signe puis suppression) : on retire l’opérateur ET le signe
        let base = tampon.trim_end_matches(est_operateur);
        if base.is_empty() {
            // seul un signe est accepté sur un tampon vide
            return if c == '-' { "-".to_string() } else { String::new() };
        }
        out.truncate(base.len());
        out.push(c);
    }

    out
}

/* ------------------------ Commandes ------------------------ */

/// Applique une commande. Rend (tampon', historique', commit?).
/// `commit` n’est vrai que pour un "=" réussi.
pub fn apply_command(
    tampon: &str,
    mut historique: Historique,
    commande: Commande,
) -> (String, Historique, bool) {
    let inchange = |h| (tampon.to_string(), h, false);

    match commande {
        Commande::Effacer => (String::new(), historique, false),

        Commande::Supprimer => {
            let mut out = tampon.to_string();
            out.pop();
            (out, historique, false)
        }

        Commande::Pourcent => {
            if tampon.is_empty() || finit_par_operateur(tampon) {
                return inchange(historique);
            }
            match pourcent(tampon) {
                Some(out) => (out, historique, false),
                None => inchange(historique),
            }
        }

        Commande::Signe => (signe(tampon), historique, false),

        Commande::Egal => {
            if tampon.is_empty() || finit_par_operateur(tampon) {
                return inchange(historique);
            }
            match evaluer_commit(tampon) {
                Ok(resultat) => {
                    debug!(expression = tampon, resultat = %resultat, "calcul enregistré");
                    let entree = historique.nouvelle_entree(tampon, resultat.clone());
                    historique.record(entree);
                    (resultat, historique, true)
                }
                Err(e) => {
                    debug!(erreur = %e, "tampon remis à zéro");
                    (String::new(), historique, false)
                }
            }
        }
    }
}

/// Remplace le nombre final par sa valeur / 100 ; None si pas de nombre final.
fn pourcent(tampon: &str) -> Option<String> {
    let seg = segment_final(tampon)?;
    let v = tampon[seg.debut..]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())?;
    Some(format!("{}{}", &tampon[..seg.debut], arrondir(v / 100.0)))
}

/// Bascule le signe du nombre final ; à défaut, le signe de tout le tampon.
fn signe(tampon: &str) -> String {
    let mut out = tampon.to_string();
    match segment_final(tampon) {
        Some(seg) if seg.negatif => {
            out.remove(seg.debut);
        }
        Some(seg) => out.insert(seg.debut, '-'),
        None => {
            if out.starts_with('-') {
                out.remove(0);
            } else {
                out.insert(0, '-');
            }
        }
    }
    out
}
