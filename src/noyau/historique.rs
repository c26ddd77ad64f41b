// src/noyau/historique.rs
//
// Historique borné des calculs réussis (le plus récent en tête).
// Conteneur pur : aucune évaluation ici.

/// Capacité par défaut.
pub const HISTORIQUE_DEFAUT: usize = 20;

/// Garde-fou : capacité maximale configurable.
pub const HISTORIQUE_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    pub id: u64,
}

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
    capacite: usize,
    // jamais remis à zéro : un id n’est pas réutilisé après clear()
    prochain_id: u64,
}

impl Default for Historique {
    fn default() -> Self {
        Self::avec_capacite(HISTORIQUE_DEFAUT)
    }
}

impl Historique {
    /// Capacité bornée à 1..=HISTORIQUE_MAX.
    pub fn avec_capacite(capacite: usize) -> Self {
        Self {
            entrees: Vec::new(),
            capacite: capacite.clamp(1, HISTORIQUE_MAX),
            prochain_id: 0,
        }
    }

    /// Fabrique une entrée avec un id neuf (sans l’enregistrer).
    pub fn nouvelle_entree(
        &mut self,
        expression: impl Into<String>,
        resultat: impl Into<String>,
    ) -> EntreeHistorique {
        let id = self.prochain_id;
        self.prochain_id += 1;
        EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
            id,
        }
    }

    /// Ajoute en tête, puis tronque aux `capacite` plus récentes.
    pub fn record(&mut self, entree: EntreeHistorique) {
        self.entrees.insert(0, entree);
        self.entrees.truncate(self.capacite);
    }

    pub fn clear(&mut self) {
        self.entrees.clear();
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
