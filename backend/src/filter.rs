//! Recherche et filtrage de la collection.
//!
//! Fonctions pures, réévaluées à chaque requête, sans cache. Le filtrage
//! est total: une requête ne peut pas échouer, au pire elle ne retient rien.

use crate::models::pokemon::PokemonWithTypes;

/// Filtre de statut, calqué sur les boutons de l'interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Seen,
    Unseen,
    Caught,
}

impl StatusFilter {
    /// Lecture tolérante depuis la query string: valeur inconnue = All.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "seen" => StatusFilter::Seen,
            "unseen" => StatusFilter::Unseen,
            "caught" => StatusFilter::Caught,
            _ => StatusFilter::All,
        }
    }
}

/// Critères combinés (ET) d'une requête sur la collection.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    pub text: String,
    pub status: StatusFilter,
    pub types: Vec<String>,
}

impl Filter {
    pub fn matches(&self, p: &PokemonWithTypes) -> bool {
        self.matches_text(p) && self.matches_status(p) && self.matches_types(p)
    }

    /// Sous-chaîne insensible à la casse du nom, ou du numéro en
    /// écriture brute ("25") ou complétée à trois chiffres ("025").
    fn matches_text(&self, p: &PokemonWithTypes) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let recherche = self.text.to_lowercase();
        p.name.to_lowercase().contains(&recherche)
            || p.number.to_string().contains(&recherche)
            || format!("{:03}", p.number).contains(&recherche)
    }

    fn matches_status(&self, p: &PokemonWithTypes) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Seen => p.seen,
            StatusFilter::Unseen => !p.seen,
            StatusFilter::Caught => p.caught,
        }
    }

    /// Tous les types demandés doivent être présents (ET, pas OU).
    fn matches_types(&self, p: &PokemonWithTypes) -> bool {
        self.types
            .iter()
            .all(|demande| p.types.iter().any(|t| t.r#type.name == *demande))
    }
}

/// Sous-séquence de `all` satisfaisant `filter`, dans l'ordre d'origine.
pub fn apply(mut all: Vec<PokemonWithTypes>, filter: &Filter) -> Vec<PokemonWithTypes> {
    all.retain(|p| filter.matches(p));
    all
}
