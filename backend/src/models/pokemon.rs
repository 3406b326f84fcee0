use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub id: i32,
    pub name: String,
}

/// Ligne d'association telle qu'exposée par l'API: `{id, type: {id, name}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub id: i32,
    pub r#type: TypeInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub caught: bool,
    pub seen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonWithTypes {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub caught: bool,
    pub seen: bool,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePokemonPayload {
    pub number: i32,
    pub name: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Corps du PATCH: seuls les champs fournis sont modifiés.
#[derive(Debug, Deserialize)]
pub struct UpdatePokemonPayload {
    pub seen: Option<bool>,
    pub caught: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub status: Option<String>,
    /// Noms de types séparés par des virgules.
    pub types: Option<String>,
}
