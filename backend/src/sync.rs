//! Synchronisation ponctuelle du catalogue de référence (PokéAPI) vers la
//! base. Strictement séquentielle: une seule requête en vol à la fois,
//! pour rester sous les limites informelles de l'API publique.

use reqwest::Client;
use serde::Deserialize;
use sqlx::PgPool;

const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/pokemon";
const FIRST_NUMBER: i32 = 1;
const LAST_NUMBER: i32 = 151;

#[derive(Debug, Deserialize)]
struct CatalogPokemon {
    id: i32,
    name: String,
    sprites: CatalogSprites,
    types: Vec<CatalogTypeSlot>,
}

#[derive(Debug, Deserialize)]
struct CatalogSprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogTypeSlot {
    r#type: CatalogNamed,
}

#[derive(Debug, Deserialize)]
struct CatalogNamed {
    name: String,
}

/// Remplit les numéros 1 à 151 manquants. Un échec sur un numéro est
/// journalisé puis ignoré; les lignes déjà présentes ne sont jamais
/// mises à jour.
pub async fn run(pool: &PgPool) {
    let client = Client::new();
    println!("🌱 Synchronisation du catalogue ({FIRST_NUMBER}..{LAST_NUMBER})...");

    let mut ajoutes = 0;
    for number in FIRST_NUMBER..=LAST_NUMBER {
        match sync_one(pool, &client, number).await {
            Ok(true) => ajoutes += 1,
            Ok(false) => println!("⏭️ Pokémon #{number} déjà présent, ignoré"),
            Err(e) => eprintln!("⚠️ Pokémon #{number} ignoré: {e}"),
        }
    }

    println!("🌱 Synchronisation terminée: {ajoutes} Pokémon ajoutés");
}

/// Ok(false) = déjà en base, Ok(true) = ajouté.
async fn sync_one(
    pool: &PgPool,
    client: &Client,
    number: i32,
) -> Result<bool, Box<dyn std::error::Error>> {
    let existant = sqlx::query_scalar::<_, i32>(r#"SELECT id FROM pokemon WHERE number = $1"#)
        .bind(number)
        .fetch_optional(pool)
        .await?;
    if existant.is_some() {
        return Ok(false);
    }

    let response = client.get(format!("{POKEAPI_URL}/{number}")).send().await?;
    if !response.status().is_success() {
        return Err(format!("réponse {} du catalogue", response.status()).into());
    }
    let data: CatalogPokemon = response.json().await?;

    // Résout les types avant d'écrire: le vocabulaire est clos, tout nom
    // inconnu invalide le numéro entier.
    let mut type_ids = Vec::new();
    for slot in &data.types {
        let type_id = sqlx::query_scalar::<_, i32>(r#"SELECT id FROM types WHERE name = $1"#)
            .bind(&slot.r#type.name)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| format!("type inconnu: {}", slot.r#type.name))?;
        type_ids.push(type_id);
    }

    let mut tx = pool.begin().await?;
    let pokemon_id = sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO pokemon (number, name, image_url) VALUES ($1, $2, $3) RETURNING id"#,
    )
    .bind(data.id)
    .bind(&data.name)
    .bind(data.sprites.front_default.as_deref())
    .fetch_one(&mut *tx)
    .await?;

    for type_id in type_ids {
        sqlx::query(r#"INSERT INTO pokemon_types (pokemon_id, type_id) VALUES ($1, $2)"#)
            .bind(pokemon_id)
            .bind(type_id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    let noms_de_types: Vec<&str> = data.types.iter().map(|s| s.r#type.name.as_str()).collect();
    println!(
        "✓ Pokémon #{number} ajouté: {} ({})",
        data.name,
        noms_de_types.join(", ")
    );
    Ok(true)
}
