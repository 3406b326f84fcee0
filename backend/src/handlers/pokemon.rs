use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use sqlx::PgPool;

use crate::filter::{Filter, StatusFilter};
use crate::helpers::{ApiResult, created, not_found, ok, to_500, unique_or_500};
use crate::models::pokemon::{
    CreatePokemonPayload, Pokemon, PokemonType, PokemonWithTypes, SearchParams, TypeInfo,
    UpdatePokemonPayload,
};

/// Charge les associations de toute la collection, groupées par Pokémon,
/// dans l'ordre d'insertion (l'ordre d'affichage des 1 à 2 types).
async fn load_types(pool: &PgPool) -> Result<HashMap<i32, Vec<PokemonType>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (i32, i32, i32, String)>(
        r#"
        SELECT pt.pokemon_id, pt.id, t.id, t.name
        FROM pokemon_types pt
        JOIN types t ON t.id = pt.type_id
        ORDER BY pt.pokemon_id, pt.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut par_pokemon: HashMap<i32, Vec<PokemonType>> = HashMap::new();
    for (pokemon_id, link_id, type_id, name) in rows {
        par_pokemon.entry(pokemon_id).or_default().push(PokemonType {
            id: link_id,
            r#type: TypeInfo { id: type_id, name },
        });
    }
    Ok(par_pokemon)
}

fn with_types(p: Pokemon, types: Vec<PokemonType>) -> PokemonWithTypes {
    PokemonWithTypes {
        id: p.id,
        number: p.number,
        name: p.name,
        image_url: p.image_url,
        caught: p.caught,
        seen: p.seen,
        types,
    }
}

async fn fetch_collection(pool: &PgPool) -> Result<Vec<PokemonWithTypes>, sqlx::Error> {
    let rows = sqlx::query_as::<_, Pokemon>(
        r#"
        SELECT id, number, name, image_url, caught, seen
        FROM pokemon
        ORDER BY number
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut types = load_types(pool).await?;
    Ok(rows
        .into_iter()
        .map(|p| {
            let t = types.remove(&p.id).unwrap_or_default();
            with_types(p, t)
        })
        .collect())
}

async fn fetch_by_number(
    pool: &PgPool,
    number: i32,
) -> Result<Option<PokemonWithTypes>, sqlx::Error> {
    let row = sqlx::query_as::<_, Pokemon>(
        r#"SELECT id, number, name, image_url, caught, seen FROM pokemon WHERE number = $1"#,
    )
    .bind(number)
    .fetch_optional(pool)
    .await?;

    let Some(p) = row else {
        return Ok(None);
    };

    let types = sqlx::query_as::<_, (i32, i32, String)>(
        r#"
        SELECT pt.id, t.id, t.name
        FROM pokemon_types pt
        JOIN types t ON t.id = pt.type_id
        WHERE pt.pokemon_id = $1
        ORDER BY pt.id
        "#,
    )
    .bind(p.id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(link_id, type_id, name)| PokemonType {
        id: link_id,
        r#type: TypeInfo { id: type_id, name },
    })
    .collect();

    Ok(Some(with_types(p, types)))
}

pub async fn list_pokemons(
    State(pool): State<PgPool>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<PokemonWithTypes>>> {
    let tous = fetch_collection(&pool).await.map_err(to_500)?;

    let filtre = Filter {
        text: params.q.unwrap_or_default(),
        status: params
            .status
            .as_deref()
            .map(StatusFilter::parse)
            .unwrap_or_default(),
        types: params
            .types
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    };

    Ok(Json(crate::filter::apply(tous, &filtre)))
}

pub async fn get_pokemon(
    State(pool): State<PgPool>,
    Path(number): Path<i32>,
) -> ApiResult<Json<PokemonWithTypes>> {
    let Some(pokemon) = fetch_by_number(&pool, number).await.map_err(to_500)? else {
        return Err(not_found("Pokémon introuvable."));
    };
    Ok(Json(pokemon))
}

pub async fn create_pokemon(
    State(pool): State<PgPool>,
    Json(payload): Json<CreatePokemonPayload>,
) -> ApiResult<(StatusCode, String)> {
    let mut tx = pool.begin().await.map_err(to_500)?;

    let pokemon_id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO pokemon (number, name, image_url)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(payload.number)
    .bind(&payload.name)
    .bind(payload.image_url.as_deref())
    .fetch_one(&mut *tx)
    .await
    .map_err(unique_or_500)?;

    for type_name in &payload.types {
        let type_id = sqlx::query_scalar::<_, i32>(r#"SELECT id FROM types WHERE name = $1"#)
            .bind(type_name)
            .fetch_optional(&mut *tx)
            .await
            .map_err(to_500)?
            .ok_or_else(|| not_found(format!("Type inconnu: {type_name}")))?;

        sqlx::query(
            r#"
            INSERT INTO pokemon_types (pokemon_id, type_id)
            VALUES ($1, $2)
            ON CONFLICT (pokemon_id, type_id) DO NOTHING
            "#,
        )
        .bind(pokemon_id)
        .bind(type_id)
        .execute(&mut *tx)
        .await
        .map_err(to_500)?;
    }

    tx.commit().await.map_err(to_500)?;

    created("Pokémon créé.")
}

pub async fn update_pokemon(
    State(pool): State<PgPool>,
    Path(number): Path<i32>,
    Json(payload): Json<UpdatePokemonPayload>,
) -> ApiResult<Json<PokemonWithTypes>> {
    let existe = sqlx::query_scalar::<_, i32>(r#"SELECT id FROM pokemon WHERE number = $1"#)
        .bind(number)
        .fetch_optional(&pool)
        .await
        .map_err(to_500)?;
    if existe.is_none() {
        return Err(not_found("Pokémon introuvable."));
    }

    // Ne touche que les champs fournis; au niveau du stockage c'est la
    // dernière écriture qui gagne.
    if let Some(seen) = payload.seen {
        sqlx::query(r#"UPDATE pokemon SET seen = $1 WHERE number = $2"#)
            .bind(seen)
            .bind(number)
            .execute(&pool)
            .await
            .map_err(to_500)?;
    }
    if let Some(caught) = payload.caught {
        sqlx::query(r#"UPDATE pokemon SET caught = $1 WHERE number = $2"#)
            .bind(caught)
            .bind(number)
            .execute(&pool)
            .await
            .map_err(to_500)?;
    }

    let fusionne = fetch_by_number(&pool, number)
        .await
        .map_err(to_500)?
        .ok_or_else(|| not_found("Pokémon introuvable."))?;
    Ok(Json(fusionne))
}

pub async fn delete_pokemon(
    State(pool): State<PgPool>,
    Path(number): Path<i32>,
) -> ApiResult<(StatusCode, String)> {
    let res = sqlx::query(r#"DELETE FROM pokemon WHERE number = $1"#)
        .bind(number)
        .execute(&pool)
        .await
        .map_err(to_500)?;
    if res.rows_affected() == 0 {
        return Err(not_found("Pokémon introuvable."));
    }
    ok("Pokémon supprimé.")
}

pub async fn reset_pokemons(State(pool): State<PgPool>) -> ApiResult<Json<Vec<PokemonWithTypes>>> {
    // Remise à zéro des deux drapeaux en une seule écriture.
    sqlx::query(r#"UPDATE pokemon SET seen = FALSE, caught = FALSE"#)
        .execute(&pool)
        .await
        .map_err(to_500)?;

    let tous = fetch_collection(&pool).await.map_err(to_500)?;
    Ok(Json(tous))
}
