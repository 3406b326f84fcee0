use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;

use crate::handlers::pokemon::{
    create_pokemon, delete_pokemon, get_pokemon, list_pokemons, reset_pokemons, update_pokemon,
};

pub fn pokemon_routes() -> Router<PgPool> {
    Router::new()
        .route("/pokemon", get(list_pokemons).post(create_pokemon))
        .route("/pokemon/reset", post(reset_pokemons))
        .route(
            "/pokemon/{number}",
            get(get_pokemon).patch(update_pokemon).delete(delete_pokemon),
        )
}
