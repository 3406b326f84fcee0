use dotenvy::dotenv;
use pokedex_backend::{db, sync};

// cargo run --bin seed

#[tokio::main]
async fn main() {
    dotenv().ok();
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set.");
    let pool = db::init_db(&db_url).await;

    sync::run(&pool).await;
}
