use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::OnceCell;

static POOL: OnceCell<Option<PgPool>> = OnceCell::const_new();

/// Pool partagé entre les tests, ou None si aucune base n'est configurée
/// (les tests d'intégration sont alors ignorés).
pub async fn test_pool() -> Option<&'static PgPool> {
    let _ = dotenvy::dotenv();

    POOL.get_or_init(|| async {
        let url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        eprintln!("[tests] Using TEST_DATABASE_URL={url}");
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&url)
            .await
            .expect("DB connect failed");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Migration failed");
        Some(pool)
    })
    .await
    .as_ref()
}

/// Démarre le serveur sur un port éphémère, ou None sans base configurée.
#[allow(dead_code)]
pub async fn start_server() -> Option<(String, tokio::task::JoinHandle<()>)> {
    let pool = test_pool().await?.clone();

    let app = pokedex_backend::app::build_routes().with_state(pool);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).into_future().await {
            eprintln!("serve error: {e}");
        }
    });

    for _ in 0..30 {
        if let Ok(resp) = reqwest::get(format!("{url}/")).await {
            if resp.status().is_success() {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    Some((url, handle))
}
