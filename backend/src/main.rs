use dotenvy::dotenv;
use pokedex_backend::{app, db};
use tokio::net::TcpListener;

// cargo watch -c -x run

#[tokio::main]
async fn main() {
    dotenv().ok();
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set.");
    let db_pool = db::init_db(&db_url).await;
    let addr = std::env::var("BACKEND_URL").expect("BACKEND_URL must be set.");

    let router = app::build_app(db_pool);

    let listener = TcpListener::bind(&addr).await.unwrap();

    println!("🚀 Serveur démarré sur http://{addr}");

    axum::serve(listener, router).into_future().await.unwrap();
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::routing::get;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn build_test_app() -> Router {
        // Router indépendant de la DB
        Router::new().route("/", get(|| async { "Bienvenue sur le Pokédex" }))
    }

    #[tokio::test]
    async fn get_racine_retourne_bienvenue() {
        let app = build_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/plain; charset=utf-8");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "Bienvenue sur le Pokédex"
        );
    }

    #[tokio::test]
    async fn post_racine_retourne_405() {
        let app = build_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let allow = response
            .headers()
            .get(header::ALLOW)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(allow.contains("GET"));
    }

    #[tokio::test]
    async fn route_inconnue_retourne_404() {
        let app = build_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
