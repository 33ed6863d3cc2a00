use axum::{routing::get, routing::post, Router};
use clap::Parser;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use reptile_api_rust::database::manager::DatabaseManager;
use reptile_api_rust::handlers::{protected, public};
use reptile_api_rust::{config, middleware};

#[derive(Parser, Debug)]
#[command(name = "reptile-api-rust", about = "Reptile husbandry tracking API server")]
struct Args {
    /// Port to listen on; falls back to REPTILE_API_PORT / PORT, then 3000
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, TOKEN_SECRET, etc.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Reptile API in {:?} mode", config.environment);

    // Schema migrations are best-effort at boot; the pool is created lazily,
    // so the server still comes up (degraded) when the store is unreachable.
    if let Err(e) = DatabaseManager::migrate().await {
        tracing::warn!("Skipping migrations, database unavailable: {}", e);
    }

    let app = app();

    let port = args
        .port
        .or_else(|| {
            std::env::var("REPTILE_API_PORT")
                .ok()
                .or_else(|| std::env::var("PORT").ok())
                .and_then(|s| s.parse::<u16>().ok())
        })
        .unwrap_or(3000);

    let bind_addr = format!("{}:{}", args.bind, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Reptile API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(session_routes())
        .merge(user_routes())
        // Protected API behind the token middleware
        .merge(reptile_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http());

    if config::config().security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn session_routes() -> Router {
    Router::new().route("/sessions", post(public::sessions::create))
}

fn user_routes() -> Router {
    Router::new().route(
        "/users",
        get(public::users::list).post(public::users::create),
    )
}

fn reptile_routes() -> Router {
    Router::new()
        .route(
            "/reptiles",
            get(protected::reptiles::list).post(protected::reptiles::create),
        )
        .route(
            "/reptiles/:reptile_id",
            get(protected::reptiles::show)
                .post(protected::reptiles::update)
                .delete(protected::reptiles::destroy),
        )
        .route(
            "/reptiles/:reptile_id/feedings",
            get(protected::feedings::list).post(protected::feedings::create),
        )
        .route(
            "/reptiles/:reptile_id/husbandry-records",
            get(protected::husbandry_records::list).post(protected::husbandry_records::create),
        )
        .route(
            "/reptiles/:reptile_id/schedules",
            get(protected::schedules::list_for_reptile).post(protected::schedules::create),
        )
        .route("/schedules", get(protected::schedules::list_for_user))
        .route_layer(axum::middleware::from_fn(middleware::token_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Reptile API (Rust)",
        "version": version,
        "description": "Record-keeping backend for reptile husbandry built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "sessions": "POST /sessions (public - token acquisition)",
            "users": "/users (public)",
            "reptiles": "/reptiles[/:id] (protected)",
            "feedings": "/reptiles/:id/feedings (protected)",
            "husbandry_records": "/reptiles/:id/husbandry-records (protected)",
            "schedules": "/schedules, /reptiles/:id/schedules (protected)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
