pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{delete, get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, quiet the SQL layers
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging middleware: method, path, status, latency
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = next.run(req).await;

        let status = response.status().as_u16();
        let duration = start.elapsed();
        if status >= 400 {
            tracing::warn!("{} {} -> {} ({}ms)", method, path, status, duration.as_millis());
        } else {
            tracing::info!("{} {} -> {} ({}ms)", method, path, status, duration.as_millis());
        }

        response
    }

    let config = shared::config::load_config()?;

    let db_path = shared::config::resolve_path(&config.database.path)?;
    shared::data::db::initialize_database(&db_path.to_string_lossy())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let uploads_dir = shared::config::resolve_path(&config.storage.uploads_dir)?;
    handlers::storage::init_uploads_dir(uploads_dir.clone())?;

    // Ensure bootstrap admin user exists
    system::initialization::ensure_admin_user_exists(&config.admin).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // ========================================
    // ADMIN ROUTES (bearer token required)
    // ========================================
    let admin_api = Router::new()
        .route("/categories", post(handlers::category::upsert))
        .route("/categories/:id", delete(handlers::category::delete))
        .route(
            "/formations",
            get(handlers::formation::list_admin).post(handlers::formation::upsert),
        )
        .route("/formations/:id", delete(handlers::formation::delete))
        .route(
            "/formations/:id/publish",
            post(handlers::formation::toggle_published),
        )
        .route(
            "/formateurs",
            get(handlers::formateur::list_admin).post(handlers::formateur::upsert),
        )
        .route("/formateurs/:id", delete(handlers::formateur::delete))
        .route(
            "/formateurs/:id/publish",
            post(handlers::formateur::toggle_published),
        )
        .route(
            "/safety-activities",
            post(handlers::safety_activity::upsert),
        )
        .route(
            "/safety-activities/:id",
            delete(handlers::safety_activity::delete),
        )
        .route("/storage/upload", post(handlers::storage::upload))
        .route_layer(middleware::from_fn(system::auth::middleware::require_auth));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // PUBLIC CATALOG ROUTES
        // ========================================
        .route("/api/categories", get(handlers::category::list_all))
        .route("/api/formations", get(handlers::formation::list_public))
        .route("/api/formateurs", get(handlers::formateur::list_public))
        .route(
            "/api/safety-activities",
            get(handlers::safety_activity::list_all),
        )
        .nest("/api/admin", admin_api)
        // Uploaded images are served statically
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
