use axum::{routing::get, Router};
use configuration::Settings;
use database::DbRepository;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use validation::Validator;

pub mod error;
pub mod extract;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub db_repo: DbRepository,
    pub validator: Validator,
}

impl AppState {
    pub fn new(db_repo: DbRepository) -> Self {
        Self {
            db_repo,
            validator: Validator::default(),
        }
    }
}

/// Builds the application router: the comment API, a health probe, and the
/// static front-end served for every other path.
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/comments",
            get(handlers::list_comments).post(handlers::insert_comment),
        )
        .route("/api/comments/:id", get(handlers::get_comment))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors)
        // Logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Connects to the database, makes sure the table exists, and serves until
/// the listener fails.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.server.addr()?;

    let db_pool = database::connect(&settings.database).await?;
    database::ensure_schema(&db_pool).await?;
    let app_state = Arc::new(AppState::new(DbRepository::new(db_pool)));

    let app = build_router(app_state, &settings.server.static_dir);

    tracing::info!("Web server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
