use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use book_catalog::config::AppConfig;
use book_catalog::modules::catalog::adapters::outbound::store_in_memory::InMemoryEntityStore;
use book_catalog::modules::catalog::use_cases::add_author::handler::AddAuthorHandler;
use book_catalog::modules::catalog::use_cases::add_book::handler::AddBookHandler;
use book_catalog::modules::catalog::use_cases::browse_catalog::handler::CatalogQueryHandler;
use book_catalog::shell::graphql::build_schema;
use book_catalog::shell::http::router;
use book_catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // One store for the process lifetime; everything else borrows it.
    let store = Arc::new(InMemoryEntityStore::new());

    let state = AppState {
        queries: Arc::new(CatalogQueryHandler::new(store.clone())),
        add_author_handler: Arc::new(AddAuthorHandler::new(store.clone())),
        add_book_handler: Arc::new(AddBookHandler::new(store)),
    };

    let schema = build_schema(state.clone());

    let app = router(state, schema)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
