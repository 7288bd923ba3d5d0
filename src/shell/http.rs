use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    http::StatusCode,
    response::Html,
    routing::get,
};

use crate::modules::catalog::use_cases::add_author::inbound::http as add_author_http;
use crate::modules::catalog::use_cases::add_book::inbound::http as add_book_http;
use crate::modules::catalog::use_cases::browse_catalog::inbound::http as browse_http;
use crate::shell::graphql::AppSchema;
use crate::shell::state::AppState;

pub fn router(state: AppState, schema: AppSchema) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .route("/healthz", get(healthz))
        .route(
            "/authors",
            get(browse_http::list_authors).post(add_author_http::handle),
        )
        .route("/authors/{id}", get(browse_http::get_author))
        .route(
            "/books",
            get(browse_http::list_books).post(add_book_http::handle),
        )
        .route("/books/{id}", get(browse_http::get_book))
        .layer(Extension(schema))
        .with_state(state)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
