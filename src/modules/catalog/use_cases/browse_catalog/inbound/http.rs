use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn list_books(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_books().await {
        Ok(books) => Json(books).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.queries.book_by_id(&id).await {
        Ok(Some(book)) => Json(book).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn list_authors(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_authors().await {
        Ok(authors) => Json(authors).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.queries.author_by_id(&id).await {
        Ok(Some(author)) => Json(author).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
