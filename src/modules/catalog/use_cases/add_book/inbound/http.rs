use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::catalog::use_cases::add_book::command::AddBook;
use crate::modules::catalog::use_cases::add_book::handler::AddBookError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddBookBody {
    pub title: String,
    pub author_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddBookBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddBook {
        title: body.title,
        author_id: body.author_id,
    };

    match state.add_book_handler.handle(command).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(AddBookError::UnknownAuthor { .. }) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
