use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::catalog::use_cases::add_author::command::AddAuthor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddAuthorBody {
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddAuthorBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddAuthor {
        name: body.name,
        age: body.age,
        email: body.email,
    };

    match state.add_author_handler.handle(command).await {
        Ok(author) => (StatusCode::CREATED, Json(author)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
