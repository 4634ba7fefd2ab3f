use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use margindesk_core::reporting::BookHistoryPoint;

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_books(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    let books = state.history_service.books()?;
    Ok(Json(books))
}

async fn get_book_history(
    Path(book): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BookHistoryPoint>>> {
    let points = state.history_service.history(&book)?;
    Ok(Json(points))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(get_books))
        .route("/books/{book}/history", get(get_book_history))
}
