use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use rag_client::{RagResponse, UserQueryRequest};
use serde_json::{json, Value};

use crate::server::AppState;

pub type SearchRejection = (StatusCode, Json<RagResponse>);

pub async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<UserQueryRequest>, JsonRejection>,
) -> Result<Json<RagResponse>, SearchRejection> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::warn!("Rejected search request: {}", rejection.body_text());
            return Err(invalid_question());
        }
    };

    let Some(question) = request.question() else {
        log::warn!("Rejected search request: question is missing or blank");
        return Err(invalid_question());
    };

    log::info!("Forwarding question ({} chars) to RAG upstream", question.chars().count());
    Ok(Json(state.rag_client.ask(question).await))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn invalid_question() -> SearchRejection {
    (StatusCode::BAD_REQUEST, Json(RagResponse::invalid_question()))
}
