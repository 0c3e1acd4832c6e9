use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The JSON body sent with error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response("the requested resource could not be found")
}

pub fn get_404_not_found_response(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
}
