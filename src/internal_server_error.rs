//! Defines the response to send when an internal server error occurs.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::not_found::ErrorBody;

pub fn get_internal_server_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Sorry, something went wrong. Try again later or check the server logs",
        }),
    )
        .into_response()
}
