use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use poker_equity::core::EquityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    Equity(#[from] EquityError),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Body sent back for every failed request.
#[derive(serde::Deserialize, serde::Serialize, PartialEq, Debug)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
    pub traceback: String,
}

impl From<&ServerError> for ErrorResponse {
    fn from(err: &ServerError) -> Self {
        Self {
            ok: false,
            error: err.to_string(),
            traceback: format!("{err:?}"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::from(&self)),
        )
            .into_response()
    }
}
