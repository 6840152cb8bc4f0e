use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

/// Everything that can stop an event on its way in.
///
/// One variant per pipeline stage failure. The display strings double as the
/// client-facing error messages, so they are part of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("unable to parse request headers")]
    ParseFailure,
    #[error("writekey malformed - expect only letters and numbers")]
    MalformedWriteKey,
    #[error("writekey didn't match valid credentials")]
    UnknownWriteKey,
    #[error("failed to unmarshal JSON body")]
    JsonFailure,
    #[error("failed to resolve dataset object")]
    DatasetLookupFailure,
    #[error("failed to resolve schema")]
    SchemaLookupFailure,
}

impl EventError {
    pub fn status(&self) -> StatusCode {
        match self {
            EventError::UnknownWriteKey => StatusCode::UNAUTHORIZED,
            EventError::SchemaLookupFailure => StatusCode::INTERNAL_SERVER_ERROR,
            EventError::ParseFailure
            | EventError::MalformedWriteKey
            | EventError::JsonFailure
            | EventError::DatasetLookupFailure => StatusCode::BAD_REQUEST,
        }
    }

    pub fn response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(json!({ "error": self.to_string() }))
    }
}
