// Service error types
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("No message provided")]
    EmptyMessage,

    #[error("Embedding model error: {0}")]
    Model(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub response: String,
    pub status: String,
}

impl ChatError {
    pub fn to_body(&self) -> ErrorBody {
        match self {
            ChatError::EmptyMessage => ErrorBody {
                error: "No message provided".to_string(),
                response: "Please provide a message to process.".to_string(),
                status: "error".to_string(),
            },
            _ => ErrorBody {
                error: "Internal server error".to_string(),
                response: "I'm sorry, but I encountered an error processing your request. \
                           Please try again."
                    .to_string(),
                status: "error".to_string(),
            },
        }
    }
}

impl ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_maps_to_bad_request() {
        let err = ChatError::EmptyMessage;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_body().error, "No message provided");
    }

    #[test]
    fn model_failure_maps_to_internal_error() {
        let err = ChatError::Model("onnx session died".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.to_body();
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.status, "error");
        // user-facing text never leaks internals
        assert!(!body.response.contains("onnx"));
    }
}
