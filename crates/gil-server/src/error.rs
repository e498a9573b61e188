use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use gil_contract::ContractError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Contract(err) => match err {
                ContractError::InvalidArgument(_) | ContractError::UnknownFunction(_) => {
                    StatusCode::BAD_REQUEST
                }
                ContractError::NotFound(_) => StatusCode::NOT_FOUND,
                ContractError::AlreadyRegistered(_) | ContractError::InvalidTransition { .. } => {
                    StatusCode::CONFLICT
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Contract(err) => err.code(),
            Self::Config(_) => "config_error",
            Self::Io(_) => "io_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": self.code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_errors_map_to_http_status() {
        let cases = [
            (ContractError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
            (ContractError::UnknownFunction("x".into()), StatusCode::BAD_REQUEST),
            (ContractError::NotFound("R1".into()), StatusCode::NOT_FOUND),
            (ContractError::AlreadyRegistered("R1".into()), StatusCode::CONFLICT),
            (
                ContractError::Deserialization {
                    reference: "R1".into(),
                    reason: "eof".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ServerError::from(err).status(), status);
        }
    }

    #[test]
    fn contract_message_is_passed_through() {
        let err = ServerError::from(ContractError::NotFound("R1".into()));
        assert_eq!(err.to_string(), "no goods registered under reference R1");
        assert_eq!(err.code(), "not_found");
    }
}
