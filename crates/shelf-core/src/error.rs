/// Outcome kinds every account and book operation reports to its caller.
///
/// `NotFound` deliberately covers both "no such row" and "row owned by
/// someone else" so that callers cannot discover other members' books.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("missing or invalid credentials")]
    Unauthenticated,
    #[error("password mismatch")]
    PasswordMismatch,
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("data not found")]
    NotFound,
    #[error("data already registered")]
    Conflict,
    #[error("internal server error")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal(cause.to_string())
    }
    /// `Validation` when `value` is longer than `max` characters.
    pub fn bounded(field: &str, value: &str, max: usize) -> Result<(), Self> {
        match value.chars().count() > max {
            true => Err(Self::validation(format!("{} exceeds {} characters", field, max))),
            false => Ok(()),
        }
    }
}

#[cfg(feature = "server")]
mod http {
    use super::*;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl ResponseError for ServiceError {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::Unauthenticated => StatusCode::UNAUTHORIZED,
                Self::PasswordMismatch => StatusCode::UNAUTHORIZED,
                Self::Validation(_) => StatusCode::BAD_REQUEST,
                Self::NotFound => StatusCode::NOT_FOUND,
                Self::Conflict => StatusCode::CONFLICT,
                Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            if let Self::Internal(cause) = self {
                log::error!("internal error: {}", cause);
            }
            HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "message": self.to_string() }))
        }
    }
}
