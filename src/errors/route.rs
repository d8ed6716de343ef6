use actix_web::{HttpResponse, ResponseError, http::StatusCode};

#[derive(serde::Serialize)]
struct ErrorMessage {
    message: String,
}

#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("No route for {method} {path}")]
    NotFound { method: String, path: String },
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage {
            message: self.to_string(),
        })
    }
}
