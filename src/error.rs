use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
#[error("Invalid selector `{selector}`: {message}")]
pub struct ParseError {
    pub selector: &'static str,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got `{0}`")]
    InvalidPort(String),
}

/// Failures surfaced by the scrape route.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Keyword is required")]
    Validation,

    #[error("Failed to scrape Amazon products")]
    Upstream(String),
}

impl From<FetchError> for ScrapeError {
    fn from(err: FetchError) -> Self {
        ScrapeError::Upstream(err.to_string())
    }
}

impl ResponseError for ScrapeError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::Validation => StatusCode::BAD_REQUEST,
            ScrapeError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ScrapeError::Validation => json!({ "error": self.to_string() }),
            ScrapeError::Upstream(details) => {
                let details = if details.is_empty() { "Unknown error" } else { details.as_str() };
                json!({ "error": self.to_string(), "details": details })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
