// Error handling for the HTTP layer
// Maps domain errors onto status codes and the JSON result envelope

use std::fmt::{Display, Formatter};

use actix_web::HttpResponse;

pub use foodgram_common::error::{
    ACCESS_DENIED, DATA_ACCESS_ERROR, PARAMETER_VALIDATE_ERROR, REPORT_RENDER_ERROR,
    RESOURCE_CONFLICT, RESOURCE_NOT_FOUND, SERVER_ERROR,
};
pub use foodgram_common::error::{ErrorCode, FoodgramError};

use crate::model::response as common;

// Local wrapper for application errors to implement actix-web error handling
// (Cannot impl foreign trait for foreign type due to orphan rules)
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<FoodgramError> for AppError {
    fn from(value: FoodgramError) -> Self {
        AppError {
            inner: value.into(),
        }
    }
}

impl AppError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }

    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

/// HTTP status and result code of a domain error
pub fn status_and_code(err: &FoodgramError) -> (u16, ErrorCode<'static>) {
    match err {
        FoodgramError::Unauthorized(_) => (401, ACCESS_DENIED),
        FoodgramError::AggregationFailed(_) => (500, DATA_ACCESS_ERROR),
        FoodgramError::RenderFailed(_) => (500, REPORT_RENDER_ERROR),
        FoodgramError::IllegalArgument(_) => (400, PARAMETER_VALIDATE_ERROR),
        FoodgramError::ResourceNotFound(_) => (404, RESOURCE_NOT_FOUND),
        FoodgramError::ResourceConflict(_) => (400, RESOURCE_CONFLICT),
        FoodgramError::DatabaseError(_) => (500, DATA_ACCESS_ERROR),
        FoodgramError::ConfigError(_) => (500, SERVER_ERROR),
    }
}

impl actix_web::error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if let Some(e) = self.downcast_ref::<FoodgramError>() {
            let (status, code) = status_and_code(e);
            if status >= 500 {
                tracing::error!(code = code.code, "Request failed: {}", e);
            }

            common::Result::<String>::http_response(status, code.code, e.to_string(), String::new())
        } else {
            tracing::error!("Unhandled request error: {:#}", self.inner);

            common::Result::<String>::http_response(
                500,
                SERVER_ERROR.code,
                self.inner.to_string(),
                String::new(),
            )
        }
    }
}
