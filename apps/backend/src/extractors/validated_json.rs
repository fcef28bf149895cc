use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Largest request body buffered for JSON parsing.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

pub const BODY_TOO_LARGE: &str = "Request body is too large.";

/// JSON body extractor whose parse failures become a 400 [`AppError`].
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let correlation_id = trace_ctx::correlation_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::invalid("Failed to read request body.")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    warn!(
                        correlation_id = %correlation_id,
                        limit = MAX_BODY_BYTES,
                        "Request body over limit"
                    );
                    return Err(AppError::invalid(BODY_TOO_LARGE));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    correlation_id = %correlation_id,
                    error = %Redacted(&e.to_string()),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::invalid(classify_json_error(&e))
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Sanitized message for a body that failed to deserialize.
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            format!("Invalid JSON at line {}.", error.line())
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input.".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields.".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body.".to_string(),
    }
}
