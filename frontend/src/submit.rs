use crate::config;
use crate::request::{RequestField, RequestRecord};
use crate::validation::{FieldError, FieldErrors};
use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request rejected ({} field(s))", .0.len())]
    Rejected(FieldErrors),
    #[error("request service unreachable: {0}")]
    Transport(String),
    #[error("request service did not answer within {0} ms")]
    Timeout(u32),
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl SubmitError {
    /// What the visitor is told. Entered values are always kept.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected(_) => {
                "Please review the highlighted fields and submit again.".to_string()
            }
            SubmitError::Transport(_) | SubmitError::Timeout(_) => format!(
                "We could not send your request. Your details are still here, so please try again, or call {}.",
                config::CONTACT_PHONE_DISPLAY
            ),
            SubmitError::Unexpected(_) => format!(
                "We apologize, something went wrong on our side. Please call {} or email {}.",
                config::CONTACT_PHONE_DISPLAY,
                config::CONTACT_EMAIL
            ),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Transport(_) | SubmitError::Timeout(_))
    }
}

/// Delivers a request record somewhere.
pub trait RequestHandler {
    fn submit(&self, record: RequestRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Confirms the request in the page without sending it anywhere.
pub struct Acknowledge;

impl RequestHandler for Acknowledge {
    fn submit(&self, record: RequestRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        info!(
            "Acknowledging request locally (service: {}, vehicle: {})",
            record.service_type.label(),
            record.vehicle.label()
        );
        future::ready(Ok(())).boxed_local()
    }
}

#[derive(Deserialize)]
struct RejectionResponse {
    #[serde(default)]
    errors: HashMap<String, String>,
}

/// Turns a rejection body into field errors, skipping unknown keys.
fn field_errors_from(body: RejectionResponse) -> FieldErrors {
    body.errors
        .into_iter()
        .filter_map(|(name, message)| {
            RequestField::from_wire_name(&name).map(|field| (field, FieldError::Rejected(message)))
        })
        .collect()
}

/// Maps a response status and, for rejections, its decoded body onto the
/// submission outcome.
fn classify(status: u16, body: Option<Result<RejectionResponse, String>>) -> Result<(), SubmitError> {
    match status {
        200..=299 => Ok(()),
        400 | 422 => match body {
            Some(Ok(body)) => {
                let errors = field_errors_from(body);
                if errors.is_empty() {
                    Err(SubmitError::Unexpected(format!(
                        "rejected with status {} and no field errors",
                        status
                    )))
                } else {
                    Err(SubmitError::Rejected(errors))
                }
            }
            Some(Err(e)) => Err(SubmitError::Unexpected(e)),
            None => Err(SubmitError::Unexpected(format!("rejected with status {} and no body", status))),
        },
        _ => Err(SubmitError::Transport(format!("status {}", status))),
    }
}

/// Resolves to the delivery result, or to `Timeout` if `timer` fires first.
async fn within<F, T>(delivery: F, timer: T, timeout_ms: u32) -> Result<(), SubmitError>
where
    F: Future<Output = Result<(), SubmitError>>,
    T: Future<Output = ()>,
{
    match future::select(Box::pin(delivery), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SubmitError::Timeout(timeout_ms)),
    }
}

/// POSTs the record as JSON to a request service.
pub struct Relay {
    pub endpoint: String,
    pub timeout_ms: u32,
}

impl Relay {
    async fn send(endpoint: String, record: RequestRecord) -> Result<(), SubmitError> {
        let request = Request::post(&endpoint)
            .json(&record)
            .map_err(|e| SubmitError::Unexpected(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = match status {
            400 | 422 => Some(
                response
                    .json::<RejectionResponse>()
                    .await
                    .map_err(|e| e.to_string()),
            ),
            _ => None,
        };
        classify(status, body)
    }
}

impl RequestHandler for Relay {
    fn submit(&self, record: RequestRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        let timeout_ms = self.timeout_ms;
        async move {
            info!("Relaying request to {}", endpoint);
            let result = within(
                Relay::send(endpoint, record),
                TimeoutFuture::new(timeout_ms),
                timeout_ms,
            )
            .await;
            match &result {
                Ok(()) => info!("Request delivered"),
                Err(SubmitError::Rejected(errors)) => {
                    warn!("Request service rejected {} field(s)", errors.len())
                }
                Err(e) => error!("Request delivery failed: {}", e),
            }
            result
        }
        .boxed_local()
    }
}

/// Shared handle to the handler a form submits through.
#[derive(Clone)]
pub struct SubmissionHandler(Rc<dyn RequestHandler>);

impl SubmissionHandler {
    pub fn new<H: RequestHandler + 'static>(handler: H) -> Self {
        Self(Rc::new(handler))
    }

    pub fn from_config() -> Self {
        match config::request_endpoint() {
            Some(endpoint) => Self::new(Relay {
                endpoint,
                timeout_ms: config::SUBMIT_TIMEOUT_MS,
            }),
            None => Self::new(Acknowledge),
        }
    }

    pub fn submit(&self, record: RequestRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.submit(record)
    }
}

impl PartialEq for SubmissionHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
