//! Typed HTTP wrappers for the external backend services.
//!
//! Every network call in the app goes through this module: the stock-anomaly
//! analysis API, the face-detection API, and the contact-form relay. Callers
//! get `Result<T, ApiError>` and decide how to surface failures; nothing here
//! panics or touches UI state.

use std::fmt;
use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use crate::overlay::DetectionResult;
use crate::report::AnalysisReport;

/// Base URL of the anomaly-analysis backend.
const ANALYSIS_API: &str = "http://127.0.0.1:8001";

/// Base URL of the face-detection backend.
const DETECTION_API: &str = "http://localhost:8001";

/// Form-relay endpoint for the contact section.
const FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Public access key identifying this site to the form relay.
const FORMS_ACCESS_KEY: &str = "5f1d2c8e-7b3a-4e9d-9c21-8a6f0b4d3e72";

/// Upper bound on any single request. A hung backend surfaces as
/// [`ApiError::Timeout`] instead of leaving the UI loading forever.
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Failure modes of a backend call, one variant per error class:
/// unreachable network, non-2xx status, unparseable body, or timeout.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Transport(String),
    Http { status: u16, detail: Option<String> },
    Parse(String),
    Timeout,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, detail } => match detail {
                Some(detail) => write!(f, "{detail}"),
                None => write!(f, "request failed with status {status}"),
            },
            ApiError::Parse(_) => write!(f, "received a malformed response from the server"),
            ApiError::Timeout => write!(f, "request timed out"),
        }
    }
}

/// Error payload shape used by both backends for non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Response contract of the form relay.
#[derive(Deserialize)]
struct FormsResponse {
    success: bool,
    message: Option<String>,
}

/// Project metadata shown in the capstone overview panel.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub description: String,
}

/// Fetch project metadata from the analysis backend.
pub async fn fetch_project_info() -> Result<ProjectInfo, ApiError> {
    with_timeout(async {
        let resp = Request::get(&format!("{ANALYSIS_API}/api/info"))
            .send()
            .await
            .map_err(transport)?;
        parse_json(resp).await
    })
    .await
}

/// Trigger a full analysis run. The backend takes no parameters; the body is
/// an empty JSON object.
pub async fn run_analysis() -> Result<AnalysisReport, ApiError> {
    with_timeout(async {
        let resp = Request::post(&format!("{ANALYSIS_API}/api/analyze"))
            .json(&serde_json::json!({}))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        parse_json(resp).await
    })
    .await
}

/// Upload an image as multipart form data and return the detected faces.
pub async fn detect_faces(file: &web_sys::File) -> Result<DetectionResult, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not build form data".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file".to_string()))?;

    with_timeout(async {
        let resp = Request::post(&format!("{DETECTION_API}/detect"))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        parse_json(resp).await
    })
    .await
}

/// Send a contact-form message through the form relay.
pub async fn send_contact(name: &str, email: &str, message: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "access_key": FORMS_ACCESS_KEY,
        "name": name,
        "email": email,
        "message": message,
    });

    with_timeout(async {
        let resp = Request::post(FORMS_ENDPOINT)
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let parsed: FormsResponse = parse_json(resp).await?;
        if parsed.success {
            Ok(())
        } else {
            Err(ApiError::Http {
                status,
                detail: parsed.message,
            })
        }
    })
    .await
}

/// Race a request against the global timeout.
async fn with_timeout<T>(
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    let fut = Box::pin(fut);
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match future::select(fut, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Decode a response body, folding non-2xx statuses into [`ApiError::Http`]
/// with the server's `detail` message when one is present.
async fn parse_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
        return Err(ApiError::Http { status, detail });
    }
    resp.json::<T>().await.map_err(|e| {
        // Logged separately from transport failures so a misbehaving backend
        // is diagnosable from the console.
        log::warn!("malformed response body: {e}");
        ApiError::Parse(e.to_string())
    })
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
