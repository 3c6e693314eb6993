/// Profile API client: the only place that talks HTTP to the job board backend.
///
/// Endpoints:
/// - `GET  /api/skills/`            skill catalog for autocomplete
/// - `GET  /api/jobseeker/profile/` existing profile (edit mode prefill)
/// - `POST /api/jobseeker/create/`  profile submission, CSRF-protected
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::existing::ExistingProfile;
use crate::models::profile::ProfileRecord;
use crate::models::skill::SkillEntry;

pub const SKILLS_PATH: &str = "/api/skills/";
pub const PROFILE_PATH: &str = "/api/jobseeker/profile/";
pub const CREATE_PATH: &str = "/api/jobseeker/create/";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Backend operations the form depends on. Swap in a fake for tests.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<SkillEntry>, ApiError>;

    async fn fetch_profile(&self) -> Result<ExistingProfile, ApiError>;

    /// Any 2xx is success; the response body is ignored.
    async fn create_profile(
        &self,
        payload: &ProfileRecord,
        csrf_token: Option<&str>,
    ) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct HttpProfileApi {
    client: Client,
    base_url: String,
}

impl HttpProfileApi {
    /// `base_url` is the backend origin, e.g. `http://localhost:8000`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("GET {} returned {}: {}", path, status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn list_skills(&self) -> Result<Vec<SkillEntry>, ApiError> {
        let skills: Vec<SkillEntry> = self.get_json(SKILLS_PATH).await?;
        debug!("Fetched {} catalog skills", skills.len());
        Ok(skills)
    }

    async fn fetch_profile(&self) -> Result<ExistingProfile, ApiError> {
        self.get_json(PROFILE_PATH).await
    }

    async fn create_profile(
        &self,
        payload: &ProfileRecord,
        csrf_token: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut request = self.client.post(self.url(CREATE_PATH)).json(payload);
        match csrf_token {
            Some(token) => request = request.header(CSRF_HEADER, token),
            None => warn!("No CSRF token available; submitting without {CSRF_HEADER}"),
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            info!("Profile accepted by backend ({})", status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Profile submission returned {}: {}", status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}

/// Pulls a displayable message out of an error body: `message` first, then
/// `detail`. Only non-empty strings count.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "detail"].into_iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Fetches the catalog once. Failures are logged and degrade to an empty
/// catalog; ad-hoc skills still work without it.
pub async fn load_catalog(api: &dyn ProfileApi) -> Vec<SkillEntry> {
    match api.list_skills().await {
        Ok(skills) => skills,
        Err(e) => {
            warn!("Failed to load skills: {e}");
            Vec::new()
        }
    }
}
