//! Submission state machine.
//!
//! ```text
//! Idle ──submit──► Submitting ──2xx──► Submitted (terminal, redirected)
//!  ▲   │                │
//!  │   └─no consent─┐   └─error/timeout──► Failed(message)
//!  │                ▼                          │
//!  └──── Failed("terms…") ◄──────── submit ────┘ (error cleared at attempt start)
//! ```
//!
//! A submit while another attempt is in flight returns the current state
//! untouched. Dropping an in-flight `submit` future aborts the request and
//! puts the pipeline back to `Idle`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::api_client::ProfileApi;
use crate::errors::{FailureKind, ProfileError};
use crate::form::state::ProfileForm;
use crate::session::{SessionContext, CSRF_COOKIE};
use crate::submission::normalize::build_payload;

pub const DASHBOARD_PATH: &str = "/job_seeker_dashboard/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&ProfileError> for SubmissionFailure {
    fn from(err: &ProfileError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(SubmissionFailure),
    Submitted {
        redirect_to: String,
    },
}

impl SubmissionState {
    /// Whether the submit control is enabled. Consent is not considered here.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    /// Text for the error banner, if one should be shown.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(failure) => Some(&failure.message),
            _ => None,
        }
    }
}

pub struct SubmissionPipeline<S: SessionContext> {
    api: Arc<dyn ProfileApi>,
    session: S,
    timeout: Duration,
    state: Mutex<SubmissionState>,
}

impl<S: SessionContext> SubmissionPipeline<S> {
    pub fn new(api: Arc<dyn ProfileApi>, session: S) -> Self {
        Self {
            api,
            session,
            timeout: DEFAULT_TIMEOUT,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one submission attempt against the current form content and
    /// returns the resulting state.
    pub async fn submit(&self, form: &ProfileForm) -> SubmissionState {
        let attempt = Uuid::new_v4();

        {
            let mut state = self.lock_state();
            if !state.can_submit() {
                debug!(%attempt, "Submit ignored while {:?}", *state);
                return state.clone();
            }
            if let Err(e) = form.consent().can_submit() {
                info!(%attempt, "Submission blocked: {e}");
                *state = SubmissionState::Failed(SubmissionFailure::from(&e));
                return state.clone();
            }
            *state = SubmissionState::Submitting;
        }

        let mut in_flight = InFlight {
            state: &self.state,
            attempt,
            settled: false,
        };

        let payload = build_payload(form.snapshot());
        let csrf_token = self.session.token(CSRF_COOKIE);
        info!(
            %attempt,
            skills = payload.skills.len(),
            educations = payload.educations.len(),
            certifications = payload.certifications.len(),
            job_experiences = payload.job_experiences.len(),
            "Submitting profile"
        );

        let call = self
            .api
            .create_profile(&payload, csrf_token.as_deref())
            .instrument(info_span!("create_profile", %attempt));
        let result = match tokio::time::timeout(self.timeout, call).await {
            Ok(r) => r.map_err(ProfileError::from),
            Err(_) => Err(ProfileError::Timeout(self.timeout)),
        };

        let next = match result {
            Ok(()) => {
                info!(%attempt, "Profile submitted");
                self.session.redirect(DASHBOARD_PATH);
                SubmissionState::Submitted {
                    redirect_to: DASHBOARD_PATH.to_string(),
                }
            }
            Err(e) => {
                warn!(%attempt, "Profile submission failed: {e}");
                SubmissionState::Failed(SubmissionFailure::from(&e))
            }
        };

        in_flight.settle(next.clone());
        next
    }
}

/// Resets the pipeline to `Idle` if the attempt is dropped before settling.
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
    attempt: Uuid,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(&mut self, next: SubmissionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!(attempt = %self.attempt, "Profile submission aborted before a response arrived");
            *self.state.lock().unwrap_or_else(PoisonError::into_inner) = SubmissionState::Idle;
        }
    }
}
