// Submission: snapshot normalization and the gated, timeout-bounded submit state machine.

pub mod normalize;
pub mod pipeline;

pub use normalize::{build_payload, normalize_date};
pub use pipeline::{SubmissionFailure, SubmissionPipeline, SubmissionState, DASHBOARD_PATH};
