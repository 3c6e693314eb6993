use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile::api_client::{load_catalog, HttpProfileApi, ProfileApi};
use profile::config::Config;
use profile::draft::{load_draft, overlay};
use profile::form::ProfileForm;
use profile::models::profile::ProfileRecord;
use profile::session::CookieSession;
use profile::submission::{SubmissionPipeline, SubmissionState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting profile submitter v{}", env!("CARGO_PKG_VERSION"));

    let api = Arc::new(HttpProfileApi::new(
        &config.api_base_url,
        config.request_timeout,
    )?);

    let catalog = load_catalog(api.as_ref()).await;
    info!("Skill catalog loaded ({} entries)", catalog.len());

    let mut form = ProfileForm::new(catalog);

    let mut record = ProfileRecord::default();
    if config.prefill {
        match api.fetch_profile().await {
            Ok(existing) => {
                record = ProfileRecord::from(existing);
                info!("Loaded existing profile for editing");
            }
            Err(e) => warn!("Could not load existing profile, starting blank: {e}"),
        }
    }

    let mut terms_accepted = config.terms_accepted;
    if let Some(path) = &config.draft_path {
        let draft = load_draft(path)?;
        terms_accepted |= draft.terms_accepted;
        record = overlay(record, draft.profile);
        info!("Applied draft {}", path.display());
    }

    form.prefill(&record)?;
    form.set_terms_accepted(terms_accepted);

    let pipeline = SubmissionPipeline::new(api, CookieSession::new(config.cookies.clone()))
        .with_timeout(config.request_timeout);

    match pipeline.submit(&form).await {
        SubmissionState::Submitted { redirect_to } => {
            info!(
                "Profile created; continue at {}{}",
                config.api_base_url.trim_end_matches('/'),
                redirect_to
            );
            Ok(())
        }
        other => match other.error_message() {
            Some(msg) => bail!("{msg}"),
            None => bail!("Submission did not complete ({other:?})"),
        },
    }
}
