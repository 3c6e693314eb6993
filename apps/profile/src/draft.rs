use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::profile::{BasicInfo, ProfileRecord};

/// On-disk profile draft: the record itself plus the consent checkbox.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDraft {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    #[serde(default)]
    pub terms_accepted: bool,
}

pub fn load_draft(path: &Path) -> Result<ProfileDraft> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid draft JSON in {}", path.display()))
}

/// Layers a draft over a base record (usually the existing profile).
///
/// Non-empty draft scalars win. Draft skills are appended. A non-empty draft
/// section replaces the base section wholesale.
pub fn overlay(mut base: ProfileRecord, draft: ProfileRecord) -> ProfileRecord {
    let BasicInfo {
        first_name,
        last_name,
        email,
        phone_number,
        location,
        role,
        industry,
        about,
    } = draft.basics;
    for (slot, value) in [
        (&mut base.basics.first_name, first_name),
        (&mut base.basics.last_name, last_name),
        (&mut base.basics.email, email),
        (&mut base.basics.phone_number, phone_number),
        (&mut base.basics.location, location),
        (&mut base.basics.role, role),
        (&mut base.basics.industry, industry),
        (&mut base.basics.about, about),
    ] {
        if !value.is_empty() {
            *slot = value;
        }
    }

    base.skills.extend(draft.skills);
    if !draft.educations.is_empty() {
        base.educations = draft.educations;
    }
    if !draft.certifications.is_empty() {
        base.certifications = draft.certifications;
    }
    if !draft.job_experiences.is_empty() {
        base.job_experiences = draft.job_experiences;
    }
    base
}
