//! The aggregate profile form: scalars, skills, the three repeatable sections
//! and the consent flag. Single source of truth for what gets submitted.
//!
//! No cross-field validation happens here (email format, required fields).

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::ProfileError;
use crate::form::gating::ConsentGate;
use crate::form::sections::{RepeatableSection, SectionKind, SectionRecord};
use crate::form::skills::TagSelector;
use crate::models::profile::{BasicInfo, Certification, Education, JobExperience, ProfileRecord};
use crate::models::skill::SkillEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Location,
    Role,
    Industry,
    About,
}

impl ScalarField {
    pub const ALL: [ScalarField; 8] = [
        ScalarField::FirstName,
        ScalarField::LastName,
        ScalarField::Email,
        ScalarField::PhoneNumber,
        ScalarField::Location,
        ScalarField::Role,
        ScalarField::Industry,
        ScalarField::About,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarField::FirstName => "first_name",
            ScalarField::LastName => "last_name",
            ScalarField::Email => "email",
            ScalarField::PhoneNumber => "phone_number",
            ScalarField::Location => "location",
            ScalarField::Role => "role",
            ScalarField::Industry => "industry",
            ScalarField::About => "about",
        }
    }

    fn slot(self, basics: &BasicInfo) -> &String {
        match self {
            ScalarField::FirstName => &basics.first_name,
            ScalarField::LastName => &basics.last_name,
            ScalarField::Email => &basics.email,
            ScalarField::PhoneNumber => &basics.phone_number,
            ScalarField::Location => &basics.location,
            ScalarField::Role => &basics.role,
            ScalarField::Industry => &basics.industry,
            ScalarField::About => &basics.about,
        }
    }

    fn slot_mut(self, basics: &mut BasicInfo) -> &mut String {
        match self {
            ScalarField::FirstName => &mut basics.first_name,
            ScalarField::LastName => &mut basics.last_name,
            ScalarField::Email => &mut basics.email,
            ScalarField::PhoneNumber => &mut basics.phone_number,
            ScalarField::Location => &mut basics.location,
            ScalarField::Role => &mut basics.role,
            ScalarField::Industry => &mut basics.industry,
            ScalarField::About => &mut basics.about,
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ProfileError::UnknownScalar(s.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    basics: BasicInfo,
    skills: TagSelector,
    educations: RepeatableSection<Education>,
    certifications: RepeatableSection<Certification>,
    job_experiences: RepeatableSection<JobExperience>,
    consent: ConsentGate,
}

impl ProfileForm {
    /// Blank form: empty scalars, no skills, one blank anchor per section.
    pub fn new(catalog: Vec<SkillEntry>) -> Self {
        Self {
            skills: TagSelector::new(catalog),
            ..Default::default()
        }
    }

    // ── Scalars ────────────────────────────────────────────────────────────

    pub fn scalar(&self, field: ScalarField) -> &str {
        field.slot(&self.basics)
    }

    pub fn update_scalar(&mut self, field: ScalarField, value: &str) {
        value.clone_into(field.slot_mut(&mut self.basics));
    }

    // ── Skills ─────────────────────────────────────────────────────────────

    pub fn skill_selector(&self) -> &TagSelector {
        &self.skills
    }

    pub fn set_skill_catalog(&mut self, catalog: Vec<SkillEntry>) {
        self.skills.set_catalog(catalog);
    }

    pub fn set_skill_query(&mut self, text: &str) {
        self.skills.set_query(text);
    }

    pub fn add_skill(&mut self, name: &str) -> bool {
        let added = self.skills.add(name);
        if added {
            debug!("Skill selection now {:?}", self.skills.selected());
        }
        added
    }

    /// Adds the current query text as a skill (catalog match or not).
    pub fn add_skill_from_query(&mut self) -> bool {
        self.skills.add_query()
    }

    pub fn remove_skill(&mut self, name: &str) -> bool {
        self.skills.remove(name)
    }

    // ── Repeatable sections ────────────────────────────────────────────────

    pub fn educations(&self) -> &RepeatableSection<Education> {
        &self.educations
    }

    pub fn certifications(&self) -> &RepeatableSection<Certification> {
        &self.certifications
    }

    pub fn job_experiences(&self) -> &RepeatableSection<JobExperience> {
        &self.job_experiences
    }

    pub fn section_len(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Education => self.educations.len(),
            SectionKind::Certification => self.certifications.len(),
            SectionKind::JobExperience => self.job_experiences.len(),
        }
    }

    /// Appends a blank item to `kind` and returns its index.
    pub fn add_item(&mut self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Education => self.educations.add_item(),
            SectionKind::Certification => self.certifications.add_item(),
            SectionKind::JobExperience => self.job_experiences.add_item(),
        }
    }

    /// No-op for the anchor (index 0) and for out-of-range indices.
    pub fn remove_item(&mut self, kind: SectionKind, index: usize) -> bool {
        match kind {
            SectionKind::Education => self.educations.remove_item(index),
            SectionKind::Certification => self.certifications.remove_item(index),
            SectionKind::JobExperience => self.job_experiences.remove_item(index),
        }
    }

    pub fn update_field(
        &mut self,
        kind: SectionKind,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), ProfileError> {
        match kind {
            SectionKind::Education => self.educations.update_field(index, field, value),
            SectionKind::Certification => self.certifications.update_field(index, field, value),
            SectionKind::JobExperience => self.job_experiences.update_field(index, field, value),
        }
    }

    // ── Consent ────────────────────────────────────────────────────────────

    pub fn consent(&self) -> &ConsentGate {
        &self.consent
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.consent.set_accepted(accepted);
    }

    // ── Whole-record views ─────────────────────────────────────────────────

    /// Owned copy of the current state; later edits do not affect it.
    pub fn snapshot(&self) -> ProfileRecord {
        ProfileRecord {
            basics: self.basics.clone(),
            skills: self.skills.selected().to_vec(),
            educations: self.educations.to_vec(),
            certifications: self.certifications.to_vec(),
            job_experiences: self.job_experiences.to_vec(),
        }
    }

    /// Replaces the form content with `record`, going through the same
    /// operations a user would. Empty sections keep a blank anchor.
    pub fn prefill(&mut self, record: &ProfileRecord) -> Result<(), ProfileError> {
        for field in ScalarField::ALL {
            self.update_scalar(field, field.slot(&record.basics));
        }

        self.skills = TagSelector::new(self.skills.catalog().to_vec());
        for name in &record.skills {
            self.add_skill(name);
        }

        fill_section(&mut self.educations, &record.educations)?;
        fill_section(&mut self.certifications, &record.certifications)?;
        fill_section(&mut self.job_experiences, &record.job_experiences)?;

        debug!(
            "Prefilled form: {} skills, {} educations, {} certifications, {} job experiences",
            self.skills.selected().len(),
            self.educations.len(),
            self.certifications.len(),
            self.job_experiences.len()
        );
        Ok(())
    }
}

fn fill_section<T: SectionRecord>(
    section: &mut RepeatableSection<T>,
    items: &[T],
) -> Result<(), ProfileError> {
    *section = RepeatableSection::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            section.add_item();
        }
        for field in T::FIELDS {
            if let Some(value) = item.field(field) {
                section.update_field(index, field, value)?;
            }
        }
    }
    Ok(())
}
