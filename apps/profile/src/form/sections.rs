//! Repeatable sections: education, certification and job experience blocks.
//!
//! Each section is an ordered list that is never empty. Index 0 is the anchor
//! item: it can be edited but not removed. Field names are declared once per
//! record type and looked up by name, so UI code can stay string-keyed while
//! the storage stays typed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;
use crate::models::profile::{Certification, Education, JobExperience};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Education,
    Certification,
    JobExperience,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Education,
        SectionKind::Certification,
        SectionKind::JobExperience,
    ];

    /// Payload key of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Education => "educations",
            SectionKind::Certification => "certifications",
            SectionKind::JobExperience => "job_experiences",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-shape record that can live in a repeatable section.
///
/// `Default` must produce the blank item: every field an empty string.
pub trait SectionRecord: Clone + Default {
    const KIND: SectionKind;
    /// Every field name, in display order.
    const FIELDS: &'static [&'static str];
    /// Subset of `FIELDS` holding dates that get normalized on submit.
    const DATE_FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// True when every field is empty after trimming whitespace.
    fn is_blank(&self) -> bool {
        Self::FIELDS
            .iter()
            .all(|f| self.field(f).map_or(true, |v| v.trim().is_empty()))
    }
}

impl SectionRecord for Education {
    const KIND: SectionKind = SectionKind::Education;
    const FIELDS: &'static [&'static str] = &[
        "institution",
        "degree",
        "field_of_study",
        "start_date",
        "end_date",
        "description",
    ];
    const DATE_FIELDS: &'static [&'static str] = &["start_date", "end_date"];

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "institution" => &self.institution,
            "degree" => &self.degree,
            "field_of_study" => &self.field_of_study,
            "start_date" => &self.start_date,
            "end_date" => &self.end_date,
            "description" => &self.description,
            _ => return None,
        })
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "institution" => &mut self.institution,
            "degree" => &mut self.degree,
            "field_of_study" => &mut self.field_of_study,
            "start_date" => &mut self.start_date,
            "end_date" => &mut self.end_date,
            "description" => &mut self.description,
            _ => return None,
        })
    }
}

impl SectionRecord for Certification {
    const KIND: SectionKind = SectionKind::Certification;
    const FIELDS: &'static [&'static str] = &[
        "name",
        "issuer",
        "issue_date",
        "expiration_date",
        "credential_url",
    ];
    const DATE_FIELDS: &'static [&'static str] = &["issue_date", "expiration_date"];

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "name" => &self.name,
            "issuer" => &self.issuer,
            "issue_date" => &self.issue_date,
            "expiration_date" => &self.expiration_date,
            "credential_url" => &self.credential_url,
            _ => return None,
        })
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "name" => &mut self.name,
            "issuer" => &mut self.issuer,
            "issue_date" => &mut self.issue_date,
            "expiration_date" => &mut self.expiration_date,
            "credential_url" => &mut self.credential_url,
            _ => return None,
        })
    }
}

impl SectionRecord for JobExperience {
    const KIND: SectionKind = SectionKind::JobExperience;
    const FIELDS: &'static [&'static str] = &[
        "company_name",
        "position",
        "start_date",
        "end_date",
        "location",
        "responsibilities",
    ];
    const DATE_FIELDS: &'static [&'static str] = &["start_date", "end_date"];

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "company_name" => &self.company_name,
            "position" => &self.position,
            "start_date" => &self.start_date,
            "end_date" => &self.end_date,
            "location" => &self.location,
            "responsibilities" => &self.responsibilities,
            _ => return None,
        })
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "company_name" => &mut self.company_name,
            "position" => &mut self.position,
            "start_date" => &mut self.start_date,
            "end_date" => &mut self.end_date,
            "location" => &mut self.location,
            "responsibilities" => &mut self.responsibilities,
            _ => return None,
        })
    }
}

/// Ordered, never-empty list of records of one section kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatableSection<T: SectionRecord> {
    items: Vec<T>,
}

impl<T: SectionRecord> Default for RepeatableSection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SectionRecord> RepeatableSection<T> {
    /// A section holding only a blank anchor item.
    pub fn new() -> Self {
        Self {
            items: vec![T::default()],
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a blank item and returns its index.
    pub fn add_item(&mut self) -> usize {
        self.items.push(T::default());
        self.items.len() - 1
    }

    /// Removes the item at `index`. The anchor and out-of-range indices are
    /// silently ignored; returns whether anything was removed.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn update_field(&mut self, index: usize, field: &str, value: &str) -> Result<(), ProfileError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ProfileError::IndexOutOfRange {
                section: T::KIND,
                index,
                len,
            })?;
        let slot = item.field_mut(field).ok_or_else(|| ProfileError::UnknownField {
            section: T::KIND,
            field: field.to_string(),
        })?;
        value.clone_into(slot);
        Ok(())
    }

    /// Owned copy of every item, for snapshots.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}
