//! Read shape of `GET /api/jobseeker/profile/`, used to prefill the form in edit mode.

use serde::Deserialize;

use crate::models::profile::{BasicInfo, Certification, Education, JobExperience, ProfileRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct ExistingSkill {
    pub name: String,
    #[serde(default)]
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExistingEducation {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExistingCertification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExistingJobExperience {
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub responsibilities: Option<String>,
}

/// Nullable columns (`end_date`, `about`, ...) arrive as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExistingProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
    pub industry: Option<String>,
    pub about: Option<String>,
    pub skills: Vec<ExistingSkill>,
    pub educations: Vec<ExistingEducation>,
    pub certifications: Vec<ExistingCertification>,
    pub job_experiences: Vec<ExistingJobExperience>,
}

impl From<ExistingProfile> for ProfileRecord {
    fn from(p: ExistingProfile) -> Self {
        ProfileRecord {
            basics: BasicInfo {
                first_name: p.first_name.unwrap_or_default(),
                last_name: p.last_name.unwrap_or_default(),
                email: p.email.unwrap_or_default(),
                phone_number: p.phone_number.unwrap_or_default(),
                location: p.location.unwrap_or_default(),
                role: p.role.unwrap_or_default(),
                industry: p.industry.unwrap_or_default(),
                about: p.about.unwrap_or_default(),
            },
            skills: p.skills.into_iter().map(|s| s.name).collect(),
            educations: p
                .educations
                .into_iter()
                .map(|e| Education {
                    institution: e.institution.unwrap_or_default(),
                    degree: e.degree.unwrap_or_default(),
                    field_of_study: e.field_of_study.unwrap_or_default(),
                    start_date: e.start_date.unwrap_or_default(),
                    end_date: e.end_date.unwrap_or_default(),
                    description: e.description.unwrap_or_default(),
                })
                .collect(),
            certifications: p
                .certifications
                .into_iter()
                .map(|c| Certification {
                    name: c.name.unwrap_or_default(),
                    issuer: c.issuer.unwrap_or_default(),
                    issue_date: c.issue_date.unwrap_or_default(),
                    expiration_date: c.expiration_date.unwrap_or_default(),
                    credential_url: c.credential_url.unwrap_or_default(),
                })
                .collect(),
            job_experiences: p
                .job_experiences
                .into_iter()
                .map(|j| JobExperience {
                    company_name: j.company_name.unwrap_or_default(),
                    position: j.position.unwrap_or_default(),
                    start_date: j.start_date.unwrap_or_default(),
                    end_date: j.end_date.unwrap_or_default(),
                    location: j.location.unwrap_or_default(),
                    responsibilities: j.responsibilities.unwrap_or_default(),
                })
                .collect(),
        }
    }
}
