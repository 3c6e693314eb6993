use serde::{Deserialize, Serialize};

/// Top-level contact and identity fields of a job seeker profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub role: String,
    pub industry: String,
    pub about: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiration_date: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobExperience {
    pub company_name: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub responsibilities: String,
}

/// The whole profile as the backend expects it on `POST /api/jobseeker/create/`.
///
/// Also used as the on-disk draft shape, so every field tolerates absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    #[serde(flatten)]
    pub basics: BasicInfo,
    /// Skill names in selection order. Unknown names are created server-side.
    pub skills: Vec<String>,
    pub educations: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub job_experiences: Vec<JobExperience>,
}
