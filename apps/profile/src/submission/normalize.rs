use crate::form::sections::SectionRecord;
use crate::models::profile::ProfileRecord;

/// Strips a time component from an ISO-ish date: `2025-06-20T00:00:00` becomes
/// `2025-06-20`. Anything without a `T` passes through, including "".
pub fn normalize_date(value: &str) -> &str {
    value.split_once('T').map_or(value, |(date, _)| date)
}

fn normalize_item_dates<T: SectionRecord>(item: &mut T) {
    for field in T::DATE_FIELDS {
        if let Some(value) = item.field_mut(field) {
            let keep = normalize_date(value).len();
            value.truncate(keep);
        }
    }
}

/// Turns a form snapshot into the request body:
/// 1. date fields of every education, certification and job experience are normalized
/// 2. certifications with every field blank after normalization are dropped
///
/// Education and job experience items are sent even when blank.
pub fn build_payload(mut record: ProfileRecord) -> ProfileRecord {
    record.educations.iter_mut().for_each(normalize_item_dates);
    record.job_experiences.iter_mut().for_each(normalize_item_dates);
    record.certifications.iter_mut().for_each(normalize_item_dates);
    record.certifications.retain(|cert| !cert.is_blank());
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Certification, Education, JobExperience};

    #[test]
    fn test_normalize_date_cases() {
        assert_eq!(normalize_date("2025-06-20T00:00:00"), "2025-06-20");
        assert_eq!(normalize_date("2025-06-20T00:00:00.000Z"), "2025-06-20");
        assert_eq!(normalize_date("2025-06-20"), "2025-06-20");
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("T12:00"), "");
    }

    #[test]
    fn test_blank_certification_is_dropped() {
        let record = ProfileRecord {
            certifications: vec![
                Certification {
                    name: "  ".to_string(),
                    credential_url: "\t".to_string(),
                    ..Default::default()
                },
                Certification {
                    issuer: "AWS".to_string(),
                    issue_date: "2024-01-05T00:00:00".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let payload = build_payload(record);

        assert_eq!(payload.certifications.len(), 1);
        assert_eq!(payload.certifications[0].issuer, "AWS");
        assert_eq!(payload.certifications[0].issue_date, "2024-01-05");
        assert_eq!(payload.certifications[0].expiration_date, "");
    }

    #[test]
    fn test_certification_blank_after_normalizing_is_dropped() {
        let record = ProfileRecord {
            certifications: vec![Certification {
                issue_date: "T09:00:00".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let payload = build_payload(record);

        assert!(payload.certifications.is_empty());
    }

    #[test]
    fn test_blank_education_and_experience_are_kept() {
        let record = ProfileRecord {
            educations: vec![Education::default()],
            job_experiences: vec![JobExperience::default()],
            certifications: vec![Certification::default()],
            ..Default::default()
        };

        let payload = build_payload(record);

        assert_eq!(payload.educations, vec![Education::default()]);
        assert_eq!(payload.job_experiences, vec![JobExperience::default()]);
        assert!(payload.certifications.is_empty());
    }

    #[test]
    fn test_all_date_fields_normalized() {
        let record = ProfileRecord {
            educations: vec![Education {
                start_date: "2019-09-01T00:00:00".to_string(),
                end_date: "2023-06-30".to_string(),
                description: "Thesis on T-cells".to_string(),
                ..Default::default()
            }],
            job_experiences: vec![JobExperience {
                start_date: "2023-07-01T09:00".to_string(),
                end_date: "".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let payload = build_payload(record);

        assert_eq!(payload.educations[0].start_date, "2019-09-01");
        assert_eq!(payload.educations[0].end_date, "2023-06-30");
        assert_eq!(payload.educations[0].description, "Thesis on T-cells");
        assert_eq!(payload.job_experiences[0].start_date, "2023-07-01");
        assert_eq!(payload.job_experiences[0].end_date, "");
    }
}
