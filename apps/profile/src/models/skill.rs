use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of the skill catalog served by `GET /api/skills/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Backend primary key. Integers are stringified; missing ids become "".
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
}

impl SkillEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_string_integer_and_missing() {
        let entries: Vec<SkillEntry> = serde_json::from_str(
            r#"[{"id":"1","name":"React"},{"id":7,"name":"Rust"},{"name":"Go"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0], SkillEntry::new("1", "React"));
        assert_eq!(entries[1], SkillEntry::new("7", "Rust"));
        assert_eq!(entries[2], SkillEntry::new("", "Go"));
    }
}
