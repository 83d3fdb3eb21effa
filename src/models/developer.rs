//! Developer model matching the frontend Developer interface.

use serde::{Deserialize, Serialize};

/// Role a developer works in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Frontend,
    Backend,
    #[serde(rename = "Full-Stack")]
    FullStack,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Frontend => "Frontend",
            Role::Backend => "Backend",
            Role::FullStack => "Full-Stack",
        }
    }

    /// Case-sensitive: "backend" is not a role.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Frontend" => Some(Role::Frontend),
            "Backend" => Some(Role::Backend),
            "Full-Stack" => Some(Role::FullStack),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A developer profile as persisted and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub tech_stack: String,
    pub experience: u64,
    pub created_at: String,
}

impl Developer {
    /// Replace every mutable field; `id` and `created_at` are left alone.
    pub fn apply(&mut self, fields: DeveloperFields) {
        self.name = fields.name;
        self.role = fields.role;
        self.tech_stack = fields.tech_stack;
        self.experience = fields.experience;
    }
}

/// Request body for creating or updating a developer.
///
/// Every field is optional here so that a missing field is reported as a
/// validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeveloperInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub experience: Option<i64>,
}

/// Fields of a developer that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperFields {
    pub name: String,
    pub role: Role,
    pub tech_stack: String,
    pub experience: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_serializes_with_hyphen() {
        assert_eq!(serde_json::to_value(Role::FullStack).unwrap(), json!("Full-Stack"));
        let role: Role = serde_json::from_value(json!("Backend")).unwrap();
        assert_eq!(role, Role::Backend);
    }

    #[test]
    fn test_role_parse_is_case_sensitive() {
        for role in [Role::Frontend, Role::Backend, Role::FullStack] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("backend"), None);
        assert_eq!(Role::parse("FULL-STACK"), None);
        assert_eq!(Role::parse("FullStack"), None);
    }

    #[test]
    fn test_developer_keys_match_data_model() {
        let dev = Developer {
            id: "abc".to_string(),
            name: "Ada".to_string(),
            role: Role::Backend,
            tech_stack: "Rust, SQL".to_string(),
            experience: 5,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&dev).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["created_at", "experience", "id", "name", "role", "tech_stack"]
        );
    }

    #[test]
    fn test_input_ignores_unknown_and_missing_keys() {
        let input: DeveloperInput = serde_json::from_value(json!({
            "name": "Ada",
            "id": "forged",
            "created_at": "1970-01-01T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(input.name.as_deref(), Some("Ada"));
        assert!(input.role.is_none());
        assert!(input.experience.is_none());
    }
}
