//! Developer search.
//!
//! Filters an already-listed collection by role and by a keyword matched
//! against name and tech stack. The collection is small and always fully
//! materialized, so this is a linear scan.

use serde::Deserialize;

use crate::models::Developer;

/// Query parameters for developer search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeveloperQuery {
    /// Case-insensitive keyword matched against name or tech stack
    #[serde(default)]
    pub q: Option<String>,
    /// Exact role name; empty means all roles
    #[serde(default)]
    pub role: Option<String>,
}

impl DeveloperQuery {
    fn keyword(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.keyword().is_none() && self.role().is_none()
    }

    /// Keep the developers matching both filters, preserving input order.
    pub fn apply(&self, developers: Vec<Developer>) -> Vec<Developer> {
        let keyword = self.keyword();
        let role = self.role();

        developers
            .into_iter()
            .filter(|dev| role.map_or(true, |r| dev.role.as_str() == r))
            .filter(|dev| {
                keyword.as_deref().map_or(true, |k| {
                    dev.name.to_lowercase().contains(k) || dev.tech_stack.to_lowercase().contains(k)
                })
            })
            .collect()
    }
}
