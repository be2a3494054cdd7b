// src/domain/security.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

/// A permission to perform `action` on `resource`. Its granted-authority form
/// is the upper-cased `RESOURCE_ACTION` string carried by tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn authority(&self) -> String {
        format!("{}_{}", self.resource, self.action).to_ascii_uppercase()
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.authority())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Reader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Reader => "reader",
        }
    }

    pub fn default_authorities(&self) -> HashSet<String> {
        let actions: &[&str] = match self {
            Role::Admin => &["read", "create", "update", "delete"],
            Role::Reader => &["read"],
        };
        actions
            .iter()
            .map(|action| Capability::new(crate::domain::car::CAR_RESOURCE, *action).authority())
            .collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "reader" => Ok(Role::Reader),
            _ => Err(DomainError::violation("role", "role.unknown")),
        }
    }
}

pub fn parse_role(value: &str) -> DomainResult<Role> {
    value.trim().to_ascii_lowercase().parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_is_upper_snake_case() {
        assert_eq!(Capability::new("car", "read").authority(), "CAR_READ");
    }

    #[test]
    fn admin_holds_every_car_authority() {
        let authorities = Role::Admin.default_authorities();
        for expected in ["CAR_READ", "CAR_CREATE", "CAR_UPDATE", "CAR_DELETE"] {
            assert!(authorities.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn reader_only_reads() {
        assert_eq!(
            Role::Reader.default_authorities(),
            HashSet::from(["CAR_READ".to_string()])
        );
    }

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(parse_role(" Admin ").unwrap(), Role::Admin);
        assert!(parse_role("author").is_err());
    }
}
