// src/application/dto/auth.rs
use crate::domain::security::{Capability, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// The principal behind a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: Option<Role>,
    /// Granted authorities such as `CAR_READ`, already merged with the
    /// role's defaults.
    pub authorities: HashSet<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, capability: &Capability) -> bool {
        self.authorities.contains(&capability.authority())
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub username: String,
    pub role: Option<Role>,
    pub authorities: HashSet<String>,
}

