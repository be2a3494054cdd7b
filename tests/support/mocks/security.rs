// tests/support/mocks/security.rs
use async_trait::async_trait;
use car_rest_api::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use car_rest_api::domain::security::Role;
use chrono::Duration;
use std::collections::HashSet;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const READER_TOKEN: &str = "reader-token";
/// Holds only the unrelated `MOCK` authority.
pub const MOCK_AUTHORITY_TOKEN: &str = "mock-token";
pub const NO_AUTHORITY_TOKEN: &str = "no-authority-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::internal("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(user("admin", Some(Role::Admin), &[])),
            READER_TOKEN => Ok(user("reader", Some(Role::Reader), &[])),
            MOCK_AUTHORITY_TOKEN => Ok(user("mock", None, &["MOCK"])),
            NO_AUTHORITY_TOKEN => Ok(user("nobody", None, &[])),
            EXPIRED_TOKEN => Err(ApplicationError::unauthenticated("expired token")),
            _ => Err(ApplicationError::unauthenticated("invalid token")),
        }
    }
}

pub fn user(name: &str, role: Option<Role>, extra: &[&str]) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    let mut authorities: HashSet<String> = role
        .map(|role| role.default_authorities())
        .unwrap_or_default();
    authorities.extend(extra.iter().map(ToString::to_string));

    AuthenticatedUser {
        username: name.into(),
        role,
        authorities,
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}
