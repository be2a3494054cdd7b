// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Fails with `ApplicationError::Unauthenticated` for any token that
    /// cannot be verified or has expired.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
