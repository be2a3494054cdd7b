// src/application/authorization.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::security::Capability,
};

/// Gate evaluated at the top of every service operation, before any
/// validation or store access.
pub fn ensure_capability(
    actor: Option<&AuthenticatedUser>,
    capability: &Capability,
) -> ApplicationResult<()> {
    let Some(actor) = actor else {
        tracing::debug!(%capability, "no authenticated principal");
        return Err(ApplicationError::unauthenticated("authentication required"));
    };

    if actor.has_capability(capability) {
        Ok(())
    } else {
        tracing::debug!(user = %actor.username, %capability, "capability denied");
        Err(ApplicationError::forbidden(format!(
            "access denied: missing capability {capability}"
        )))
    }
}
