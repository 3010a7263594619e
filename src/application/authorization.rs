// src/application/authorization.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

/// Owner-scoped resources may only be mutated by their owner. A mismatch is
/// reported as `Forbidden`, never folded into not-found.
pub fn ensure_owner(actor: &AuthenticatedUser, owner: UserId, resource: &str) -> ApplicationResult<()> {
    if actor.owns(owner) {
        Ok(())
    } else {
        tracing::debug!(
            actor = %actor.id,
            owner = %owner,
            resource,
            "ownership check failed"
        );
        Err(ApplicationError::forbidden(format!(
            "{resource} belongs to another user"
        )))
    }
}
