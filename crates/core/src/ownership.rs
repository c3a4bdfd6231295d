//! Ownership checks for user-scoped resources.
//!
//! Every workout resource carries the id of the user that created it. Handlers
//! call [`ensure_owner`] with that id and the id from the authenticated request
//! identity before reading or writing the resource.

use crate::error::CoreError;
use crate::types::DbId;

/// Message returned to callers that are authenticated but do not own the resource.
pub const ACCESS_DENIED: &str = "Access denied";

/// Succeeds only when `requester_id` owns the resource (`owner_id`).
pub fn ensure_owner(owner_id: DbId, requester_id: DbId) -> Result<(), CoreError> {
    if owner_id != requester_id {
        return Err(CoreError::Forbidden(ACCESS_DENIED.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn owner_is_allowed() {
        assert!(ensure_owner(7, 7).is_ok());
    }

    #[test]
    fn other_user_is_forbidden() {
        let err = ensure_owner(7, 8).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) if msg == ACCESS_DENIED);
    }
}
