use super::scope::OwnerScope;
use super::value_objects::UserId;

/// Raised when an operation needs a signed-in caller and the session is anonymous.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("auth.unauthorized")]
pub struct Unauthorized;

/// Per-request caller identity.
///
/// Built by the transport layer from the session cookie and handed to every
/// use case that acts on behalf of a user. An anonymous session is a valid
/// value; only [`Session::scope`] turns it into an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<UserId>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Returns the ownership scope of the caller, or `Unauthorized` for anonymous sessions.
    pub fn scope(&self) -> Result<OwnerScope, Unauthorized> {
        self.user_id.map(OwnerScope::new).ok_or(Unauthorized)
    }
}
