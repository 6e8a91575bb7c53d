use crate::application::ports::identity::{Identity, Session};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDto {
    pub uid: String,
    pub email: String,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            uid: identity.uid,
            email: identity.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStateDto {
    pub is_authenticated: bool,
    pub loading: bool,
    pub current_identity: Option<IdentityDto>,
}

/// Returned by a successful login. `token` goes in the `Authorization:
/// Bearer` header of every admin request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDto {
    pub token: String,
    pub identity: IdentityDto,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            identity: session.identity.into(),
        }
    }
}
