use crate::redis::model::{RedisKey, RedisValue};
use kernel::model::auth::{event::CreateToken, AccessToken, Principal};
use shared::error::AppError;

pub struct AuthorizationKey(String);
pub struct AuthorizedPrincipal(Principal);

pub fn from(event: CreateToken) -> (AuthorizationKey, AuthorizedPrincipal) {
    (
        AuthorizationKey(event.access_token.0),
        AuthorizedPrincipal(event.principal),
    )
}

impl From<AuthorizationKey> for AccessToken {
    fn from(key: AuthorizationKey) -> Self {
        Self(key.0)
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(token: AccessToken) -> Self {
        Self(token.0)
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.to_string())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedPrincipal;

    fn inner(&self) -> String {
        format!("session:{}", self.0)
    }
}

impl RedisValue for AuthorizedPrincipal {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedPrincipal {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse().map(Self)
    }
}

impl AuthorizedPrincipal {
    pub fn into_inner(self) -> Principal {
        self.0
    }
}
