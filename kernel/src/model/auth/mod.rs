use crate::model::id::{StudentId, UserId};
use shared::error::AppError;
use std::str::FromStr;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

/// The identity an access token was issued to. Participants and staff
/// users live in separate namespaces, so the prefix is part of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Participant(StudentId),
    User(UserId),
}

const PARTICIPANT_PREFIX: &str = "participant:";
const USER_PREFIX: &str = "user:";

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Principal::Participant(id) => write!(f, "{PARTICIPANT_PREFIX}{id}"),
            Principal::User(id) => write!(f, "{USER_PREFIX}{id}"),
        }
    }
}

impl FromStr for Principal {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix(PARTICIPANT_PREFIX) {
            return Ok(Principal::Participant(StudentId::new(id)));
        }
        if let Some(id) = s.strip_prefix(USER_PREFIX) {
            return id.parse().map(Principal::User);
        }
        Err(AppError::ConversionEntityError(format!(
            "unknown session subject: {s}"
        )))
    }
}
