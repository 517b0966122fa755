use garde::Validate;
use kernel::model::{
    auth::AccessToken,
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            username,
            email,
            role,
            ..
        } = value;
        Self {
            user_id,
            username,
            email,
            role: role.to_string(),
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct CreateUserRequest {
    #[garde(required, length(min = 1))]
    username: Option<String>,
    #[garde(required, length(min = 1))]
    password: Option<String>,
    #[garde(required, email)]
    email: Option<String>,
    #[garde(required, length(min = 1))]
    role: Option<String>,
}

// ロール名は大文字小文字を区別しない
fn parse_role(value: &str) -> AppResult<Role> {
    Role::from_str(value.trim()).map_err(|_| {
        let names: Vec<String> = Role::iter().map(|r| r.to_string()).collect();
        AppError::InvalidInput(format!("'role' must be one of: {}", names.join(", ")))
    })
}

// validate 済みの前提で変換する
impl TryFrom<CreateUserRequest> for CreateUser {
    type Error = AppError;
    fn try_from(value: CreateUserRequest) -> AppResult<Self> {
        let CreateUserRequest {
            username,
            password,
            email,
            role,
        } = value;
        Ok(CreateUser::new(
            username.unwrap_or_default(),
            email.unwrap_or_default(),
            password.unwrap_or_default(),
            parse_role(&role.unwrap_or_default())?,
        ))
    }
}

#[derive(Deserialize, Validate)]
pub struct LoginUserRequest {
    #[garde(required, length(min = 1))]
    pub username: Option<String>,
    #[garde(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserLoginResponse {
    pub message: String,
    pub access_token: String,
    pub user: UserResponse,
}

impl UserLoginResponse {
    pub fn new(access_token: AccessToken, user: User) -> Self {
        Self {
            message: "Login successful".into(),
            access_token: access_token.0,
            user: user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(role: &str) -> CreateUserRequest {
        serde_json::from_value(serde_json::json!({
            "username": "registrar",
            "password": "secret",
            "email": "registrar@example.edu",
            "role": role,
        }))
        .unwrap()
    }

    #[test]
    fn role_is_case_insensitive() {
        for name in ["admin", "Admin", " ADMIN "] {
            let event = CreateUser::try_from(signup(name)).unwrap();
            assert_eq!(event.role, Role::Admin);
        }
        let event = CreateUser::try_from(signup("Staff")).unwrap();
        assert_eq!(event.role, Role::Staff);
    }

    #[test]
    fn unknown_role_names_the_field() {
        let err = CreateUser::try_from(signup("Organizer")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_string(), "'role' must be one of: admin, staff");
    }

    #[test]
    fn empty_role_is_a_validation_error() {
        let report = signup("").validate(&()).unwrap_err();
        assert!(report.to_string().contains("role"));
    }

    #[test]
    fn signup_requires_a_valid_email() {
        let req: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "username": "registrar",
            "password": "secret",
            "email": "not-an-email",
            "role": "staff",
        }))
        .unwrap();
        let report = req.validate(&()).unwrap_err();
        assert!(report.to_string().contains("email"));
    }

    #[test]
    fn signup_converts_to_domain_event() {
        let req = signup("admin");
        req.validate(&()).unwrap();
        let event = CreateUser::try_from(req).unwrap();
        assert_eq!(event.username, "registrar");
        assert_eq!(event.role, Role::Admin);
    }
}
