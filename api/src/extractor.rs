use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{
    auth::{AccessToken, Principal},
    id::{StudentId, UserId},
    participant::Participant,
    user::User,
};
use registry::AppRegistry;
use shared::error::AppError;

// リクエストの Bearer トークンから、ログイン中の主体を取り出す
async fn resolve_principal(
    parts: &mut Parts,
    registry: &AppRegistry,
) -> Result<(AccessToken, Principal), AppError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::UnauthorizedError)?;
    let access_token = AccessToken(bearer.token().to_string());

    let principal = registry
        .auth_repository()
        .fetch_principal_from_token(&access_token)
        .await?
        .ok_or(AppError::UnauthorizedError)?;

    Ok((access_token, principal))
}

/// A staff account authenticated by its access token.
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let (access_token, principal) = resolve_principal(parts, registry).await?;

        let Principal::User(user_id) = principal else {
            return Err(AppError::ForbiddenOperation(
                "This operation requires a staff account".into(),
            ));
        };

        // トークンが残っていてもアカウントが消えていれば認証失敗とする
        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await?
            .ok_or(AppError::UnauthorizedError)?;

        Ok(Self { access_token, user })
    }
}

/// A participant authenticated by its access token.
pub struct AuthorizedParticipant {
    pub access_token: AccessToken,
    pub participant: Participant,
}

impl AuthorizedParticipant {
    pub fn id(&self) -> &StudentId {
        &self.participant.student_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedParticipant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let (access_token, principal) = resolve_principal(parts, registry).await?;

        let Principal::Participant(student_id) = principal else {
            return Err(AppError::ForbiddenOperation(
                "This operation requires a participant account".into(),
            ));
        };

        let participant = registry
            .participant_repository()
            .find_by_id(&student_id)
            .await?
            .ok_or(AppError::UnauthorizedError)?;

        Ok(Self {
            access_token,
            participant,
        })
    }
}
