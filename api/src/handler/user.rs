use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{
    auth::{event::CreateToken, Principal},
    user::event::CreateUser,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        user::{CreateUserRequest, LoginUserRequest, UserLoginResponse},
        MessageResponse,
    },
};

pub async fn signup_user(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateUserRequest>, AppError>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    req.validate(&())?;

    let event = CreateUser::try_from(req)?;

    let user = registry.user_repository().create(event).await?;
    tracing::info!(user_id = %user.user_id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

pub async fn login_user(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<LoginUserRequest>, AppError>,
) -> AppResult<Json<UserLoginResponse>> {
    req.validate(&())?;
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user_id = registry
        .auth_repository()
        .verify_user(&username, &password)
        .await?;
    let user = registry
        .user_repository()
        .find_current_user(user_id)
        .await?
        .ok_or(AppError::UnauthenticatedError)?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(Principal::User(user_id)))
        .await?;

    Ok(Json(UserLoginResponse::new(access_token, user)))
}

pub async fn logout_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
