use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{
    auth::{event::CreateToken, Principal},
    id::StudentId,
    participant::event::CreateParticipant,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedParticipant,
    model::{
        participant::{
            CreateParticipantRequest, LoginParticipantRequest, ParticipantDetailsRequest,
            ParticipantDetailsResponse, ParticipantLoginResponse,
        },
        MessageResponse,
    },
};

pub async fn signup_participant(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateParticipantRequest>, AppError>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    req.validate(&())?;

    registry
        .participant_repository()
        .create(CreateParticipant::from(req))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

pub async fn login_participant(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<LoginParticipantRequest>, AppError>,
) -> AppResult<Json<ParticipantLoginResponse>> {
    req.validate(&())?;
    let student_id = StudentId::new(req.student_id.unwrap_or_default());
    let password = req.password.unwrap_or_default();

    let student_id = registry
        .auth_repository()
        .verify_participant(&student_id, &password)
        .await?;
    let participant = registry
        .participant_repository()
        .find_by_id(&student_id)
        .await?
        .ok_or(AppError::UnauthenticatedError)?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(Principal::Participant(student_id)))
        .await?;

    Ok(Json(ParticipantLoginResponse::new(access_token, participant)))
}

pub async fn logout_participant(
    participant: AuthorizedParticipant,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(participant.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn show_participant_details(
    participant: AuthorizedParticipant,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<ParticipantDetailsRequest>, AppError>,
) -> AppResult<Json<ParticipantDetailsResponse>> {
    req.validate(&())?;
    let student_id = StudentId::new(req.student_id.unwrap_or_default());

    // 他の参加者の情報は参照させない
    if &student_id != participant.id() {
        return Err(AppError::ForbiddenOperation(
            "You can only view your own details".into(),
        ));
    }

    registry
        .participant_repository()
        .find_by_id(&student_id)
        .await?
        .map(ParticipantDetailsResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound("Participant not found".into()))
}
