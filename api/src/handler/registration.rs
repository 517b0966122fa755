use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use garde::Validate;
use kernel::model::id::EventId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    registration::{RegisterRequest, RegistrationCountResponse, RegistrationResponse},
    MessageResponse,
};

pub async fn register_participant(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    req.validate(&())?;
    let event = req.into_event(Utc::now())?;

    let registration_id = registry.registration_repository().create(event).await?;
    tracing::info!(%registration_id, "participant registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful!")),
    ))
}

pub async fn show_registration_list(
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RegistrationResponse>>> {
    registry
        .registration_repository()
        .find_by_event_id(event_id)
        .await
        .map(|rows| rows.into_iter().map(RegistrationResponse::from).collect())
        .map(Json)
}

pub async fn show_registration_count(
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RegistrationCountResponse>> {
    registry
        .registration_repository()
        .count_by_event_id(event_id)
        .await
        .map(|registration_count| {
            Json(RegistrationCountResponse {
                event_id,
                registration_count,
            })
        })
}
