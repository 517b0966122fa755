use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use base64::{engine::general_purpose, Engine as _};
use chrono::Local;
use garde::Validate;
use kernel::model::{
    event::event::{CreateEvent, DeleteEvent, UpdateEvent},
    id::EventId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        event::{
            CreateEventRequest, CreatedEventResponse, EventResponse, QrCodeResponse,
            ReportResponse, UpdateEventRequest,
        },
        MessageResponse,
    },
};

fn event_not_found() -> AppError {
    AppError::EntityNotFound("Event not found".into())
}

pub async fn show_event(
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await
        .and_then(|event| match event {
            Some(event) => Ok(Json(event.into())),
            None => Err(event_not_found()),
        })
}

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventResponse>>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(|events| events.into_iter().map(EventResponse::from).collect())
        .map(Json)
}

pub async fn register_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateEventRequest>, AppError>,
) -> AppResult<(StatusCode, Json<CreatedEventResponse>)> {
    req.validate(&())?;
    let event = CreateEvent::try_from(req)?;

    let event_id = registry.event_repository().create(event).await?;
    tracing::info!(%event_id, user_id = %user.id(), "event created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedEventResponse {
            message: "Event created successfully".into(),
            event_id,
        }),
    ))
}

pub async fn update_event(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateEventRequest>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let update = UpdateEvent::try_from(req)?;

    registry
        .event_repository()
        .update(update)
        .await
        .map(|_| Json(MessageResponse::new("Event updated successfully")))
}

pub async fn delete_event(
    _user: AuthorizedUser,
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .event_repository()
        .delete(DeleteEvent::new(event_id))
        .await
        .map(|_| Json(MessageResponse::new("Event deleted successfully")))
}

pub async fn generate_qr_code(
    _user: AuthorizedUser,
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<QrCodeResponse>> {
    let event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(event_not_found)?;

    let png = registry.qr_encoder().encode(&event.qr_payload())?;

    Ok(Json(QrCodeResponse {
        event_name: event.event_name,
        qr_code: general_purpose::STANDARD.encode(png),
    }))
}

pub async fn show_report(State(registry): State<AppRegistry>) -> AppResult<Json<ReportResponse>> {
    // 「今日」はサーバーのローカル日付で判定する
    let today = Local::now().date_naive();
    registry
        .event_repository()
        .report(today)
        .await
        .map(ReportResponse::from)
        .map(Json)
}
