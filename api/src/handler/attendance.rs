use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use garde::Validate;
use kernel::model::{attendance::AttendanceOutcome, id::EventId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::attendance::{
    AttendanceResponse, EventAttendanceResponse, ParticipantAttendanceResponse,
    RecordAttendanceRequest, RecordAttendanceResponse,
};

pub async fn record_attendance(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<RecordAttendanceRequest>, AppError>,
) -> AppResult<(StatusCode, Json<RecordAttendanceResponse>)> {
    req.validate(&())?;
    let event = req.into_event(Utc::now())?;

    let outcome = registry.attendance_repository().record(event).await?;
    let status = match &outcome {
        AttendanceOutcome::CheckedIn(_) => StatusCode::CREATED,
        AttendanceOutcome::CheckedOut(_) => StatusCode::OK,
    };
    tracing::info!(
        attendance_id = %outcome.attendance().attendance_id,
        status = %status,
        "attendance recorded"
    );

    Ok((status, Json(outcome.into())))
}

pub async fn show_attendance_list(
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<AttendanceResponse>>> {
    registry
        .attendance_repository()
        .find_by_event_id(event_id)
        .await
        .map(|rows| rows.into_iter().map(AttendanceResponse::from).collect())
        .map(Json)
}

pub async fn show_event_attendance(
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventAttendanceResponse>> {
    let rows = registry
        .attendance_repository()
        .find_by_event_id(event_id)
        .await?;
    if rows.is_empty() {
        return Err(AppError::EntityNotFound(
            "No attendance records found for this event".into(),
        ));
    }

    let participants = registry.participant_repository();
    let mut attendance = Vec::with_capacity(rows.len());
    for row in rows {
        // 参加者として登録されていない学籍番号の記録は含めない
        if let Some(participant) = participants.find_by_id(&row.student_id).await? {
            attendance.push(ParticipantAttendanceResponse::new(&participant, row));
        }
    }

    Ok(Json(EventAttendanceResponse {
        event_id,
        attendance,
    }))
}
