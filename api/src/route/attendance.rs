use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::attendance::{record_attendance, show_attendance_list, show_event_attendance};

pub fn build_attendance_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/api/attendance", post(record_attendance))
        .route("/api/event_attendance/:event_id", get(show_attendance_list))
        .route("/attendance/:event_id", get(show_event_attendance))
}
