use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::event::{
    delete_event, generate_qr_code, register_event, show_event, show_event_list, show_report,
    update_event,
};

pub fn build_event_routers() -> Router<AppRegistry> {
    let events_routers = Router::new()
        .route("/", get(show_event_list))
        .route("/", post(register_event))
        .route("/", put(update_event))
        .route("/:event_id", delete(delete_event))
        .route("/:event_id/generate-qr", get(generate_qr_code));

    Router::new()
        .route("/events/:event_id", get(show_event))
        .route("/api/reports", get(show_report))
        .nest("/api/events", events_routers)
}
