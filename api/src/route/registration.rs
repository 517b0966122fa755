use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::registration::{
    register_participant, show_registration_count, show_registration_list,
};

pub fn build_registration_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/api/register", post(register_participant))
        .route("/api/event_registration/:event_id", get(show_registration_list))
        .route("/registrations/:event_id", get(show_registration_count))
}
