use axum::Router;
use registry::AppRegistry;

pub mod attendance;
pub mod auth;
pub mod event;
pub mod health;
pub mod registration;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(event::build_event_routers())
        .merge(auth::build_auth_routers())
        .merge(registration::build_registration_routers())
        .merge(attendance::build_attendance_routers())
}
