use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::{
    participant::{
        login_participant, logout_participant, show_participant_details, signup_participant,
    },
    user::{login_user, logout_user, signup_user},
};

pub fn build_auth_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/signup", post(signup_user))
        .route("/login", post(login_user))
        .route("/logout", post(logout_user));

    let participant_routers = Router::new()
        .route("/signup", post(signup_participant))
        .route("/login", post(login_participant))
        .route("/logout", post(logout_participant))
        .route("/details", post(show_participant_details));

    Router::new()
        .nest("/api/user", user_routers)
        .nest("/api/participant", participant_routers)
}
