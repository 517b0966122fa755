pub mod attendance;
pub mod auth;
pub mod event;
pub mod id;
pub mod participant;
pub mod patch;
pub mod registration;
pub mod role;
pub mod user;
