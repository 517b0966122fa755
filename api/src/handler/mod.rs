pub mod attendance;
pub mod event;
pub mod health;
pub mod participant;
pub mod registration;
pub mod user;
