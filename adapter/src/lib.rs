pub mod credential;
pub mod database;
pub mod qr;
pub mod redis;
pub mod repository;
