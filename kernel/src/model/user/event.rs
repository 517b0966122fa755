use crate::model::role::Role;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
