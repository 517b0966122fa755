use crate::model::auth::{AccessToken, Principal};
use uuid::Uuid;

pub struct CreateToken {
    pub principal: Principal,
    pub access_token: AccessToken,
}

impl CreateToken {
    pub fn new(principal: Principal) -> Self {
        let access_token = AccessToken(Uuid::new_v4().simple().to_string());
        Self {
            principal,
            access_token,
        }
    }
}
