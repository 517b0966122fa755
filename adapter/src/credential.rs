use shared::error::AppResult;

pub fn hash_password(password: &str) -> AppResult<String> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> AppResult<String> {
    bcrypt::hash(password, cost).map_err(Into::into)
}

pub fn verify_password(password: &str, digest: &str) -> AppResult<bool> {
    bcrypt::verify(password, digest).map_err(Into::into)
}
