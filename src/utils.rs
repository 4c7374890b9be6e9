use rand::{Rng, distr::Alphanumeric};

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

pub fn generate_auth_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

pub fn month_key(added_at: &str) -> &str {
    // "2023-01-05T09:00:00Z" -> "2023-01"
    added_at.get(..7).unwrap_or(added_at)
}
