use chrono::Utc;
use genregraph::management::{TokenManager, TokenState};
use genregraph::types::Token;

// Helper function to create a token obtained `age_secs` seconds ago
fn create_token(expires_in: u64, age_secs: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "user-library-read".to_string(),
        expires_in,
        obtained_at: Utc::now().timestamp() as u64 - age_secs,
    }
}

#[test]
fn test_state_absent_without_token() {
    let manager = TokenManager::default();
    assert_eq!(manager.state(), TokenState::Absent);
}

#[test]
fn test_state_valid_for_fresh_token() {
    let manager = TokenManager::new(create_token(3600, 0));
    assert_eq!(manager.state(), TokenState::Valid);
}

#[test]
fn test_state_expiring_inside_the_safety_margin() {
    // 3590 of 3600 seconds used up, within the 60 second margin
    let manager = TokenManager::new(create_token(3600, 3590));
    assert_eq!(manager.state(), TokenState::Expiring);

    // A fully expired token also counts as expiring (refresh needed)
    let manager = TokenManager::new(create_token(3600, 7200));
    assert_eq!(manager.state(), TokenState::Expiring);
}

#[test]
fn test_invalidate_drops_the_token() {
    let mut manager = TokenManager::new(create_token(3600, 0));
    assert!(manager.current_token().is_some());

    manager.invalidate();

    assert_eq!(manager.state(), TokenState::Absent);
    assert!(manager.current_token().is_none());
}
