use std::fmt;

use chrono::Utc;

use crate::{spotify, types::Token};

/// Tokens are refreshed this many seconds before their stated expiry.
const EXPIRY_MARGIN_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenState {
    Absent,
    Valid,
    Expiring,
    Refreshed,
}

#[derive(Debug)]
pub enum AuthError {
    NotAuthenticated,
    Refresh(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "no token in session"),
            AuthError::Refresh(e) => write!(f, "token refresh failed: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

#[derive(Debug, Clone, Default)]
pub struct TokenManager {
    token: Option<Token>,
    refreshed: bool,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager {
            token: Some(token),
            refreshed: false,
        }
    }

    pub fn state(&self) -> TokenState {
        match &self.token {
            None => TokenState::Absent,
            Some(token) if Self::near_expiry(token) => TokenState::Expiring,
            Some(_) if self.refreshed => TokenState::Refreshed,
            Some(_) => TokenState::Valid,
        }
    }

    /// Returns an access token fit for use, refreshing it first when it is
    /// within the expiry margin.
    pub async fn access_token(&mut self) -> Result<String, AuthError> {
        let Some(token) = self.token.as_ref() else {
            return Err(AuthError::NotAuthenticated);
        };

        if !Self::near_expiry(token) {
            return Ok(token.access_token.clone());
        }

        let new_token = spotify::auth::refresh_token(&token.refresh_token)
            .await
            .map_err(AuthError::Refresh)?;
        let access_token = new_token.access_token.clone();
        self.token = Some(new_token);
        self.refreshed = true;

        Ok(access_token)
    }

    pub fn invalidate(&mut self) {
        self.token = None;
        self.refreshed = false;
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn near_expiry(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= token.obtained_at + token.expires_in - EXPIRY_MARGIN_SECS
    }
}
