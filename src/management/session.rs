use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{management::TokenManager, utils};

pub const SESSION_COOKIE: &str = "session_id";

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub auth_state: Option<String>,
    pub tokens: TokenManager,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, session: Session) -> String {
        let session_id = utils::generate_session_id();
        self.inner.lock().await.insert(session_id.clone(), session);
        session_id
    }

    pub async fn get(&self, session_id: &str) -> Option<Session> {
        self.inner.lock().await.get(session_id).cloned()
    }

    pub async fn put(&self, session_id: &str, session: Session) {
        self.inner
            .lock()
            .await
            .insert(session_id.to_string(), session);
    }

    pub async fn remove(&self, session_id: &str) {
        self.inner.lock().await.remove(session_id);
    }
}
