use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, config, error, management::SessionStore};

pub async fn start_server(sessions: SessionStore) {
    let app = Router::new()
        .route("/", get(api::login))
        .route("/callback", get(api::callback))
        .route("/chart", get(api::chart))
        .route("/logout", get(api::logout))
        .route("/health", get(api::health))
        .layer(Extension(sessions));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
