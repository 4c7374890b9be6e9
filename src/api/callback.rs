use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    management::{SESSION_COOKIE, SessionStore, TokenManager},
    spotify, warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
    Extension(sessions): Extension<SessionStore>,
) -> Response {
    let Some(session_id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
        return Html("<h4>Missing session. Start over at <a href=\"/\">login</a>.</h4>")
            .into_response();
    };
    let Some(mut session) = sessions.get(&session_id).await else {
        return Html("<h4>Unknown session. Start over at <a href=\"/\">login</a>.</h4>")
            .into_response();
    };

    if let Some(error) = params.get("error") {
        warning!("Authorization was denied: {}", error);
        return Html("<h4>Authorization was denied.</h4>").into_response();
    }

    // Reject callbacks that don't echo the state issued at login.
    match (&session.auth_state, params.get("state")) {
        (Some(expected), Some(received)) if expected == received => {}
        _ => {
            warning!("OAuth state mismatch for session");
            return Html("<h4>State mismatch. Start over at <a href=\"/\">login</a>.</h4>")
                .into_response();
        }
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            session.auth_state = None;
            session.tokens = TokenManager::new(token);
            sessions.put(&session_id, session).await;
            Redirect::to("/chart").into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>").into_response()
        }
    }
}
