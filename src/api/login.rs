use axum::{Extension, response::Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    management::{SESSION_COOKIE, Session, SessionStore},
    spotify, utils,
};

pub async fn login(
    jar: CookieJar,
    Extension(sessions): Extension<SessionStore>,
) -> (CookieJar, Redirect) {
    // A login always starts from a clean slate; drop any previous session.
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        sessions.remove(cookie.value()).await;
    }

    let auth_state = utils::generate_auth_state();
    let session_id = sessions
        .create(Session {
            auth_state: Some(auth_state.clone()),
            ..Session::default()
        })
        .await;

    let cookie = Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .build();

    let auth_url = spotify::auth::authorize_url(&auth_state);
    (jar.add(cookie), Redirect::temporary(&auth_url))
}
