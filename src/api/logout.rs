use axum::{Extension, response::Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::management::{SESSION_COOKIE, SessionStore};

pub async fn logout(
    jar: CookieJar,
    Extension(sessions): Extension<SessionStore>,
) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        sessions.remove(cookie.value()).await;
    }

    let expired = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(expired), Redirect::to("/"))
}
