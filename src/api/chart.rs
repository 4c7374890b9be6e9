use axum::{
    Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    graph, info,
    management::{ArtistGenreManager, SESSION_COOKIE, SessionStore},
    spotify, stats, warning,
};

/// Runs the whole pipeline for the authenticated user and renders the chart
/// page: fetch the library, resolve genres, count likes, pick the top
/// genres, bucket them per month, and draw the image.
pub async fn chart(jar: CookieJar, Extension(sessions): Extension<SessionStore>) -> Response {
    let Some(session_id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
        return Redirect::to("/").into_response();
    };
    let Some(mut session) = sessions.get(&session_id).await else {
        return Redirect::to("/").into_response();
    };

    // Refreshes behind the scenes when the token is about to expire; anything
    // unrecoverable sends the user back through the login flow.
    let access_token = match session.tokens.access_token().await {
        Ok(token) => {
            sessions.put(&session_id, session).await;
            token
        }
        Err(e) => {
            warning!("No usable token for session: {}", e);
            return Redirect::to("/").into_response();
        }
    };

    let tracks = match spotify::tracks::get_saved_tracks(&access_token).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Failed to fetch saved tracks: {}", e);
            return server_error();
        }
    };
    info!("Fetched {} saved tracks", tracks.len());

    let genre_map = match ArtistGenreManager::resolve(&access_token, &tracks).await {
        Ok(genre_map) => genre_map,
        Err(e) => {
            warning!("Failed to resolve artist genres: {}", e);
            return server_error();
        }
    };
    info!("Resolved genres for {} artists", genre_map.count_artists());

    let genre_likes = stats::count_genre_likes(&tracks, &genre_map);
    let top_genres = stats::top_genres(&genre_likes, stats::TOP_GENRE_COUNT);

    let monthly = match stats::likes_per_month(&tracks, &top_genres, &genre_map) {
        Ok(monthly) => monthly,
        Err(e) => {
            warning!("Cannot bucket likes per month: {}", e);
            return server_error();
        }
    };

    let image = match graph::render_data_uri(&monthly, &top_genres) {
        Ok(image) => image,
        Err(e) => {
            warning!("Failed to render chart: {}", e);
            return server_error();
        }
    };

    Html(page(&image)).into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<h4>Something went wrong while building your chart.</h4>"),
    )
        .into_response()
}

fn page(image: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Your genre history</title></head>\n\
         <body>\n\
         <h2>Your genre history</h2>\n\
         <img src=\"{image}\" alt=\"Likes per genre and month\">\n\
         <p><a href=\"/logout\">Log out</a></p>\n\
         </body>\n\
         </html>\n"
    )
}
