use reqwest::Client;

use crate::{
    config,
    types::{Token, TokenResponse},
};

/// Builds the authorization URL the user is redirected to at login.
///
/// The URL carries the client id, the registered redirect URI, the requested
/// scope, and a per-session `state` value. Spotify echoes `state` back on the
/// callback, where it is compared against the session to reject forged
/// callbacks.
///
/// # Example
///
/// ```
/// let url = authorize_url("PCmSkCUUoutP...");
/// // redirect the browser to `url`
/// ```
pub fn authorize_url(state: &str) -> String {
    format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&state={state}&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        state = state,
        scope = &config::spotify_scope()
    )
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth 2.0 authorization-code flow by posting the code,
/// the redirect URI it was issued for, and the client credentials to the
/// token endpoint. This is the final step of the login flow, reached from
/// the callback handler.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Complete token with access token, refresh token, and the
///   timestamp it was obtained at
/// - `Err(reqwest::Error)` - HTTP error, network error, or API error
///
/// # Error Handling
///
/// Common failure scenarios:
/// - Invalid or expired authorization code
/// - Redirect URI not matching the one registered with Spotify
/// - Network connectivity issues
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly (typically 10
/// minutes). The exchange happens immediately after receiving the code.
pub async fn exchange_code(code: &str) -> Result<Token, reqwest::Error> {
    let client_id = &config::spotify_client_id();
    let client_secret = &config::spotify_client_secret();
    let redirect_uri = &config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await?
        .error_for_status()?;

    let token_res = res.json::<TokenResponse>().await?;
    Ok(token_res.into_token(None))
}

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges a refresh token for a new access token when the current token
/// is about to expire. This allows the session to keep working without
/// sending the user back through the authorization flow.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - New token with fresh access token and updated expiration;
///   the refresh token is carried over when Spotify doesn't rotate it
/// - `Err(String)` - Error message describing the failure
///
/// # Error Conditions
///
/// Common failures include network connectivity issues, an invalid or
/// revoked refresh token, and Spotify API service errors. All of them are
/// treated as "session lost" by the caller.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, String> {
    let client_id = &config::spotify_client_id();
    let client_secret = &config::spotify_client_secret();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let token_res = res
        .json::<TokenResponse>()
        .await
        .map_err(|e| e.to_string())?;

    Ok(token_res.into_token(Some(refresh_token)))
}
