use reqwest::Client;

use crate::{config, types::{Artist, SeveralArtistsResponse}};

/// Maximum number of ids per `/artists` lookup (Spotify API limit).
pub const ARTIST_LOOKUP_LIMIT: usize = 50;

/// Retrieves metadata for multiple artists in a single API request.
///
/// Combines up to [`ARTIST_LOOKUP_LIMIT`] artist ids into one comma-joined
/// request. This is the only way the service learns genre tags — Spotify
/// assigns genres to artists, not to tracks.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `ids` - Artist ids to look up; the caller is responsible for keeping a
///   batch within the API limit
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - Artist records with their genre lists (possibly
///   empty per artist)
/// - `Err(reqwest::Error)` - HTTP error, network error, or API error
pub async fn get_several_artists(
    token: &str,
    ids: &[String],
) -> Result<Vec<Artist>, reqwest::Error> {
    let artist_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{uri}/artists?ids={artist_ids}",
        uri = &config::spotify_apiurl(),
        artist_ids = artist_ids
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SeveralArtistsResponse>().await?;
    Ok(res.artists)
}
