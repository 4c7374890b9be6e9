use reqwest::Client;

use crate::{config, types::{SavedTrack, SavedTracksResponse}};

/// Page size for the saved-tracks listing; also the API's maximum.
pub const SAVED_TRACKS_PAGE_SIZE: usize = 50;

/// Retrieves the user's complete saved-track library.
///
/// Requests pages of 50 tracks with an increasing offset and appends each
/// page's items until a page comes back with fewer than 50 items, which
/// signals the end of the list (an empty first page means an empty library).
/// Tracks are returned in the order the API delivers them: most recently
/// liked first.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<SavedTrack>)` - The full library, newest first
/// - `Err(reqwest::Error)` - Network error, API error, or auth failure
///
/// # Error Handling
///
/// Errors propagate to the caller untouched; there is no retry. A library of
/// thousands of tracks simply takes one request per 50 tracks.
pub async fn get_saved_tracks(token: &str) -> Result<Vec<SavedTrack>, reqwest::Error> {
    let client = Client::new();
    let mut all_tracks: Vec<SavedTrack> = Vec::new();
    let mut offset = 0;

    loop {
        let api_url = format!(
            "{uri}/me/tracks?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            limit = SAVED_TRACKS_PAGE_SIZE,
            offset = offset
        );

        let response = client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<SavedTracksResponse>().await?;
        let page_len = page.items.len();
        all_tracks.extend(page.items);

        if page_len < SAVED_TRACKS_PAGE_SIZE {
            break;
        }
        offset += SAVED_TRACKS_PAGE_SIZE;
    }

    Ok(all_tracks)
}
