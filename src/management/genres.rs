use std::collections::{HashMap, HashSet};

use crate::{spotify, types::SavedTrack};

pub struct ArtistGenreManager {
    genres: HashMap<String, Vec<String>>,
}

impl ArtistGenreManager {
    pub fn new(genres: HashMap<String, Vec<String>>) -> Self {
        Self { genres }
    }

    /// Builds the artist-to-genres map for every primary artist in `tracks`.
    ///
    /// Lookups run in batches of up to 50 ids, so the number of API calls is
    /// ceil(distinct artists / 50). Aggregation must not start before this
    /// completes.
    pub async fn resolve(token: &str, tracks: &[SavedTrack]) -> Result<Self, reqwest::Error> {
        let artist_ids = distinct_primary_artists(tracks);
        let mut genres: HashMap<String, Vec<String>> = HashMap::with_capacity(artist_ids.len());

        for batch in artist_ids.chunks(spotify::artists::ARTIST_LOOKUP_LIMIT) {
            let artists = spotify::artists::get_several_artists(token, batch).await?;
            for artist in artists {
                genres.insert(artist.id, artist.genres);
            }
        }

        Ok(Self { genres })
    }

    pub fn genres_for(&self, artist_id: &str) -> Option<&Vec<String>> {
        self.genres.get(artist_id)
    }

    pub fn count_artists(&self) -> usize {
        self.genres.len()
    }
}

pub fn distinct_primary_artists(tracks: &[SavedTrack]) -> Vec<String> {
    let mut seen_ids = HashSet::new();
    let mut artist_ids = Vec::new();

    for track in tracks {
        if let Some(artist) = track.primary_artist() {
            if seen_ids.insert(artist.id.clone()) {
                artist_ids.push(artist.id.clone());
            }
        }
    }

    artist_ids
}
