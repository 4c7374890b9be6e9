use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
    fmt,
};

use crate::{management::ArtistGenreManager, types::SavedTrack, utils};

/// How many genres make it into the chart.
pub const TOP_GENRE_COUNT: usize = 4;

pub type GenreLikes = HashMap<String, u32>;
pub type MonthlyLikes = BTreeMap<String, HashMap<String, u32>>;

#[derive(Debug, PartialEq)]
pub enum StatsError {
    EmptyLibrary,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptyLibrary => write!(f, "the library contains no saved tracks"),
        }
    }
}

impl std::error::Error for StatsError {}

pub fn count_genre_likes(tracks: &[SavedTrack], genre_map: &ArtistGenreManager) -> GenreLikes {
    let mut likes: GenreLikes = HashMap::new();

    for track in tracks {
        let Some(artist) = track.primary_artist() else {
            continue;
        };
        let Some(genres) = genre_map.genres_for(&artist.id) else {
            continue;
        };

        for genre in genres {
            *likes.entry(genre.clone()).or_insert(0) += 1;
        }
    }

    likes
}

pub fn top_genres(likes: &GenreLikes, count: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, &u32)> = likes.iter().collect();
    ranked.sort_by(|a, b| {
        match b.1.cmp(a.1) {
            Ordering::Equal => a.0.cmp(b.0), // tie-break: label ascending
            other => other,
        }
    });

    ranked
        .into_iter()
        .take(count)
        .map(|(genre, _)| genre.clone())
        .collect()
}

/// Cumulative likes per top genre at each month boundary.
///
/// `tracks` is expected in the order the library fetch returns it, newest
/// first; the walk runs over it in reverse so months accumulate
/// chronologically. The counters for a month are only flushed into the table
/// when the next month begins, so the month still in progress at the end of
/// the walk never appears in the result.
pub fn likes_per_month(
    tracks: &[SavedTrack],
    top_genres: &[String],
    genre_map: &ArtistGenreManager,
) -> Result<MonthlyLikes, StatsError> {
    let Some(oldest) = tracks.last() else {
        return Err(StatsError::EmptyLibrary);
    };

    let mut running: HashMap<String, u32> =
        top_genres.iter().map(|genre| (genre.clone(), 0)).collect();
    let mut monthly = MonthlyLikes::new();
    let mut current_month = utils::month_key(&oldest.added_at).to_string();

    for track in tracks.iter().rev() {
        let month = utils::month_key(&track.added_at);
        if month != current_month {
            monthly.insert(current_month, running.clone());
            current_month = month.to_string();
        }

        let Some(artist) = track.primary_artist() else {
            continue;
        };
        let Some(genres) = genre_map.genres_for(&artist.id) else {
            continue;
        };

        for genre in genres {
            // Only the top genres carry a counter; everything else is ignored.
            if let Some(count) = running.get_mut(genre) {
                *count += 1;
            }
        }
    }

    Ok(monthly)
}
