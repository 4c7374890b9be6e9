use std::collections::HashMap;

use genregraph::management::{ArtistGenreManager, distinct_primary_artists};
use genregraph::spotify::artists::ARTIST_LOOKUP_LIMIT;
use genregraph::stats::{
    StatsError, TOP_GENRE_COUNT, count_genre_likes, likes_per_month, top_genres,
};
use genregraph::types::{SavedTrack, Track, TrackArtist};

// Helper function to create a saved track with a single artist
fn create_saved_track(artist_id: &str, added_at: &str) -> SavedTrack {
    SavedTrack {
        added_at: added_at.to_string(),
        track: Track {
            name: format!("{}_track", artist_id),
            artists: vec![TrackArtist {
                id: artist_id.to_string(),
                name: format!("{}_name", artist_id),
            }],
        },
    }
}

// Helper function to create a saved track without any artists
fn create_artistless_track(added_at: &str) -> SavedTrack {
    SavedTrack {
        added_at: added_at.to_string(),
        track: Track {
            name: "orphan_track".to_string(),
            artists: Vec::new(),
        },
    }
}

// Helper function to build an artist genre map from literals
fn create_genre_map(entries: &[(&str, &[&str])]) -> ArtistGenreManager {
    let mut genres: HashMap<String, Vec<String>> = HashMap::new();
    for (artist_id, artist_genres) in entries {
        genres.insert(
            artist_id.to_string(),
            artist_genres.iter().map(|g| g.to_string()).collect(),
        );
    }
    ArtistGenreManager::new(genres)
}

#[test]
fn test_count_genre_likes_per_genre_totals() {
    let tracks = vec![
        create_saved_track("a1", "2023-01-05"),
        create_saved_track("a1", "2023-02-10"),
        create_saved_track("a2", "2023-02-11"),
    ];
    let genre_map = create_genre_map(&[("a1", &["pop", "rock"]), ("a2", &["pop"])]);

    let likes = count_genre_likes(&tracks, &genre_map);

    // Each genre counts the tracks whose primary artist carries it
    assert_eq!(likes.get("pop"), Some(&3));
    assert_eq!(likes.get("rock"), Some(&2));
    assert_eq!(likes.len(), 2);
}

#[test]
fn test_count_genre_likes_ignores_trackless_genres() {
    let tracks = vec![
        create_saved_track("no_genres", "2023-01-05"),
        create_saved_track("unresolved", "2023-01-06"),
        create_artistless_track("2023-01-07"),
    ];
    // "unresolved" is deliberately absent from the map
    let genre_map = create_genre_map(&[("no_genres", &[])]);

    let likes = count_genre_likes(&tracks, &genre_map);

    // A zero-genre artist, an unresolved artist, and a track without artists
    // all contribute nothing
    assert!(likes.is_empty());
}

#[test]
fn test_top_genres_limits_to_requested_count() {
    let mut likes = HashMap::new();
    likes.insert("pop".to_string(), 10u32);
    likes.insert("rock".to_string(), 8);
    likes.insert("jazz".to_string(), 6);
    likes.insert("folk".to_string(), 4);
    likes.insert("metal".to_string(), 2);
    likes.insert("ambient".to_string(), 1);

    let top = top_genres(&likes, TOP_GENRE_COUNT);

    // Descending by count, cut off at four
    assert_eq!(top, vec!["pop", "rock", "jazz", "folk"]);
}

#[test]
fn test_top_genres_with_fewer_genres_than_count() {
    let mut likes = HashMap::new();
    likes.insert("pop".to_string(), 3u32);
    likes.insert("rock".to_string(), 1);

    let top = top_genres(&likes, TOP_GENRE_COUNT);

    // min(N, distinct genres) entries
    assert_eq!(top.len(), 2);
    assert_eq!(top, vec!["pop", "rock"]);
}

#[test]
fn test_top_genres_tie_break_is_lexicographic() {
    let mut likes = HashMap::new();
    likes.insert("rock".to_string(), 5u32);
    likes.insert("ambient".to_string(), 5);
    likes.insert("pop".to_string(), 5);

    let top = top_genres(&likes, 2);

    // Equal counts fall back to ascending label order
    assert_eq!(top, vec!["ambient", "pop"]);
}

#[test]
fn test_likes_per_month_drops_the_month_in_progress() {
    // Fetch order is newest first
    let tracks = vec![
        create_saved_track("a1", "2023-02-10"),
        create_saved_track("a1", "2023-01-05"),
    ];
    let genre_map = create_genre_map(&[("a1", &["pop"])]);
    let top = vec!["pop".to_string()];

    let monthly = likes_per_month(&tracks, &top, &genre_map).unwrap();

    // Only January is flushed; February is still in progress when the walk
    // ends and never appears
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly["2023-01"].get("pop"), Some(&1));
}

#[test]
fn test_likes_per_month_accumulates_across_months() {
    let tracks = vec![
        create_saved_track("a2", "2023-03-20"),
        create_saved_track("a2", "2023-02-14"),
        create_saved_track("a1", "2023-02-03"),
        create_saved_track("a1", "2023-01-05"),
    ];
    let genre_map = create_genre_map(&[("a1", &["pop"]), ("a2", &["rock"])]);
    let top = vec!["pop".to_string(), "rock".to_string()];

    let monthly = likes_per_month(&tracks, &top, &genre_map).unwrap();

    // January and February are flushed, March is dropped
    let months: Vec<&String> = monthly.keys().collect();
    assert_eq!(months, vec!["2023-01", "2023-02"]);

    // Snapshots are cumulative, with a zeroed entry for every top genre
    assert_eq!(monthly["2023-01"].get("pop"), Some(&1));
    assert_eq!(monthly["2023-01"].get("rock"), Some(&0));
    assert_eq!(monthly["2023-02"].get("pop"), Some(&2));
    assert_eq!(monthly["2023-02"].get("rock"), Some(&1));

    // Counters never decrease from one month to the next
    for genre in &top {
        let mut previous = 0u32;
        for counts in monthly.values() {
            let current = counts[genre.as_str()];
            assert!(current >= previous);
            previous = current;
        }
    }
}

#[test]
fn test_likes_per_month_ignores_genres_outside_the_top_set() {
    let tracks = vec![
        create_saved_track("a1", "2023-02-10"),
        create_saved_track("a2", "2023-01-08"),
        create_saved_track("a1", "2023-01-05"),
    ];
    let genre_map = create_genre_map(&[("a1", &["pop", "noise"]), ("a2", &["jazz"])]);
    let top = vec!["pop".to_string()];

    let monthly = likes_per_month(&tracks, &top, &genre_map).unwrap();

    // Only the intersection with the top set is counted; "noise" and "jazz"
    // never show up
    assert_eq!(monthly["2023-01"].len(), 1);
    assert_eq!(monthly["2023-01"].get("pop"), Some(&1));
}

#[test]
fn test_likes_per_month_fails_on_empty_library() {
    let genre_map = create_genre_map(&[]);
    let top = vec!["pop".to_string()];

    let result = likes_per_month(&[], &top, &genre_map);

    assert_eq!(result.unwrap_err(), StatsError::EmptyLibrary);
}

#[test]
fn test_distinct_primary_artists_dedup() {
    let tracks = vec![
        create_saved_track("a1", "2023-03-01"),
        create_saved_track("a2", "2023-02-01"),
        create_saved_track("a1", "2023-01-01"),
        create_artistless_track("2023-01-01"),
    ];

    let ids = distinct_primary_artists(&tracks);

    // Duplicates collapse, artistless tracks contribute nothing
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"a1".to_string()));
    assert!(ids.contains(&"a2".to_string()));
}

#[test]
fn test_artist_lookup_batch_boundaries() {
    let ids: Vec<String> = (0..120).map(|i| format!("artist_{}", i)).collect();

    let batches: Vec<&[String]> = ids.chunks(ARTIST_LOOKUP_LIMIT).collect();

    // ceil(120 / 50) = 3 lookup calls
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 50);
    assert_eq!(batches[1].len(), 50);
    assert_eq!(batches[2].len(), 20);
    assert_eq!(batches[0][0], "artist_0");
    assert_eq!(batches[1][0], "artist_50");
    assert_eq!(batches[2][0], "artist_100");
    assert_eq!(batches[2][19], "artist_119");
}

#[test]
fn test_pipeline_is_deterministic() {
    let tracks = vec![
        create_saved_track("a2", "2023-03-20"),
        create_saved_track("a1", "2023-02-03"),
        create_saved_track("a1", "2023-01-05"),
    ];
    let genre_map = create_genre_map(&[("a1", &["pop"]), ("a2", &["rock"])]);

    let first_likes = count_genre_likes(&tracks, &genre_map);
    let first_top = top_genres(&first_likes, TOP_GENRE_COUNT);
    let first_monthly = likes_per_month(&tracks, &first_top, &genre_map).unwrap();

    let second_likes = count_genre_likes(&tracks, &genre_map);
    let second_top = top_genres(&second_likes, TOP_GENRE_COUNT);
    let second_monthly = likes_per_month(&tracks, &second_top, &genre_map).unwrap();

    // Same frozen library, same result
    assert_eq!(first_likes, second_likes);
    assert_eq!(first_top, second_top);
    assert_eq!(first_monthly, second_monthly);
}
