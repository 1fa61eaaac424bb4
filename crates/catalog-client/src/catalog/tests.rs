use crate::catalog::client::make_create_playlist_body;
use crate::catalog::parser::{parse_playlist_response, parse_search_response};
use crate::{CatalogPlaylistId, CatalogSong, CatalogSongId};

#[test]
fn test_parsing_of_search_response() {
    let songs = parse_search_response(include_str!("fixtures/search_response.json"))
        .expect("Expected successful parse results");

    let expected_songs = vec![
        CatalogSong {
            id: CatalogSongId("1121499014".into()),
            title: "Crying".into(),
            artist_name: "Roy Orbison".into(),
        },
        CatalogSong {
            id: CatalogSongId("1440857781".into()),
            title: "Crying (Remastered)".into(),
            artist_name: "Roy Orbison".into(),
        },
    ];

    assert_eq!(expected_songs, songs);
}

#[test]
fn test_parsing_of_search_response_without_matches() {
    let songs = parse_search_response(r#"{"results":{},"meta":{"results":{"order":[]}}}"#)
        .expect("Expected successful parse results");

    assert!(songs.is_empty());
}

#[test]
fn test_parsing_of_playlist_response() {
    let playlist = parse_playlist_response(include_str!("fixtures/playlist_response.json"))
        .expect("Expected successful parse results");

    assert_eq!(playlist.id, CatalogPlaylistId("p.qQXLxPLtA75zg8e".into()));
    assert_eq!(playlist.name, "Hits of 1961");
}

#[test]
fn test_parsing_of_playlist_response_without_data() {
    let result = parse_playlist_response(r#"{"data":[]}"#);

    assert!(result.is_err());
}

#[test]
fn test_create_playlist_body_shape() {
    let body = make_create_playlist_body(
        "Hits of 1961",
        "Created by playlist-bot",
        &[
            CatalogSongId("1121499014".into()),
            CatalogSongId("1440857781".into()),
        ],
    );

    let value = serde_json::to_value(&body).expect("Expected serializable body");

    assert_eq!(
        value,
        serde_json::json!({
            "attributes": {
                "name": "Hits of 1961",
                "description": "Created by playlist-bot"
            },
            "relationships": {
                "tracks": {
                    "data": [
                        { "id": "1121499014", "type": "songs" },
                        { "id": "1440857781", "type": "songs" }
                    ]
                }
            }
        })
    );
}
