use crate::{CatalogPlaylist, CatalogSong};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Response is missing the playlist data")]
    MissingPlaylistData,
}

#[derive(Deserialize)]
struct SearchResponse {
    results: SearchResults,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchResults {
    songs: Option<SongsSection>,
}

#[derive(Deserialize)]
struct SongsSection {
    data: Vec<SongResource>,
}

#[derive(Deserialize)]
struct SongResource {
    id: String,
    attributes: SongAttributes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SongAttributes {
    name: String,
    artist_name: String,
}

// The songs section is absent entirely when the search matched nothing.
pub(crate) fn parse_search_response(raw_json: &str) -> Result<Vec<CatalogSong>, ParseError> {
    let response = serde_json::from_str::<SearchResponse>(raw_json)?;

    let songs = match response.results.songs {
        Some(section) => section.data,
        None => return Ok(vec![]),
    };

    Ok(songs
        .into_iter()
        .map(|song| CatalogSong {
            id: song.id.into(),
            title: song.attributes.name,
            artist_name: song.attributes.artist_name,
        })
        .collect())
}

#[derive(Deserialize)]
struct PlaylistResponse {
    data: Vec<PlaylistResource>,
}

#[derive(Deserialize)]
struct PlaylistResource {
    id: String,
    attributes: PlaylistAttributes,
}

#[derive(Deserialize)]
struct PlaylistAttributes {
    name: String,
}

pub(crate) fn parse_playlist_response(raw_json: &str) -> Result<CatalogPlaylist, ParseError> {
    let response = serde_json::from_str::<PlaylistResponse>(raw_json)?;

    let playlist = response
        .data
        .into_iter()
        .next()
        .ok_or(ParseError::MissingPlaylistData)?;

    Ok(CatalogPlaylist {
        id: playlist.id.into(),
        name: playlist.attributes.name,
    })
}
