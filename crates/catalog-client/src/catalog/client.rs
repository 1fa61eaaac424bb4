use crate::catalog::parser::{parse_playlist_response, parse_search_response, ParseError};
use crate::{CatalogAuthorization, CatalogPlaylist, CatalogSong, CatalogSongId};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

const MUSIC_USER_TOKEN_HEADER: &str = "Music-User-Token";
const SEARCH_RESULTS_LIMIT: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum MusicCatalogClientError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error("Music catalog responded with unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

pub struct MusicCatalogClient {
    client: Client,
    endpoint: String,
    storefront: String,
}

impl MusicCatalogClient {
    pub fn create(
        endpoint: &str,
        storefront: &str,
        developer_token: &str,
        music_user_token: &str,
    ) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", developer_token))
                .expect("Invalid developer token"),
        );
        headers.insert(
            MUSIC_USER_TOKEN_HEADER,
            HeaderValue::from_str(music_user_token).expect("Invalid music user token"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP Client");

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            storefront: storefront.to_string(),
        }
    }

    pub async fn authorize(&self) -> Result<CatalogAuthorization, MusicCatalogClientError> {
        let response = self
            .client
            .get(format!("{}/v1/me/library/playlists", self.endpoint))
            .query(&[("limit", "1")])
            .send()
            .await?;

        let authorization = match response.status() {
            status if status.is_success() => CatalogAuthorization::Authorized,
            StatusCode::UNAUTHORIZED => CatalogAuthorization::Denied,
            StatusCode::FORBIDDEN => CatalogAuthorization::Restricted,
            status => return Err(MusicCatalogClientError::UnexpectedStatus(status)),
        };

        debug!(%authorization, "Music catalog authorization checked");

        Ok(authorization)
    }

    pub async fn search_songs(
        &self,
        term: &str,
    ) -> Result<Vec<CatalogSong>, MusicCatalogClientError> {
        #[derive(Serialize)]
        struct Query {
            term: String,
            types: String,
            limit: u32,
        }

        let query = Query {
            term: term.to_string(),
            types: "songs".to_string(),
            limit: SEARCH_RESULTS_LIMIT,
        };

        let response = self
            .client
            .get(format!(
                "{}/v1/catalog/{}/search",
                self.endpoint, self.storefront
            ))
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let raw_json = response.text().await?;

        Ok(parse_search_response(&raw_json)?)
    }

    pub async fn create_playlist(
        &self,
        name: &str,
        description: &str,
        song_ids: &[CatalogSongId],
    ) -> Result<CatalogPlaylist, MusicCatalogClientError> {
        let response = self
            .client
            .post(format!("{}/v1/me/library/playlists", self.endpoint))
            .json(&make_create_playlist_body(name, description, song_ids))
            .send()
            .await?
            .error_for_status()?;

        let raw_json = response.text().await?;

        Ok(parse_playlist_response(&raw_json)?)
    }
}

#[derive(Serialize)]
pub(crate) struct CreatePlaylistBody {
    attributes: CreatePlaylistAttributes,
    relationships: CreatePlaylistRelationships,
}

#[derive(Serialize)]
struct CreatePlaylistAttributes {
    name: String,
    description: String,
}

#[derive(Serialize)]
struct CreatePlaylistRelationships {
    tracks: CreatePlaylistTracks,
}

#[derive(Serialize)]
struct CreatePlaylistTracks {
    data: Vec<CreatePlaylistTrack>,
}

#[derive(Serialize)]
struct CreatePlaylistTrack {
    id: String,
    #[serde(rename = "type")]
    resource_type: String,
}

pub(crate) fn make_create_playlist_body(
    name: &str,
    description: &str,
    song_ids: &[CatalogSongId],
) -> CreatePlaylistBody {
    CreatePlaylistBody {
        attributes: CreatePlaylistAttributes {
            name: name.to_string(),
            description: description.to_string(),
        },
        relationships: CreatePlaylistRelationships {
            tracks: CreatePlaylistTracks {
                data: song_ids
                    .iter()
                    .map(|id| CreatePlaylistTrack {
                        id: id.to_string(),
                        resource_type: "songs".to_string(),
                    })
                    .collect(),
            },
        },
    }
}
