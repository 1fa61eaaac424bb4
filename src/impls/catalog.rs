use crate::services::{
    AuthorizationStatus, MusicLibraryError, MusicLibraryTrait, PlaylistHandle, PlaylistRequest,
    SearchProviderError, SearchProviderTrait, TrackHandle,
};
use crate::types::SongQuery;
use async_trait::async_trait;
use catalog_client::{CatalogAuthorization, CatalogSongId, MusicCatalogClient};

const PLAYLIST_DESCRIPTION: &str = "Created by playlist-bot";

impl Into<TrackHandle> for catalog_client::CatalogSong {
    fn into(self) -> TrackHandle {
        TrackHandle {
            id: self.id.to_string(),
            title: self.title,
            artist: self.artist_name,
        }
    }
}

#[async_trait]
impl SearchProviderTrait for MusicCatalogClient {
    async fn search_song(
        &self,
        query: &SongQuery,
    ) -> Result<Option<TrackHandle>, SearchProviderError> {
        let term = format!("{} {}", query.title, query.artist);

        let songs = self
            .search_songs(&term)
            .await
            .map_err(|error| SearchProviderError(Box::new(error)))?;

        Ok(songs.into_iter().next().map(Into::into))
    }
}

#[async_trait]
impl MusicLibraryTrait for MusicCatalogClient {
    async fn authorize(&self) -> Result<AuthorizationStatus, MusicLibraryError> {
        let authorization = MusicCatalogClient::authorize(self)
            .await
            .map_err(|error| MusicLibraryError(Box::new(error)))?;

        Ok(match authorization {
            CatalogAuthorization::Authorized => AuthorizationStatus::Authorized,
            CatalogAuthorization::Denied => AuthorizationStatus::Denied,
            CatalogAuthorization::Restricted => AuthorizationStatus::Restricted,
        })
    }

    async fn create_playlist(
        &self,
        request: &PlaylistRequest,
    ) -> Result<PlaylistHandle, MusicLibraryError> {
        let song_ids = request
            .items
            .iter()
            .map(|track| CatalogSongId(track.id.clone()))
            .collect::<Vec<_>>();

        let playlist = MusicCatalogClient::create_playlist(
            self,
            &request.name,
            PLAYLIST_DESCRIPTION,
            &song_ids,
        )
        .await
        .map_err(|error| MusicLibraryError(Box::new(error)))?;

        Ok(PlaylistHandle {
            id: playlist.id.to_string(),
            name: playlist.name,
        })
    }
}
