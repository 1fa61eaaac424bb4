use crate::services::playlist_request_processor::types::{
    AuthorizationStatus, PlaylistHandle, PlaylistRequest, TrackHandle,
};
use crate::types::SongQuery;
use async_trait::async_trait;
use std::fmt::Formatter;

#[derive(Debug, thiserror::Error)]
pub(crate) struct SearchProviderError(pub(crate) Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for SearchProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub(crate) trait SearchProviderTrait {
    async fn search_song(
        &self,
        query: &SongQuery,
    ) -> Result<Option<TrackHandle>, SearchProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub(crate) struct MusicLibraryError(pub(crate) Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for MusicLibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub(crate) trait MusicLibraryTrait {
    async fn authorize(&self) -> Result<AuthorizationStatus, MusicLibraryError>;
    async fn create_playlist(
        &self,
        request: &PlaylistRequest,
    ) -> Result<PlaylistHandle, MusicLibraryError>;
}
