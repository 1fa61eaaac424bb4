use crate::services::playlist_request_processor::progress::{ProgressEvent, ProgressLog};
use crate::services::playlist_request_processor::traits::{
    MusicLibraryError, MusicLibraryTrait, SearchProviderTrait,
};
use crate::services::playlist_request_processor::types::{
    AuthorizationStatus, MatchResult, MatchRunState, MatchingPassReport, PlaylistHandle,
    PlaylistRequest, RunStatusSnapshot,
};
use crate::services::song_list_parser::ParsedSongList;
use crate::types::RunId;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub(crate) enum MatchingPassError {
    #[error("Another matching pass is already running")]
    PassAlreadyRunning,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CreatePlaylistError {
    #[error("Playlist name cannot be empty")]
    EmptyPlaylistName,
    #[error("There are no matched songs to put in the playlist")]
    NoMatchedSongs,
    #[error(transparent)]
    MusicLibraryError(#[from] MusicLibraryError),
}

pub(crate) struct PlaylistRequestProcessor {
    search_provider: Arc<dyn SearchProviderTrait + Send + Sync>,
    music_library: Arc<dyn MusicLibraryTrait + Send + Sync>,
    progress_log: Arc<ProgressLog>,
    run_state: Mutex<MatchRunState>,
}

impl PlaylistRequestProcessor {
    pub(crate) fn new(
        search_provider: Arc<dyn SearchProviderTrait + Send + Sync>,
        music_library: Arc<dyn MusicLibraryTrait + Send + Sync>,
        progress_log: Arc<ProgressLog>,
    ) -> Self {
        Self {
            search_provider,
            music_library,
            progress_log,
            run_state: Mutex::new(MatchRunState::default()),
        }
    }

    // One-shot startup check. A rejected authorization is logged and the
    // process keeps running; later catalog calls will fail per-query.
    pub(crate) async fn check_authorization(&self) -> AuthorizationStatus {
        match self.music_library.authorize().await {
            Ok(AuthorizationStatus::Authorized) => {
                info!("Authorized to access the music catalog");
                self.progress_log.publish(ProgressEvent::AuthorizationGranted);
                AuthorizationStatus::Authorized
            }
            Ok(status) => {
                warn!(%status, "Not authorized to access the music catalog");
                self.progress_log.publish(ProgressEvent::AuthorizationDenied {
                    reason: status.to_string(),
                });
                status
            }
            Err(error) => {
                error!(?error, "Music catalog authorization check failed");
                self.progress_log.publish(ProgressEvent::AuthorizationDenied {
                    reason: error.to_string(),
                });
                AuthorizationStatus::Denied
            }
        }
    }

    pub(crate) async fn run_matching_pass(
        &self,
        song_list: ParsedSongList,
    ) -> Result<MatchingPassReport, MatchingPassError> {
        self.run_state.lock().unwrap().begin_pass()?;

        let run_id: RunId = Uuid::new_v4().into();

        info!(%run_id, songs = song_list.entries.len(), dropped = song_list.dropped_entries, "Starting matching pass");

        self.progress_log.publish(ProgressEvent::SongListParsed {
            songs: song_list.entries.len(),
            dropped: song_list.dropped_entries,
        });

        let mut results = Vec::with_capacity(song_list.entries.len());

        for query in &song_list.entries {
            debug!(%run_id, title = %query.title, artist = %query.artist, "Searching catalog");

            let result = match self.search_provider.search_song(query).await {
                Ok(Some(track)) => {
                    self.progress_log.publish(ProgressEvent::SongMatched {
                        title: track.title.clone(),
                        artist: track.artist.clone(),
                    });
                    self.run_state.lock().unwrap().push_matched(track.clone());
                    MatchResult::Found { track }
                }
                Ok(None) => {
                    self.progress_log.publish(ProgressEvent::SongNotFound {
                        title: query.title.clone(),
                        artist: query.artist.clone(),
                    });
                    MatchResult::NotFound
                }
                Err(error) => {
                    warn!(%run_id, ?error, title = %query.title, "Catalog search failed");
                    self.progress_log.publish(ProgressEvent::SearchFailed {
                        title: query.title.clone(),
                        artist: query.artist.clone(),
                        reason: error.to_string(),
                    });
                    MatchResult::NotFound
                }
            };

            results.push(result);
        }

        let found = results.iter().filter(|r| r.is_found()).count();

        self.progress_log.publish(ProgressEvent::MatchingFinished {
            found,
            total: results.len(),
        });

        self.run_state.lock().unwrap().finish_pass();

        info!(%run_id, found, total = results.len(), "Matching pass finished");

        Ok(MatchingPassReport {
            run_id,
            total: results.len(),
            found,
            results,
        })
    }

    pub(crate) async fn create_playlist(
        &self,
        name: &str,
    ) -> Result<PlaylistHandle, CreatePlaylistError> {
        if name.is_empty() {
            let error = CreatePlaylistError::EmptyPlaylistName;
            self.progress_log.publish(ProgressEvent::CreateRejected {
                reason: error.to_string(),
            });
            return Err(error);
        }

        let items = self.run_state.lock().unwrap().matched_tracks.clone();

        if items.is_empty() {
            let error = CreatePlaylistError::NoMatchedSongs;
            self.progress_log.publish(ProgressEvent::CreateRejected {
                reason: error.to_string(),
            });
            return Err(error);
        }

        info!(name, items = items.len(), "Creating playlist");

        let request = PlaylistRequest {
            name: name.to_string(),
            items,
        };

        match self.music_library.create_playlist(&request).await {
            Ok(playlist) => {
                self.progress_log.publish(ProgressEvent::PlaylistCreated {
                    name: playlist.name.clone(),
                });
                Ok(playlist)
            }
            Err(error) => {
                error!(?error, name, "Playlist creation failed");
                self.progress_log
                    .publish(ProgressEvent::PlaylistCreationFailed {
                        reason: error.to_string(),
                    });
                Err(error.into())
            }
        }
    }

    pub(crate) fn status(&self) -> RunStatusSnapshot {
        let state = self.run_state.lock().unwrap();

        RunStatusSnapshot {
            phase: state.phase,
            matched_tracks: state.matched_tracks.len(),
        }
    }

    pub(crate) fn progress_events(&self) -> Vec<ProgressEvent> {
        self.progress_log.snapshot()
    }
}
