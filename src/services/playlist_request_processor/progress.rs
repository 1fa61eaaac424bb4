use serde::Serialize;
use std::sync::Mutex;
use tokio::sync::broadcast;

const PROGRESS_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub(crate) enum ProgressEvent {
    AuthorizationGranted,
    AuthorizationDenied { reason: String },
    SongListParsed { songs: usize, dropped: usize },
    SongMatched { title: String, artist: String },
    SongNotFound { title: String, artist: String },
    SearchFailed { title: String, artist: String, reason: String },
    MatchingFinished { found: usize, total: usize },
    PlaylistCreated { name: String },
    CreateRejected { reason: String },
    PlaylistCreationFailed { reason: String },
}

impl std::fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressEvent::AuthorizationGranted => {
                write!(f, "Authorized to access the music catalog")
            }
            ProgressEvent::AuthorizationDenied { reason } => {
                write!(f, "Not authorized to access the music catalog: {}", reason)
            }
            ProgressEvent::SongListParsed { songs, dropped } => {
                write!(f, "Parsed {} songs ({} entries dropped)", songs, dropped)
            }
            ProgressEvent::SongMatched { title, artist } => {
                write!(f, "Found song: {} by {}", title, artist)
            }
            ProgressEvent::SongNotFound { title, artist } => {
                write!(f, "Could not find {} by {}", title, artist)
            }
            ProgressEvent::SearchFailed {
                title,
                artist,
                reason,
            } => {
                write!(
                    f,
                    "Error searching the catalog for {} by {}: {}",
                    title, artist, reason
                )
            }
            ProgressEvent::MatchingFinished { found, total } => {
                write!(f, "Total songs found: {} of {}", found, total)
            }
            ProgressEvent::PlaylistCreated { name } => {
                write!(f, "Playlist created: {}", name)
            }
            ProgressEvent::CreateRejected { reason } => {
                write!(f, "{}", reason)
            }
            ProgressEvent::PlaylistCreationFailed { reason } => {
                write!(f, "Error creating playlist: {}", reason)
            }
        }
    }
}

// Append-only status feed. All mutation happens under the entries lock, so
// snapshot order always equals emission order; the broadcast side is
// best-effort fan-out for live consumers.
pub(crate) struct ProgressLog {
    entries: Mutex<Vec<ProgressEvent>>,
    sender: broadcast::Sender<ProgressEvent>,
}

impl ProgressLog {
    pub(crate) fn new() -> Self {
        let (sender, _) = broadcast::channel(PROGRESS_CHANNEL_CAPACITY);

        Self {
            entries: Mutex::new(vec![]),
            sender,
        }
    }

    pub(crate) fn publish(&self, event: ProgressEvent) {
        let mut entries = self.entries.lock().unwrap();

        entries.push(event.clone());

        let _ = self.sender.send(event);
    }

    pub(crate) fn snapshot(&self) -> Vec<ProgressEvent> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.sender.subscribe()
    }
}
