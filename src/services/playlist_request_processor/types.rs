use crate::services::playlist_request_processor::MatchingPassError;
use crate::types::RunId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TrackHandle {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome")]
pub(crate) enum MatchResult {
    Found { track: TrackHandle },
    NotFound,
}

impl MatchResult {
    pub(crate) fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaylistRequest {
    pub(crate) name: String,
    pub(crate) items: Vec<TrackHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct PlaylistHandle {
    pub(crate) id: String,
    pub(crate) name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum AuthorizationStatus {
    Authorized,
    Denied,
    Restricted,
}

impl std::fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorizationStatus::Authorized => write!(f, "authorized"),
            AuthorizationStatus::Denied => write!(f, "denied"),
            AuthorizationStatus::Restricted => write!(f, "restricted"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum RunPhase {
    #[default]
    Idle,
    Searching,
    Done,
}

// Single owner of the accumulated match list. A pass may only start from
// Idle or Done; starting discards the previous pass's matches.
#[derive(Debug, Default)]
pub(crate) struct MatchRunState {
    pub(crate) phase: RunPhase,
    pub(crate) matched_tracks: Vec<TrackHandle>,
}

impl MatchRunState {
    pub(crate) fn begin_pass(&mut self) -> Result<(), MatchingPassError> {
        if matches!(self.phase, RunPhase::Searching) {
            return Err(MatchingPassError::PassAlreadyRunning);
        }

        self.matched_tracks.clear();
        self.phase = RunPhase::Searching;

        Ok(())
    }

    pub(crate) fn push_matched(&mut self, track: TrackHandle) {
        self.matched_tracks.push(track);
    }

    pub(crate) fn finish_pass(&mut self) {
        self.phase = RunPhase::Done;
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MatchingPassReport {
    pub(crate) run_id: RunId,
    pub(crate) total: usize,
    pub(crate) found: usize,
    pub(crate) results: Vec<MatchResult>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct RunStatusSnapshot {
    pub(crate) phase: RunPhase,
    pub(crate) matched_tracks: usize,
}
