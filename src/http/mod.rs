mod health;
mod playlist_request;

pub(crate) use health::readiness_check;
pub(crate) use playlist_request::{get_progress_events, make_match_request, make_playlist_request};
