use crate::services::{
    parse_song_list, CreatePlaylistError, FileTextSource, MatchingPassError, PastedTextSource,
    PlaylistRequestProcessor, ProgressEvent, StaticTextSource, TextSourceTrait,
};
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
pub(crate) struct MatchRequestPayload {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    file: Option<String>,
}

pub(crate) async fn make_match_request(
    processor: Data<Arc<PlaylistRequestProcessor>>,
    payload: Json<MatchRequestPayload>,
) -> impl Responder {
    let payload = payload.into_inner();

    let text_source: Box<dyn TextSourceTrait + Send + Sync> = match (payload.text, payload.file) {
        (Some(text), _) => Box::new(PastedTextSource(text)),
        (None, Some(path)) => Box::new(FileTextSource::new(path)),
        (None, None) => Box::new(StaticTextSource::default()),
    };

    let raw_text = match text_source.load_text().await {
        Ok(raw_text) => raw_text,
        Err(error) => {
            error!(?error, "Unable to load song list text");
            return HttpResponse::BadRequest().body(error.to_string());
        }
    };

    match processor.run_matching_pass(parse_song_list(&raw_text)).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(error @ MatchingPassError::PassAlreadyRunning) => {
            HttpResponse::Conflict().body(error.to_string())
        }
    }
}

#[derive(Serialize)]
struct ProgressEventView {
    message: String,
    #[serde(flatten)]
    event: ProgressEvent,
}

pub(crate) async fn get_progress_events(
    processor: Data<Arc<PlaylistRequestProcessor>>,
) -> impl Responder {
    let status = processor.status();
    let events = processor
        .progress_events()
        .into_iter()
        .map(|event| ProgressEventView {
            message: event.to_string(),
            event,
        })
        .collect::<Vec<_>>();

    HttpResponse::Ok().json(serde_json::json!({
        "phase": status.phase,
        "matched_tracks": status.matched_tracks,
        "events": events,
    }))
}

#[derive(Deserialize)]
pub(crate) struct CreatePlaylistPayload {
    name: String,
}

pub(crate) async fn make_playlist_request(
    processor: Data<Arc<PlaylistRequestProcessor>>,
    payload: Json<CreatePlaylistPayload>,
) -> impl Responder {
    match processor.create_playlist(&payload.name).await {
        Ok(playlist) => HttpResponse::Created().json(playlist),
        Err(
            error @ (CreatePlaylistError::EmptyPlaylistName | CreatePlaylistError::NoMatchedSongs),
        ) => HttpResponse::BadRequest().body(error.to_string()),
        Err(error) => {
            error!(?error, "Playlist creation request failed");
            HttpResponse::InternalServerError().body(error.to_string())
        }
    }
}
