use crate::config::Config;
use crate::services::{
    parse_song_list, FileTextSource, MusicLibraryTrait, PlaylistRequestProcessor, ProgressLog,
    SearchProviderTrait, TextSourceTrait,
};
use actix_rt::signal::unix;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use catalog_client::MusicCatalogClient;
use futures_lite::FutureExt;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod http;
mod impls;
mod services;
mod types;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let mut terminate = unix::signal(unix::SignalKind::terminate())?;
    let mut interrupt = unix::signal(unix::SignalKind::interrupt())?;

    dotenv::dotenv().ok();
    env_logger::init();

    let config = Arc::from(Config::from_env());

    info!(version = VERSION, "Starting application...");

    let catalog_client = Arc::new(MusicCatalogClient::create(
        &config.catalog.endpoint,
        &config.catalog.storefront,
        &config.catalog.developer_token,
        &config.catalog.music_user_token,
    ));

    let progress_log = Arc::new(ProgressLog::new());

    let playlist_request_processor = Arc::new(PlaylistRequestProcessor::new(
        Arc::clone(&catalog_client) as Arc<dyn SearchProviderTrait + Send + Sync>,
        Arc::clone(&catalog_client) as Arc<dyn MusicLibraryTrait + Send + Sync>,
        Arc::clone(&progress_log),
    ));

    playlist_request_processor.check_authorization().await;

    if let Some(path) = config.song_list_file.clone() {
        actix_rt::spawn({
            let processor = Arc::clone(&playlist_request_processor);

            async move {
                let text_source = FileTextSource::new(path);

                match text_source.load_text().await {
                    Ok(raw_text) => {
                        if let Err(error) = processor.run_matching_pass(parse_song_list(&raw_text)).await
                        {
                            error!(?error, "Startup matching pass failed");
                        }
                    }
                    Err(error) => {
                        error!(?error, "Unable to load the song list file");
                    }
                }
            }
        });
    }

    let shutdown_timeout = config.shutdown_timeout.clone();
    let bind_address = config.bind_address.clone();

    let server = HttpServer::new({
        move || {
            App::new()
                .app_data(Data::new(Arc::clone(&playlist_request_processor)))
                .service(web::resource("/health").route(web::get().to(http::readiness_check)))
                .service(web::resource("/match").route(web::post().to(http::make_match_request)))
                .service(web::resource("/events").route(web::get().to(http::get_progress_events)))
                .service(web::resource("/playlists").route(web::post().to(http::make_playlist_request)))
        }
    })
    .shutdown_timeout(shutdown_timeout)
    .bind(bind_address)?
    .run();

    let server_handle = server.handle();

    actix_rt::spawn({
        async move {
            if let Err(error) = server.await {
                error!(?error, "Error on http server");
            }
        }
    });

    info!("Application started");

    interrupt.recv().or(terminate.recv()).await;

    info!("Received shutdown signal. Shutting down gracefully...");

    server_handle.stop(true).await;

    Ok(())
}
