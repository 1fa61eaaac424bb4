mod playlist_request_processor;
pub(crate) use playlist_request_processor::*;

mod song_list_parser;
pub(crate) use song_list_parser::*;

mod text_source;
pub(crate) use text_source::*;
