use crate::{CatalogPlaylistId, CatalogSongId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSong {
    pub id: CatalogSongId,
    pub title: String,
    pub artist_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPlaylist {
    pub id: CatalogPlaylistId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAuthorization {
    Authorized,
    Denied,
    Restricted,
}

impl std::fmt::Display for CatalogAuthorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogAuthorization::Authorized => write!(f, "authorized"),
            CatalogAuthorization::Denied => write!(f, "denied"),
            CatalogAuthorization::Restricted => write!(f, "restricted"),
        }
    }
}
