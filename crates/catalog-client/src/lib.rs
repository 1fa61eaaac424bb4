mod catalog;

use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub use catalog::*;

// CatalogSongId
#[derive(Eq, PartialEq, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct CatalogSongId(pub String);

impl Deref for CatalogSongId {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Into<CatalogSongId> for String {
    fn into(self) -> CatalogSongId {
        CatalogSongId(self)
    }
}

impl std::fmt::Display for CatalogSongId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// CatalogPlaylistId
#[derive(Eq, PartialEq, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct CatalogPlaylistId(pub String);

impl Deref for CatalogPlaylistId {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Into<CatalogPlaylistId> for String {
    fn into(self) -> CatalogPlaylistId {
        CatalogPlaylistId(self)
    }
}

impl std::fmt::Display for CatalogPlaylistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
