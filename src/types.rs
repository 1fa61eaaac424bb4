use serde::Serialize;
use std::ops::Deref;
use uuid::Uuid;

#[derive(Eq, PartialEq, Clone, Hash, Debug, Serialize)]
pub(crate) struct RunId(pub(crate) Uuid);

impl Deref for RunId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Into<RunId> for Uuid {
    fn into(self) -> RunId {
        RunId(self)
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Eq, PartialEq, Clone, Debug, Serialize)]
pub(crate) struct SongQuery {
    pub(crate) title: String,
    pub(crate) artist: String,
}

impl SongQuery {
    pub(crate) fn new(title: String, artist: String) -> Self {
        Self { title, artist }
    }
}
