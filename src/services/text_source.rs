use async_trait::async_trait;
use std::fmt::Formatter;

#[derive(Debug, thiserror::Error)]
pub(crate) struct TextSourceError(pub(crate) Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for TextSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub(crate) trait TextSourceTrait {
    async fn load_text(&self) -> Result<String, TextSourceError>;
}

// Demo list used when no other text source is given.
const BUILT_IN_SONG_LIST: &str = r#"
    "Tossin’ and Turnin’ - Bobby Lewis",
    "I Fall to Pieces - Patsy Cline",
    "Michael - The Highwaymen",
    "Crying - Roy Orbison",
    "Runaway - Del Shannon",
    "My True Story - The Jive Five",
    "Pony Time - Chubby Checker",
    "Raindrops - Dee Clark",
    "Wooden Heart - Joe Dowell",
    "Take Good Care of My Baby - Bobby Vee",
    "Runaround Sue - Dion",
    "Quarter to Three - Gary U.S. Bonds",
    "The Lion Sleeps Tonight - The Tokens",
    "Blue Moon - The Marcels",
    "Hit the Road Jack - Ray Charles",
    "Stand by Me - Ben E. King",
    "Cupid - Sam Cooke"
"#;

pub(crate) struct StaticTextSource {
    text: &'static str,
}

impl Default for StaticTextSource {
    fn default() -> Self {
        Self {
            text: BUILT_IN_SONG_LIST,
        }
    }
}

#[async_trait]
impl TextSourceTrait for StaticTextSource {
    async fn load_text(&self) -> Result<String, TextSourceError> {
        Ok(self.text.to_string())
    }
}

pub(crate) struct PastedTextSource(pub(crate) String);

#[async_trait]
impl TextSourceTrait for PastedTextSource {
    async fn load_text(&self) -> Result<String, TextSourceError> {
        Ok(self.0.clone())
    }
}

pub(crate) struct FileTextSource {
    path: String,
}

impl FileTextSource {
    pub(crate) fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TextSourceTrait for FileTextSource {
    async fn load_text(&self) -> Result<String, TextSourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|error| TextSourceError(Box::new(error)))
    }
}

#[cfg(test)]
mod tests {
    use super::{FileTextSource, PastedTextSource, StaticTextSource, TextSourceTrait};
    use std::io::Write;

    #[actix_rt::test]
    async fn static_source_returns_built_in_list() {
        let text = StaticTextSource::default().load_text().await.unwrap();

        assert!(text.contains("Crying - Roy Orbison"));
    }

    #[actix_rt::test]
    async fn pasted_source_returns_given_text() {
        let source = PastedTextSource("\"A - B\"".to_string());

        assert_eq!(source.load_text().await.unwrap(), "\"A - B\"");
    }

    #[actix_rt::test]
    async fn file_source_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\"Crying - Roy Orbison\"").unwrap();

        let source = FileTextSource::new(file.path().to_str().unwrap().to_string());

        assert_eq!(source.load_text().await.unwrap(), "\"Crying - Roy Orbison\"");
    }

    #[actix_rt::test]
    async fn file_source_fails_on_missing_file() {
        let source = FileTextSource::new("does/not/exist.txt".to_string());

        assert!(source.load_text().await.is_err());
    }
}
