use crate::types::SongQuery;
use tracing::debug;

const STRIPPED_QUOTES: [char; 3] = ['"', '“', '”'];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ParsedSongList {
    pub(crate) entries: Vec<SongQuery>,
    pub(crate) dropped_entries: usize,
}

// Entries are "Title - Artist" separated by commas. An entry that does not
// split into exactly two non-empty parts on "-" is dropped without an error,
// so titles containing a literal "-" are lost. Dropped entries are counted.
pub(crate) fn parse_song_list(raw: &str) -> ParsedSongList {
    let mut entries = vec![];
    let mut dropped_entries = 0;

    for segment in raw.split(',') {
        let cleaned = segment
            .trim()
            .replace(&STRIPPED_QUOTES[..], "")
            .trim()
            .to_string();

        if cleaned.is_empty() {
            continue;
        }

        let parts = cleaned.split('-').map(str::trim).collect::<Vec<_>>();

        match parts[..] {
            [title, artist] if !title.is_empty() && !artist.is_empty() => {
                entries.push(SongQuery::new(title.to_string(), artist.to_string()));
            }
            _ => {
                debug!(entry = %cleaned, "Dropping song entry that is not in \"Title - Artist\" form");
                dropped_entries += 1;
            }
        }
    }

    ParsedSongList {
        entries,
        dropped_entries,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_song_list, ParsedSongList};
    use crate::types::SongQuery;

    #[test]
    fn should_parse_quoted_title_artist_entries() {
        let parsed = parse_song_list("\"A - B\", \"C - D\"");

        assert_eq!(
            parsed,
            ParsedSongList {
                entries: vec![
                    SongQuery::new("A".into(), "B".into()),
                    SongQuery::new("C".into(), "D".into()),
                ],
                dropped_entries: 0,
            }
        );
    }

    #[test]
    fn should_strip_curly_quotes_and_surrounding_whitespace() {
        let parsed = parse_song_list("  “Crying - Roy Orbison”  ,\n  “Runaway - Del Shannon”  ");

        assert_eq!(
            parsed.entries,
            vec![
                SongQuery::new("Crying".into(), "Roy Orbison".into()),
                SongQuery::new("Runaway".into(), "Del Shannon".into()),
            ]
        );
    }

    #[test]
    fn should_drop_entry_without_separator() {
        let parsed = parse_song_list("\"Single Word\"");

        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.dropped_entries, 1);
    }

    #[test]
    fn should_drop_entry_with_multiple_separators() {
        let parsed = parse_song_list("\"A - B - C\"");

        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.dropped_entries, 1);
    }

    #[test]
    fn should_drop_hyphenated_artist_entry() {
        // Known lossy behavior: hyphens inside names break the two-part split.
        let parsed = parse_song_list("\"Mother-In-Law - Ernie K-Doe\"");

        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.dropped_entries, 1);
    }

    #[test]
    fn should_drop_entry_with_empty_title_or_artist() {
        let parsed = parse_song_list("\"- The Beatles\", \"Yesterday -\"");

        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.dropped_entries, 2);
    }

    #[test]
    fn should_ignore_empty_segments_without_counting_them() {
        let parsed = parse_song_list("\"A - B\",\n,");

        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.dropped_entries, 0);
    }

    #[test]
    fn should_keep_input_order_and_never_exceed_segment_count() {
        let raw = "\"A - B\", \"Oops\", \"C - D\", \"E - F - G\", \"H - I\"";
        let parsed = parse_song_list(raw);

        assert_eq!(
            parsed.entries,
            vec![
                SongQuery::new("A".into(), "B".into()),
                SongQuery::new("C".into(), "D".into()),
                SongQuery::new("H".into(), "I".into()),
            ]
        );
        assert_eq!(parsed.dropped_entries, 2);
        assert!(parsed.entries.len() <= raw.split(',').count());
    }
}
