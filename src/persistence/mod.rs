//! Score file storage
//!
//! The ranking lives in a small CSV table:
//! - Header row `Name,Score`
//! - One row per entry, best first, no index column
//! - Rewritten whole (never appended) after every update

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::highscores::{RankingEntry, RankingTable};

/// Header row of the score file
pub const HEADER: &str = "Name,Score";

/// Where the ranking table is kept between sessions
pub trait ScoreStore {
    fn load(&mut self, capacity: usize) -> Result<RankingTable>;
    fn save(&mut self, table: &RankingTable) -> Result<()>;
}

/// CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvScoreFile {
    path: PathBuf,
}

impl CsvScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for CsvScoreFile {
    fn load(&mut self, capacity: usize) -> Result<RankingTable> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let table = RankingTable::from_entries(parse_scores(&text)?, capacity);
        log::info!("Loaded {} high scores", table.len());
        Ok(table)
    }

    fn save(&mut self, table: &RankingTable) -> Result<()> {
        std::fs::write(&self.path, format_scores(table)).map_err(|e| Error::io(&self.path, e))?;
        log::info!("High scores saved ({} entries)", table.len());
        Ok(())
    }
}

/// In-memory store, for tests and sessions without a disk
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub contents: String,
    pub saves: usize,
}

impl MemoryScoreStore {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self, capacity: usize) -> Result<RankingTable> {
        Ok(RankingTable::from_entries(
            parse_scores(&self.contents)?,
            capacity,
        ))
    }

    fn save(&mut self, table: &RankingTable) -> Result<()> {
        self.contents = format_scores(table);
        self.saves += 1;
        Ok(())
    }
}

/// Parse a `Name,Score` table
pub fn parse_scores(text: &str) -> Result<Vec<RankingEntry>> {
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == HEADER => {}
        Some((_, header)) => {
            return Err(Error::malformed(1, format!("expected header {HEADER:?}, got {header:?}")));
        }
        None => return Err(Error::malformed(1, "missing header")),
    }

    let mut entries = Vec::new();
    for (index, line) in lines {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_row(line).map_err(|reason| Error::malformed(line_no, reason))?;
        let [name, score] = <[String; 2]>::try_from(fields).map_err(|fields| {
            Error::malformed(line_no, format!("expected 2 fields, got {}", fields.len()))
        })?;
        let score = score
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::malformed(line_no, format!("bad score {score:?}: {e}")))?;
        entries.push(RankingEntry { name, score });
    }
    Ok(entries)
}

/// Render a table as `Name,Score` CSV
pub fn format_scores(table: &RankingTable) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for entry in table.entries() {
        out.push_str(&quote_field(&entry.name));
        out.push(',');
        out.push_str(&entry.score.to_string());
        out.push('\n');
    }
    out
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split one CSV row, honouring double-quoted fields
fn split_row(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        match (quoted, c) {
            (true, '"') if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            (true, '"') => quoted = false,
            (true, c) => field.push(c),
            (false, '"') if field.is_empty() => quoted = true,
            (false, ',') => fields.push(std::mem::take(&mut field)),
            (false, c) => field.push(c),
        }
    }
    if quoted {
        return Err("unterminated quote".to_string());
    }
    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_table() {
        let text = "Name,Score\nMarta,90\nOla,70\n";
        let entries = parse_scores(text).expect("valid table");
        assert_eq!(
            entries,
            vec![RankingEntry::new("Marta", 90), RankingEntry::new("Ola", 70)]
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse_scores("Name,Score\n").expect("header only").is_empty());
    }

    #[test]
    fn test_rejects_missing_header() {
        let err = parse_scores("Marta,90\n").unwrap_err();
        assert!(matches!(err, Error::MalformedScores { line: 1, .. }));
        assert!(parse_scores("").is_err());
    }

    #[test]
    fn test_rejects_bad_score() {
        let err = parse_scores("Name,Score\nMarta,ninety\n").unwrap_err();
        assert!(matches!(err, Error::MalformedScores { line: 2, .. }));
    }

    #[test]
    fn test_rejects_extra_columns() {
        let err = parse_scores("Name,Score\n0,Marta,90\n").unwrap_err();
        assert!(matches!(err, Error::MalformedScores { line: 2, .. }));
    }

    #[test]
    fn test_quoted_names_survive() {
        let mut table = RankingTable::new(5);
        table.add_score("Smith, \"Jr\"", 12);
        let text = format_scores(&table);
        assert_eq!(text, "Name,Score\n\"Smith, \"\"Jr\"\"\",12\n");
        assert_eq!(parse_scores(&text).expect("quoted"), table.entries());
    }

    #[test]
    fn test_memory_store_rewrites_whole_table() {
        let mut store = MemoryScoreStore::new("Name,Score\nA,3\n");
        let mut table = store.load(5).expect("load");
        table.add_score("B", 9);
        store.save(&table).expect("save");
        assert_eq!(store.contents, "Name,Score\nB,9\nA,3\n");
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_csv_file_round_trip_on_disk() {
        let path = std::env::temp_dir().join(format!("piglet-scores-{}.csv", std::process::id()));
        let mut store = CsvScoreFile::new(&path);
        let mut table = RankingTable::new(5);
        table.add_score("Ab", 17);
        store.save(&table).expect("save");
        let loaded = store.load(5).expect("load");
        assert_eq!(loaded, table);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut store = CsvScoreFile::new("/nonexistent/dir/scores.csv");
        assert!(matches!(store.load(5), Err(Error::Io { .. })));
    }
}
