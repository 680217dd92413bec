//! High score ranking
//!
//! A short table of `(name, score)` rows kept sorted by score, best first.
//! Ties keep the order in which they were added.

use serde::{Deserialize, Serialize};

use crate::consts::RANKING_SIZE;

/// A single ranking row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: i64,
}

impl RankingEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Top-N leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingTable {
    entries: Vec<RankingEntry>,
    capacity: usize,
}

impl Default for RankingTable {
    fn default() -> Self {
        Self::new(RANKING_SIZE)
    }
}

impl RankingTable {
    /// Create an empty table holding at most `capacity` rows
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Build a table from rows in any order (sorted and truncated)
    pub fn from_entries(entries: Vec<RankingEntry>, capacity: usize) -> Self {
        let mut table = Self { entries, capacity };
        if table.entries.len() > capacity {
            log::warn!(
                "Ranking holds {} rows, keeping the best {capacity}",
                table.entries.len()
            );
        }
        table.normalize();
        table
    }

    /// Add a new score, then re-sort and trim
    /// Returns the rank achieved (1-indexed) or None if it was trimmed away
    pub fn add_score(&mut self, name: impl Into<String>, score: i64) -> Option<usize> {
        self.entries.push(RankingEntry::new(name, score));
        let marker = self.entries.len() - 1;

        // Stable sort: the new row lands after every existing row it ties with
        let mut indexed: Vec<(usize, RankingEntry)> =
            std::mem::take(&mut self.entries).into_iter().enumerate().collect();
        indexed.sort_by(|a, b| b.1.score.cmp(&a.1.score));
        let rank = indexed.iter().position(|(i, _)| *i == marker);
        self.entries = indexed.into_iter().map(|(_, e)| e).collect();

        self.entries.truncate(self.capacity);
        rank.filter(|&r| r < self.capacity).map(|r| r + 1)
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First character upper-cased, the rest lower-cased
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(table: &RankingTable) -> Vec<i64> {
        table.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_insert_sequence_keeps_top_five() {
        let mut table = RankingTable::new(5);
        for (i, score) in [10, 50, 30, 90, 5, 70].into_iter().enumerate() {
            table.add_score(format!("p{i}"), score);
            assert!(table.len() <= 5);
        }
        assert_eq!(scores(&table), vec![90, 70, 50, 30, 10]);
    }

    #[test]
    fn test_rank_reporting() {
        let mut table = RankingTable::new(3);
        assert_eq!(table.add_score("a", 10), Some(1));
        assert_eq!(table.add_score("b", 30), Some(1));
        assert_eq!(table.add_score("c", 20), Some(2));
        assert_eq!(table.add_score("d", 5), None);
        assert_eq!(scores(&table), vec![30, 20, 10]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut table = RankingTable::new(5);
        table.add_score("first", 40);
        table.add_score("second", 40);
        assert_eq!(table.add_score("third", 40), Some(3));
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_tie_at_the_cut_drops_newcomer() {
        let mut table = RankingTable::new(2);
        table.add_score("a", 7);
        table.add_score("b", 7);
        assert_eq!(table.add_score("c", 7), None);
        assert_eq!(table.entries()[1].name, "b");
    }

    #[test]
    fn test_from_entries_sorts_and_trims() {
        let rows = (0..8).map(|i| RankingEntry::new(format!("n{i}"), i)).collect();
        let table = RankingTable::from_entries(rows, 5);
        assert_eq!(scores(&table), vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ab"), "Ab");
        assert_eq!(capitalize("mARTA"), "Marta");
        assert_eq!(capitalize("łukasz"), "Łukasz");
        assert_eq!(capitalize(""), "");
    }
}
