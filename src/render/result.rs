//! Decoration result with statistics.

use serde::{Deserialize, Serialize};

/// Result of decorating a page, including the markup and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorateResult {
    /// The decorated page
    pub html: String,

    /// Decoration statistics
    pub stats: DecorateStats,
}

impl DecorateResult {
    /// Create a new result.
    pub fn new(html: String, stats: DecorateStats) -> Self {
        Self { html, stats }
    }

    /// Get the output length in bytes.
    pub fn html_len(&self) -> usize {
        self.html.len()
    }
}

/// Counts collected while decorating a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorateStats {
    /// Blocks found on the page
    pub block_count: u32,

    /// Blocks whose content was replaced
    pub decorated: u32,

    /// Blocks left untouched for missing content
    pub skipped: u32,

    /// Blocks whose decorator returned an error
    pub failed: u32,

    /// Rows classified across all blocks
    pub row_count: u32,

    /// Block names with no registered decorator
    pub unknown: Vec<String>,
}

impl DecorateStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a replaced block.
    pub fn add_decorated(&mut self) {
        self.block_count += 1;
        self.decorated += 1;
    }

    /// Record a block left untouched.
    pub fn add_skipped(&mut self) {
        self.block_count += 1;
        self.skipped += 1;
    }

    /// Record a block whose decorator failed.
    pub fn add_failed(&mut self) {
        self.block_count += 1;
        self.failed += 1;
    }

    /// Record classified rows.
    pub fn add_rows(&mut self, rows: usize) {
        self.row_count += rows as u32;
    }

    /// Record an unregistered block name once.
    pub fn add_unknown(&mut self, name: &str) {
        if !self.unknown.iter().any(|n| n == name) {
            self.unknown.push(name.to_string());
        }
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DecorateStats) {
        self.block_count += other.block_count;
        self.decorated += other.decorated;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.row_count += other.row_count;
        for name in &other.unknown {
            self.add_unknown(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counts() {
        let mut stats = DecorateStats::new();
        stats.add_decorated();
        stats.add_skipped();
        stats.add_failed();
        stats.add_unknown("carousel");
        stats.add_unknown("carousel");

        assert_eq!(stats.block_count, 3);
        assert_eq!(stats.unknown, vec!["carousel"]);
    }

    #[test]
    fn test_stats_merge() {
        let mut stats1 = DecorateStats::new();
        stats1.decorated = 5;
        stats1.add_unknown("tabs");

        let stats2 = DecorateStats {
            decorated: 3,
            failed: 1,
            unknown: vec!["tabs".to_string(), "quote".to_string()],
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.decorated, 8);
        assert_eq!(stats1.failed, 1);
        assert_eq!(stats1.unknown, vec!["tabs", "quote"]);
    }

    #[test]
    fn test_result_len() {
        let result = DecorateResult::new("<main></main>".to_string(), DecorateStats::default());
        assert_eq!(result.html_len(), 13);
    }
}
