//! Display filtering for dual-list partitions.
//!
//! Filtering decides which rows a view shows; it never mutates partition
//! membership and it never reorders anything. Hidden items keep their
//! slot and reappear unchanged when the query is cleared.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// How filter text is matched against item labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Case-insensitive substring match.
    #[default]
    Contains,
    /// Fuzzy subsequence match via nucleo, for picker-style search boxes.
    Fuzzy,
}

/// Indices of `labels` that `query` keeps visible, in their original order.
///
/// An empty query keeps everything. Fuzzy mode scores with nucleo but
/// does not rank: the filter hides rows, the list order stays put.
pub fn visible_indices(mode: FilterMode, query: &str, labels: &[&str]) -> Vec<usize> {
    if query.is_empty() {
        return (0..labels.len()).collect();
    }

    match mode {
        FilterMode::Contains => {
            let needle = query.to_lowercase();
            labels
                .iter()
                .enumerate()
                .filter_map(|(index, label)| {
                    label.to_lowercase().contains(&needle).then_some(index)
                })
                .collect()
        }
        FilterMode::Fuzzy => {
            let mut matcher = Matcher::new(Config::DEFAULT);
            let pattern = Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            );

            labels
                .iter()
                .enumerate()
                .filter_map(|(index, label)| {
                    let mut buf = Vec::new();
                    let haystack = Utf32Str::new(label, &mut buf);
                    pattern.score(haystack, &mut matcher).map(|_| index)
                })
                .collect()
        }
    }
}
