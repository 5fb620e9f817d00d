//! Option filtering for the pickers.

use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Ranks picker options against a typed query.
#[derive(Clone)]
pub struct FuzzySearcher {
    matcher: Arc<SkimMatcherV2>,
    fuzzy: bool,
}

impl Default for FuzzySearcher {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FuzzySearcher {
    /// Creates searcher; with `fuzzy` off only case-insensitive substrings match.
    #[must_use]
    pub fn new(fuzzy: bool) -> Self {
        Self {
            matcher: Arc::new(SkimMatcherV2::default().ignore_case()),
            fuzzy,
        }
    }

    /// Match score of `choice`, `None` if it does not match.
    #[must_use]
    pub fn score(&self, choice: &str, pattern: &str) -> Option<i64> {
        if self.fuzzy {
            self.matcher.fuzzy_match(choice, pattern)
        } else {
            choice
                .to_lowercase()
                .contains(&pattern.to_lowercase())
                .then_some(0)
        }
    }

    /// Indices of matching options, best match first. Ties keep service order.
    #[must_use]
    pub fn rank<S: AsRef<str>>(&self, options: &[S], query: &str) -> Vec<usize> {
        let query = query.trim();
        if query.is_empty() {
            return (0..options.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = options
            .iter()
            .enumerate()
            .filter_map(|(i, option)| self.score(option.as_ref(), query).map(|s| (i, s)))
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(i, _)| i).collect()
    }
}
