use std::collections::HashMap;

/// Frequency table that remembers first-seen order, so that a stable sort
/// by count breaks ties deterministically.
#[derive(Debug, Default)]
pub(crate) struct TermCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl TermCounts {
    pub(crate) fn add(&mut self, term: String) {
        match self.index.get(&term) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(term.clone(), self.entries.len());
                self.entries.push((term, 1));
            }
        }
    }

    /// Terms with a count of at least `min_count`, most frequent first, at most `limit`.
    pub(crate) fn top(self, limit: usize, min_count: usize) -> Vec<String> {
        let mut entries: Vec<(String, usize)> = self.entries.into_iter().filter(|(_, c)| *c >= min_count).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().take(limit).map(|(term, _)| term).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TermCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = Self::default();
        for term in iter {
            counts.add(term.into());
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_seen_order() {
        let counts: TermCounts = ["b", "a", "c", "a", "b"].into_iter().collect();
        assert_eq!(counts.top(10, 1), vec!["b", "a", "c"]);
    }

    #[test]
    fn min_count_and_limit() {
        let counts: TermCounts = ["x", "y", "y", "z", "z", "z"].into_iter().collect();
        assert_eq!(counts.top(10, 2), vec!["z", "y"]);
        let counts: TermCounts = ["x", "y", "y", "z", "z", "z"].into_iter().collect();
        assert_eq!(counts.top(1, 1), vec!["z"]);
    }
}
